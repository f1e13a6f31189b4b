/*
 * Canvas
 * A software framebuffer the tree is rasterized into. Pixels are stored as
 * 0x00RRGGBB words, the layout minifb expects, and can be exported as RGBA
 * bytes for surfaces that want those.
 */
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;
use crate::generator::{Branch, BranchSink, Point};

/// Largest width or height of a canvas, larger requests are cut down to it.
pub const MAX_CANVAS_SIDE: usize = 16384;

const MIN_RADIUS: f64 = 0.5;
const GLITTER_SEED: u64 = 0x5EED_F1A4;
const GLITTER_CHANCE: f64 = 0.08;
const GLITTER_COLORS: [Rgb; 5] = [
    Rgb::new(0xE0, 0x1E, 0x37), // red
    Rgb::new(0xFF, 0xC8, 0x2E), // gold
    Rgb::new(0xC0, 0xC0, 0xD8), // silver
    Rgb::new(0x2E, 0x6B, 0xFF), // blue
    Rgb::new(0xB0, 0x3C, 0xC8), // purple
];

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    glitter: Option<StdRng>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Canvas {
        let (width, height) = (width.min(MAX_CANVAS_SIDE), height.min(MAX_CANVAS_SIDE));
        Canvas {
            width,
            height,
            pixels: vec![0; width * height],
            glitter: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Changes the surface size. The content is lost.
    pub fn resize(&mut self, width: usize, height: usize) {
        let (width, height) = (width.min(MAX_CANVAS_SIDE), height.min(MAX_CANVAS_SIDE));
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height];
    }

    pub fn clear(&mut self, color: Rgb) {
        let value = color.to_u32();
        self.pixels.iter_mut().for_each(|pixel| *pixel = value);
    }

    /// Enables leaf decorations for the next drawing pass. The decoration
    /// sequence restarts from the same seed every time, so a redraw of the
    /// same tree looks the same.
    pub fn set_glitter(&mut self, enabled: bool) {
        self.glitter = if enabled {
            Some(StdRng::seed_from_u64(GLITTER_SEED))
        } else {
            None
        };
    }

    pub fn buffer(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(Rgb::from_u32(self.pixels[y * self.width + x]))
        } else {
            None
        }
    }

    /// Writes the canvas as opaque RGBA bytes into `frame`.
    pub fn copy_to_rgba(&self, frame: &mut [u8]) {
        for (rgba, pixel) in frame.chunks_exact_mut(4).zip(self.pixels.iter()) {
            let color = Rgb::from_u32(*pixel);
            rgba[0] = color.r;
            rgba[1] = color.g;
            rgba[2] = color.b;
            rgba[3] = 0xFF;
        }
    }

    /// Draws a segment with round caps: every pixel whose center lies within
    /// `thickness / 2` of the segment is painted.
    pub fn stroke(&mut self, start: Point, end: Point, thickness: f64, color: Rgb) {
        let radius = (thickness / 2.0).max(MIN_RADIUS);
        let columns = span(start.x.min(end.x) - radius, start.x.max(end.x) + radius, self.width);
        let rows = span(start.y.min(end.y) - radius, start.y.max(end.y) + radius, self.height);
        let ((x0, x1), (y0, y1)) = match (columns, rows) {
            (Some(columns), Some(rows)) => (columns, rows),
            _ => return,
        };

        let value = color.to_u32();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_to_segment(center, start, end) <= radius {
                    self.pixels[y * self.width + x] = value;
                }
            }
        }
    }

    pub fn fill_disc(&mut self, center: Point, radius: f64, color: Rgb) {
        self.stroke(center, center, radius * 2.0, color);
    }
}

impl BranchSink for Canvas {
    fn branch(&mut self, branch: &Branch) {
        self.stroke(branch.start, branch.end, branch.thickness, branch.color);
    }

    fn leaf(&mut self, at: Point, thickness: f64) {
        let color = match self.glitter.as_mut() {
            Some(rng) => {
                if !rng.random_bool(GLITTER_CHANCE) {
                    return;
                }
                GLITTER_COLORS[rng.random_range(0..GLITTER_COLORS.len())]
            }
            None => return,
        };
        self.fill_disc(at, (thickness * 1.5).max(2.0), color);
    }
}

// pixel index range covering [lo, hi], None when it misses the surface
fn span(lo: f64, hi: f64, limit: usize) -> Option<(usize, usize)> {
    if limit == 0 || !lo.is_finite() || !hi.is_finite() || hi < 0.0 || lo >= limit as f64 {
        return None;
    }

    Some((lo.floor().max(0.0) as usize, (hi.ceil() as usize).min(limit - 1)))
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_squared = dx * dx + dy * dy;
    let t = if length_squared == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_squared).clamp(0.0, 1.0)
    };

    ((p.x - (a.x + t * dx)).powi(2) + (p.y - (a.y + t * dy)).powi(2)).sqrt()
}
