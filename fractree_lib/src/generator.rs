/*
 * Tree generator
 * Recursively grows a ternary tree of branches from a stem. Each branch spawns
 * a right, a center and a left child at its end point until either the branch
 * length decays below one pixel or the remaining depth runs out.
 */
use crate::color::{ColorScheme, Rgb};
use crate::error::Result;
use crate::pi::trunk_angle;
use crate::state::{Season, TreeState};

pub const MIN_LENGTH: f64 = 1.0;
pub const TRUNK_LENGTH: f64 = 90.0;
pub const TRUNK_THICKNESS: f64 = 15.0;
pub const TRUNK_MARGIN: f64 = 20.0;

const SPREAD: f64 = 0.5;
const SIDE_SHRINK: f64 = 0.75;
const CENTER_SHRINK: f64 = 0.95;
const THICKNESS_SHRINK: f64 = 0.9;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The point `length` away in the direction of `angle`.
    pub fn advance(self, angle: f64, length: f64) -> Point {
        Point::new(self.x + angle.cos() * length, self.y + angle.sin() * length)
    }
}

/// One rendered segment of the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    pub color: Rgb,
}

/// Where a branch grows from and how it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stem {
    pub origin: Point,
    pub angle: f64,
    pub length: f64,
    pub thickness: f64,
    pub color: Rgb,
}

impl Stem {
    /// The trunk of a tree standing at the bottom center of a
    /// `width` × `height` surface.
    pub fn trunk(width: usize, height: usize) -> Result<Stem> {
        Ok(Stem {
            origin: Point::new(width as f64 / 2.0, height as f64 - TRUNK_MARGIN),
            angle: trunk_angle()?,
            length: TRUNK_LENGTH,
            thickness: TRUNK_THICKNESS,
            color: Rgb::BARK,
        })
    }
}

/*
 * BranchSink
 * Receives the generated branches. `leaf` is called wherever the recursion
 * stops and is a hook for decorations.
 */
pub trait BranchSink {
    fn branch(&mut self, branch: &Branch);

    fn leaf(&mut self, _at: Point, _thickness: f64) {}
}

impl BranchSink for Vec<Branch> {
    fn branch(&mut self, branch: &Branch) {
        self.push(*branch);
    }
}

/// Upper bound of the number of branches a tree of the given depth emits,
/// `(3^depth - 1) / 2`. Reached when no branch gets shorter than one pixel.
pub fn max_branch_count(depth: i32) -> u64 {
    if depth <= 0 {
        0
    } else {
        (3u64.saturating_pow(depth as u32) - 1) / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeGenerator {
    skewness: f64,
    colors: ColorScheme,
}

impl TreeGenerator {
    pub fn new(skewness: f64, season: Season) -> TreeGenerator {
        TreeGenerator {
            skewness,
            colors: ColorScheme::new(season),
        }
    }

    pub fn for_state(state: &TreeState) -> TreeGenerator {
        TreeGenerator::new(state.skewness, state.season)
    }

    pub fn generate<S: BranchSink + ?Sized>(&self, stem: Stem, depth: i32, sink: &mut S) {
        self.grow(stem, depth, sink);
    }

    fn grow<S: BranchSink + ?Sized>(&self, stem: Stem, depth: i32, sink: &mut S) {
        if stem.length <= MIN_LENGTH || depth <= 0 {
            sink.leaf(stem.origin, stem.thickness);
            return;
        }

        let end = stem.origin.advance(stem.angle, stem.length);
        if stem.length >= MIN_LENGTH {
            sink.branch(&Branch {
                start: stem.origin,
                end,
                thickness: stem.thickness,
                color: stem.color,
            });
        }

        let thickness = stem.thickness * THICKNESS_SHRINK;
        let side_length = stem.length * SIDE_SHRINK;

        let right = Stem {
            origin: end,
            angle: stem.angle + SPREAD + self.skewness,
            length: side_length,
            thickness,
            color: self.colors.right(stem.color, depth),
        };
        let center = Stem {
            origin: end,
            angle: stem.angle,
            length: stem.length * CENTER_SHRINK,
            thickness,
            color: self.colors.center(stem.color, depth),
        };
        let left = Stem {
            origin: end,
            angle: stem.angle - SPREAD + self.skewness,
            length: side_length,
            thickness,
            color: self.colors.left(stem.color, depth),
        };

        self.grow(right, depth - 1, sink);
        self.grow(center, depth - 1, sink);
        self.grow(left, depth - 1, sink);
    }
}
