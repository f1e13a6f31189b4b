/*
 * MiniFB Display Backend for Fractree
 *
 * The window shows the viewer canvas 1:1. Resizing the window resizes the
 * canvas, which regrows the tree at the bottom center of the new surface.
 * Escape closes the window.
 */
use anyhow::{Context, Result};
use fractree_lib::{key, Viewer};
use minifb::{Key, KeyRepeat, Scale, ScaleMode, Window, WindowOptions};
use tracing::{debug, info};

use crate::DisplayBackend;

const TARGET_FPS: usize = 60;

pub struct MiniFBDisplay {
    scale: Scale,
}

fn get_key_code(key: Key) -> Option<u32> {
    match key {
        Key::Up => Some(key::UP),
        Key::Down => Some(key::DOWN),
        Key::Left => Some(key::LEFT),
        Key::Right => Some(key::RIGHT),
        Key::Space => Some(key::SPACE),
        Key::Escape => Some(key::ESCAPE),
        _ => None,
    }
}

impl MiniFBDisplay {
    pub fn new() -> MiniFBDisplay {
        MiniFBDisplay { scale: Scale::X1 }
    }
}

impl Default for MiniFBDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for MiniFBDisplay {
    fn name(&self) -> &'static str {
        "minifb"
    }

    fn run(self: Box<Self>, mut viewer: Viewer) -> Result<()> {
        let (width, height) = viewer.canvas().dimensions();
        let mut window = Window::new(
            &viewer.title(),
            width,
            height,
            WindowOptions {
                resize: true,
                scale: self.scale,
                scale_mode: ScaleMode::UpperLeft,
                ..WindowOptions::default()
            },
        )
        .context("Failed to open window.")?;
        window.set_target_fps(TARGET_FPS);
        info!(width, height, "minifb window opened");

        while window.is_open() {
            let codes: Vec<u32> = window
                .get_keys_pressed(KeyRepeat::Yes)
                .into_iter()
                .filter_map(get_key_code)
                .collect();
            if codes.contains(&key::ESCAPE) {
                break;
            }
            let mut changed = false;
            for code in codes {
                changed |= viewer.handle_key(code);
            }
            if changed {
                window.set_title(&viewer.title());
            }

            let (width, height) = window.get_size();
            if width == 0 || height == 0 {
                window.update();
                continue;
            }
            viewer.resize(width, height);
            if viewer.render()? {
                debug!("frame regenerated");
            }

            let (width, height) = viewer.canvas().dimensions();
            window
                .update_with_buffer(viewer.canvas().buffer(), width, height)
                .context("Failed to present the frame.")?;
        }

        info!("minifb window closed");
        Ok(())
    }
}
