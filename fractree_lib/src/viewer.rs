/*
 * Viewer
 * Glue between a display backend and the tree: it forwards key codes to the
 * controller and regenerates the canvas whenever a redraw is pending.
 */
use tracing::debug;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::controller::Controller;
use crate::error::Result;
use crate::generator::{Branch, BranchSink, Point, Stem, TreeGenerator};
use crate::state::{Season, TreeState};

pub const DEFAULT_WIDTH: usize = 500;
pub const DEFAULT_HEIGHT: usize = 700;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub glitter: bool,
    pub summer_background: Rgb,
    pub winter_background: Rgb,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        ViewerSettings {
            glitter: false,
            summer_background: Rgb::MINT,
            winter_background: Rgb::MINT,
        }
    }
}

impl ViewerSettings {
    pub fn background(&self, season: Season) -> Rgb {
        match season {
            Season::Summer => self.summer_background,
            Season::Winter => self.winter_background,
        }
    }
}

struct CountingSink<'a, S: BranchSink> {
    inner: &'a mut S,
    branches: usize,
}

impl<'a, S: BranchSink> BranchSink for CountingSink<'a, S> {
    fn branch(&mut self, branch: &Branch) {
        self.branches += 1;
        self.inner.branch(branch);
    }

    fn leaf(&mut self, at: Point, thickness: f64) {
        self.inner.leaf(at, thickness);
    }
}

pub struct Viewer {
    controller: Controller,
    canvas: Canvas,
    settings: ViewerSettings,
}

impl Viewer {
    pub fn new(controller: Controller, width: usize, height: usize, settings: ViewerSettings) -> Viewer {
        Viewer {
            controller,
            canvas: Canvas::new(width, height),
            settings,
        }
    }

    pub fn state(&self) -> TreeState {
        self.controller.state()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Window title, advertising what the space bar switches to.
    pub fn title(&self) -> String {
        let state = self.controller.state();
        format!(
            "Fractal Tree - depth {}/{} - space: Show {} Tree",
            state.depth,
            self.controller.max_depth(),
            state.season.toggled()
        )
    }

    pub fn handle_key(&mut self, code: u32) -> bool {
        self.controller.handle_input(code)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        if self.canvas.dimensions() != (width, height) {
            debug!(width, height, "canvas resized");
            self.canvas.resize(width, height);
            self.controller.request_redraw();
        }
    }

    /// Regenerates the tree if a redraw was requested since the last call.
    /// Returns whether the canvas changed.
    pub fn render(&mut self) -> Result<bool> {
        if !self.controller.take_redraw() {
            return Ok(false);
        }

        let state = self.controller.state();
        self.canvas.clear(self.settings.background(state.season));
        if self.canvas.is_empty() {
            return Ok(true);
        }

        let stem = Stem::trunk(self.canvas.width(), self.canvas.height())?;
        self.canvas.set_glitter(self.settings.glitter && state.season.is_winter());
        let mut sink = CountingSink {
            inner: &mut self.canvas,
            branches: 0,
        };
        TreeGenerator::for_state(&state).generate(stem, state.depth, &mut sink);
        debug!(
            depth = state.depth,
            season = %state.season,
            branches = sink.branches,
            "tree regenerated"
        );

        Ok(true)
    }
}
