mod canvas;
mod color;
mod controller;
mod error;
mod generator;
pub mod key;
mod pi;
mod state;
mod viewer;

pub const VERSION: &'static str = "1.0.0";

pub use canvas::{Canvas, MAX_CANVAS_SIDE};
pub use color::{ColorScheme, Rgb};
pub use controller::Controller;
pub use error::{FractreeError, Result};
pub use generator::{
    max_branch_count, Branch, BranchSink, Point, Stem, TreeGenerator, MIN_LENGTH, TRUNK_LENGTH,
    TRUNK_MARGIN, TRUNK_THICKNESS,
};
pub use pi::{approximate_pi, trunk_angle, TRUNK_PI_ITERATIONS};
pub use state::{
    skew_bound, Input, Limits, Season, TreeState, DEFAULT_DEPTH, DEFAULT_DEPTH_STEP,
    DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, SKEW_STEP,
};
pub use viewer::{Viewer, ViewerSettings, DEFAULT_HEIGHT, DEFAULT_WIDTH};
