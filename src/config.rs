use anyhow::{bail, Context, Result};
use fractree_lib::{
    Controller, Limits, Rgb, Season, TreeState, Viewer, ViewerSettings, DEFAULT_DEPTH,
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CANVAS_SIDE, MAX_SUPPORTED_DEPTH,
};
use serde::Deserialize;
use std::path::Path;

/// Viewer settings, every field is optional and falls back to the built in
/// default.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub depth: Option<i32>,
    pub skewness: Option<f64>,
    pub season: Option<Season>,
    pub depth_step: Option<i32>,
    pub summer_max_depth: Option<i32>,
    pub winter_max_depth: Option<i32>,
    pub glitter: Option<bool>,
    pub summer_background: Option<[u8; 3]>,
    pub winter_background: Option<[u8; 3]>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        // an empty document is a valid, empty configuration
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(contents).context("Failed to parse YAML")?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.width == Some(0) || self.height == Some(0) {
            bail!("window width and height must be positive");
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if let Some(side) = value {
                if side > MAX_CANVAS_SIDE {
                    bail!("{} must be at most {}, got {}", name, MAX_CANVAS_SIDE, side);
                }
            }
        }
        if let Some(step) = self.depth_step {
            if step < 1 {
                bail!("depth_step must be at least 1, got {}", step);
            }
        }
        for (name, value) in [
            ("summer_max_depth", self.summer_max_depth),
            ("winter_max_depth", self.winter_max_depth),
        ] {
            if let Some(max) = value {
                if !(1..=MAX_SUPPORTED_DEPTH).contains(&max) {
                    bail!(
                        "{} must be within [1, {}], got {}",
                        name,
                        MAX_SUPPORTED_DEPTH,
                        max
                    );
                }
            }
        }
        if let Some(skewness) = self.skewness {
            if !skewness.is_finite() {
                bail!("skewness must be a finite number");
            }
        }

        Ok(())
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }

    pub fn limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits {
            depth_step: self.depth_step.unwrap_or(defaults.depth_step),
            summer_max_depth: self.summer_max_depth.unwrap_or(defaults.summer_max_depth),
            winter_max_depth: self.winter_max_depth.unwrap_or(defaults.winter_max_depth),
        }
    }

    pub fn initial_state(&self) -> TreeState {
        TreeState::new(
            self.depth.unwrap_or(DEFAULT_DEPTH),
            self.skewness.unwrap_or(0.0),
            self.season.unwrap_or_default(),
            &self.limits(),
        )
    }

    pub fn settings(&self) -> ViewerSettings {
        let defaults = ViewerSettings::default();
        ViewerSettings {
            glitter: self.glitter.unwrap_or(defaults.glitter),
            summer_background: self
                .summer_background
                .map(Rgb::from)
                .unwrap_or(defaults.summer_background),
            winter_background: self
                .winter_background
                .map(Rgb::from)
                .unwrap_or(defaults.winter_background),
        }
    }

    pub fn viewer(&self) -> Viewer {
        let (width, height) = self.dimensions();
        let controller = Controller::new(self.initial_state(), self.limits());
        Viewer::new(controller, width, height, self.settings())
    }
}
