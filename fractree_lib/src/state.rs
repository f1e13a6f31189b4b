use serde::Deserialize;
use std::fmt;

use crate::key;

pub const SKEW_STEP: f64 = 0.05;
pub const DEFAULT_DEPTH: i32 = 5;
pub const DEFAULT_DEPTH_STEP: i32 = 1;
pub const DEFAULT_MAX_DEPTH: i32 = 10;
/// Deepest tree the viewer draws, 14 levels already emit over 2 million branches.
pub const MAX_SUPPORTED_DEPTH: i32 = 14;

/// Largest absolute skewness, 2^0.05.
pub fn skew_bound() -> f64 {
    2.0_f64.powf(0.05)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Summer,
    Winter,
}

impl Season {
    pub fn toggled(self) -> Season {
        match self {
            Season::Summer => Season::Winter,
            Season::Winter => Season::Summer,
        }
    }

    pub fn is_winter(self) -> bool {
        self == Season::Winter
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Season::Summer => write!(f, "Summer"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    IncreaseDepth,
    DecreaseDepth,
    DecreaseSkew,
    IncreaseSkew,
    ToggleSeason,
}

impl Input {
    /// Maps a key code to the input it triggers, `None` for keys the tree
    /// does not react to.
    pub fn from_key_code(code: u32) -> Option<Input> {
        match code {
            key::UP => Some(Input::IncreaseDepth),
            key::DOWN => Some(Input::DecreaseDepth),
            key::LEFT => Some(Input::DecreaseSkew),
            key::RIGHT => Some(Input::IncreaseSkew),
            key::SPACE => Some(Input::ToggleSeason),
            _ => None,
        }
    }
}

/*
 * Limits
 * Bounds applied to the tree state after every transition. The maximum depth
 * depends on the season.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub depth_step: i32,
    pub summer_max_depth: i32,
    pub winter_max_depth: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            depth_step: DEFAULT_DEPTH_STEP,
            summer_max_depth: DEFAULT_MAX_DEPTH,
            winter_max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    /// Maximum depth for `season`, always within `[1, MAX_SUPPORTED_DEPTH]`.
    pub fn max_depth(&self, season: Season) -> i32 {
        let max = match season {
            Season::Summer => self.summer_max_depth,
            Season::Winter => self.winter_max_depth,
        };
        max.clamp(1, MAX_SUPPORTED_DEPTH)
    }
}

/// The view state driving the generator. Transitions never mutate a state,
/// they return the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeState {
    pub depth: i32,
    pub skewness: f64,
    pub season: Season,
}

impl Default for TreeState {
    fn default() -> Self {
        TreeState {
            depth: DEFAULT_DEPTH,
            skewness: 0.0,
            season: Season::Summer,
        }
    }
}

impl TreeState {
    pub fn new(depth: i32, skewness: f64, season: Season, limits: &Limits) -> TreeState {
        TreeState {
            depth,
            skewness,
            season,
        }
        .clamped(limits)
    }

    pub fn transition(self, input: Input, limits: &Limits) -> TreeState {
        let next = match input {
            Input::IncreaseDepth => TreeState {
                depth: self.depth.saturating_add(limits.depth_step),
                ..self
            },
            Input::DecreaseDepth => TreeState {
                depth: self.depth.saturating_sub(limits.depth_step),
                ..self
            },
            Input::DecreaseSkew => TreeState {
                skewness: self.skewness - SKEW_STEP,
                ..self
            },
            Input::IncreaseSkew => TreeState {
                skewness: self.skewness + SKEW_STEP,
                ..self
            },
            Input::ToggleSeason => TreeState {
                season: self.season.toggled(),
                ..self
            },
        };

        next.clamped(limits)
    }

    /// Brings depth back in `[1, max_depth(season)]` and skewness in
    /// `[-2^0.05, 2^0.05]`.
    pub fn clamped(self, limits: &Limits) -> TreeState {
        let mut depth = self.depth;
        if depth > limits.max_depth(self.season) {
            depth = limits.max_depth(self.season);
        }
        if depth < 1 {
            depth = 1;
        }

        let bound = skew_bound();
        let skewness = if self.skewness.abs() >= bound {
            self.skewness.signum() * bound
        } else {
            self.skewness
        };

        TreeState {
            depth,
            skewness,
            season: self.season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_INPUTS: [Input; 5] = [
        Input::IncreaseDepth,
        Input::DecreaseDepth,
        Input::DecreaseSkew,
        Input::IncreaseSkew,
        Input::ToggleSeason,
    ];

    fn assert_invariants(state: &TreeState, limits: &Limits) {
        assert!(state.depth >= 1, "depth {} below 1", state.depth);
        assert!(
            state.depth <= limits.max_depth(state.season),
            "depth {} above the {} maximum",
            state.depth,
            state.season
        );
        assert!(state.skewness.abs() <= skew_bound());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Some(Input::IncreaseDepth), Input::from_key_code(key::UP));
        assert_eq!(Some(Input::DecreaseDepth), Input::from_key_code(key::DOWN));
        assert_eq!(Some(Input::DecreaseSkew), Input::from_key_code(key::LEFT));
        assert_eq!(Some(Input::IncreaseSkew), Input::from_key_code(key::RIGHT));
        assert_eq!(Some(Input::ToggleSeason), Input::from_key_code(key::SPACE));
        assert_eq!(None, Input::from_key_code(key::ESCAPE));
        assert_eq!(None, Input::from_key_code(b'a' as u32));
    }

    #[test]
    fn test_depth_steps() {
        let limits = Limits::default();
        let state = TreeState::default().transition(Input::IncreaseDepth, &limits);
        assert_eq!(6, state.depth);
        let state = state
            .transition(Input::DecreaseDepth, &limits)
            .transition(Input::DecreaseDepth, &limits);
        assert_eq!(4, state.depth);

        let limits = Limits {
            depth_step: 2,
            ..Limits::default()
        };
        assert_eq!(7, TreeState::default().transition(Input::IncreaseDepth, &limits).depth);
    }

    #[test]
    fn test_depth_is_clamped() {
        let limits = Limits::default();
        let mut state = TreeState::default();
        for _ in 0..20 {
            state = state.transition(Input::IncreaseDepth, &limits);
        }
        assert_eq!(10, state.depth);
        for _ in 0..20 {
            state = state.transition(Input::DecreaseDepth, &limits);
        }
        assert_eq!(1, state.depth);
    }

    #[test]
    fn test_skewness_is_clamped() {
        let limits = Limits::default();
        let mut state = TreeState::default();
        for _ in 0..30 {
            state = state.transition(Input::IncreaseSkew, &limits);
        }
        assert_eq!(skew_bound(), state.skewness);
        for _ in 0..60 {
            state = state.transition(Input::DecreaseSkew, &limits);
        }
        assert_eq!(-skew_bound(), state.skewness);
    }

    #[test]
    fn test_max_depth_stays_in_range() {
        let limits = Limits {
            depth_step: 1,
            summer_max_depth: 0,
            winter_max_depth: 30,
        };
        assert_eq!(1, limits.max_depth(Season::Summer));
        assert_eq!(MAX_SUPPORTED_DEPTH, limits.max_depth(Season::Winter));

        let summer = TreeState::new(5, 0.0, Season::Summer, &limits);
        assert_eq!(1, summer.depth);
        let mut winter = summer.transition(Input::ToggleSeason, &limits);
        for _ in 0..40 {
            winter = winter.transition(Input::IncreaseDepth, &limits);
            assert_invariants(&winter, &limits);
        }
        assert_eq!(MAX_SUPPORTED_DEPTH, winter.depth);
    }

    #[test]
    fn test_new_clamps() {
        let limits = Limits::default();
        let state = TreeState::new(42, -7.0, Season::Winter, &limits);
        assert_eq!(10, state.depth);
        assert_eq!(-skew_bound(), state.skewness);
        assert_eq!(1, TreeState::new(-3, 0.0, Season::Summer, &limits).depth);
    }

    #[test]
    fn test_double_toggle() {
        let limits = Limits::default();
        let state = TreeState::new(7, 0.35, Season::Summer, &limits);
        let back = state
            .transition(Input::ToggleSeason, &limits)
            .transition(Input::ToggleSeason, &limits);
        assert_eq!(state, back);
    }

    #[test]
    fn test_toggle_reduction_persists() {
        let limits = Limits {
            depth_step: 1,
            summer_max_depth: 14,
            winter_max_depth: 10,
        };
        let state = TreeState::new(12, 0.1, Season::Summer, &limits);
        let winter = state.transition(Input::ToggleSeason, &limits);
        assert_eq!(Season::Winter, winter.season);
        assert_eq!(10, winter.depth);
        let summer = winter.transition(Input::ToggleSeason, &limits);
        assert_eq!(Season::Summer, summer.season);
        assert_eq!(10, summer.depth);
        assert_eq!(0.1, summer.skewness);
    }

    #[test]
    fn test_invariants_hold_on_every_path() {
        let limits = Limits {
            depth_step: 2,
            summer_max_depth: 12,
            winter_max_depth: 7,
        };
        // walk every input sequence of length 6 from the default state
        let mut frontier = vec![TreeState::default()];
        for _ in 0..6 {
            frontier = frontier
                .iter()
                .flat_map(|state| ALL_INPUTS.iter().map(move |input| state.transition(*input, &limits)))
                .collect();
            for state in &frontier {
                assert_invariants(state, &limits);
            }
        }
    }
}
