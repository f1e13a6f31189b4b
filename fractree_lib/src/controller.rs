/*
 * Controller
 * Owns the tree state and turns key codes into state transitions. Every
 * recognized key requests a redraw; requests pile up in a single flag until the
 * next paint pass consumes them.
 */
use tracing::{debug, trace};

use crate::state::{Input, Limits, TreeState};

#[derive(Debug, Clone)]
pub struct Controller {
    state: TreeState,
    limits: Limits,
    redraw_requested: bool,
}

impl Controller {
    pub fn new(state: TreeState, limits: Limits) -> Controller {
        Controller {
            state: state.clamped(&limits),
            limits,
            redraw_requested: true,
        }
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn max_depth(&self) -> i32 {
        self.limits.max_depth(self.state.season)
    }

    /// Applies the input bound to `code`. Returns `false` when the key is not
    /// one the tree reacts to, in which case nothing changes.
    pub fn handle_input(&mut self, code: u32) -> bool {
        let input = match Input::from_key_code(code) {
            Some(input) => input,
            None => {
                trace!(code, "ignoring key");
                return false;
            }
        };

        self.apply(input);
        true
    }

    pub fn apply(&mut self, input: Input) {
        let previous = self.state;
        self.state = previous.transition(input, &self.limits);
        debug!(
            ?input,
            depth = self.state.depth,
            skewness = self.state.skewness,
            season = %self.state.season,
            "tree state changed"
        );
        self.request_redraw();
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Consumes the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw_requested, false)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new(TreeState::default(), Limits::default())
    }
}
