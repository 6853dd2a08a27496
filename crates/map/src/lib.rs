pub mod config;
pub mod dispatcher;
pub mod logging;
pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod surface;
pub mod tools;
pub mod undo;
pub mod view;
pub mod worker;

use serde::{Deserialize, Serialize};

/// Whether an input handler used an event, unhandled events keep propagating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum InputResult {
    Handled,
    Unhandled,
}

impl InputResult {
    pub const fn is_handled(self) -> bool {
        matches!(self, InputResult::Handled)
    }
}
