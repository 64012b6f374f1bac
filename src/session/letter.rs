//! Letter envelope — open/closed. Lives in `AppState`, so it survives
//! leaving and re-entering the letter view.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnvelopeState {
    pub open: bool,
}

impl EnvelopeState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
