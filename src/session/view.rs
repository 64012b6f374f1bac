//! View controller — which top-level screen is showing.
//!
//! Fully connected: any view may follow any other. Navigation only swaps
//! the current view; it never resets gifts, playback, popups or the
//! envelope.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::session::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Home,
    Success,
    Gifts,
    Songs,
    Photos,
    Letter,
}

impl ViewState {
    pub const ALL: [ViewState; 6] = [
        ViewState::Home,
        ViewState::Success,
        ViewState::Gifts,
        ViewState::Songs,
        ViewState::Photos,
        ViewState::Letter,
    ];

    /// Wire name used in form bodies and CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Success => "success",
            ViewState::Gifts => "gifts",
            ViewState::Songs => "songs",
            ViewState::Photos => "photos",
            ViewState::Letter => "letter",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewState {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewState::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| SessionError::UnknownView(s.to_string()))
    }
}

/// Idempotent setter; every target is legal from every view.
pub fn navigate(current: &mut ViewState, target: ViewState) {
    *current = target;
}
