//! Route handlers. Each turns request params into a session `Event`,
//! dispatches it, and returns the fragment HTMX should swap in.

pub mod letter;
pub mod overlay;
pub mod player;
pub mod state;
pub mod util;
pub mod view;

use crate::render;
use crate::session::state::{Event, dispatch};

/// Dispatch `event` and re-render the current view, or return an error span.
pub(crate) fn apply_and_render(event: Event) -> String {
    if let Err(e) = dispatch(event) {
        return util::session_error(&e);
    }
    render_or_error()
}

pub(crate) fn render_or_error() -> String {
    render::render_current().unwrap_or_else(|e| util::session_error(&e))
}
