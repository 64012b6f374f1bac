//! `/api/letter` — envelope toggle on the letter view.

use crate::routes::apply_and_render;
use crate::routes::util::{error_span, get_param, parse_form_body};
use crate::session::state::Event;

/// Handle POST /api/letter
/// Body: action=toggle
pub fn handle_letter_post(body: &str) -> String {
    let params = parse_form_body(body);
    match get_param(&params, "action").unwrap_or("") {
        "toggle" => apply_and_render(Event::ToggleEnvelope),
        other => error_span(&format!("Unknown letter action: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::view::handle_view_post;
    use crate::session::state::reset_session;

    #[test]
    fn toggle_reveals_letter() {
        reset_session();
        handle_view_post("target=letter");
        let html = handle_letter_post("action=toggle");
        assert!(html.contains("letter-paper"));
        let html = handle_letter_post("action=toggle");
        assert!(!html.contains("letter-paper"));
        reset_session();
    }

    #[test]
    fn envelope_stays_open_across_navigation() {
        reset_session();
        handle_view_post("target=letter");
        handle_letter_post("action=toggle");
        handle_view_post("target=gifts");
        let html = handle_view_post("target=letter");
        assert!(html.contains("letter-paper"));
        reset_session();
    }

    #[test]
    fn unknown_action() {
        assert!(handle_letter_post("action=burn").contains("Unknown letter action"));
    }
}
