//! `/api/view` and `/api/gift` — navigation between screens.

use crate::routes::util::{get_param, missing_param, parse_form_body, session_error};
use crate::routes::{apply_and_render, render_or_error};
use crate::session::gifts::GiftId;
use crate::session::state::Event;
use crate::session::view::ViewState;

// ── GET /api/view ──────────────────────────────────────────────────

/// Handle GET /api/view — the current screen (initial page load).
pub fn handle_view_get(_query: &str) -> String {
    render_or_error()
}

// ── POST /api/view ─────────────────────────────────────────────────

/// Handle POST /api/view
/// Body: target={home|success|gifts|songs|photos|letter}
pub fn handle_view_post(body: &str) -> String {
    let params = parse_form_body(body);
    let target = match get_param(&params, "target") {
        Some(t) if !t.is_empty() => t,
        _ => return missing_param("target"),
    };
    match target.parse::<ViewState>() {
        Ok(view) => apply_and_render(Event::Navigate(view)),
        Err(e) => session_error(&e),
    }
}

// ── POST /api/gift ─────────────────────────────────────────────────

/// Handle POST /api/gift
/// Body: id={songs|letter|photos}
/// Marks the gift opened, then shows the view it reveals.
pub fn handle_gift_post(body: &str) -> String {
    let params = parse_form_body(body);
    let id = match get_param(&params, "id") {
        Some(id) if !id.is_empty() => id,
        _ => return missing_param("id"),
    };
    match id.parse::<GiftId>() {
        Ok(gift) => apply_and_render(Event::OpenGift(gift)),
        Err(e) => session_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::state::{reset_session, with_session};

    #[test]
    fn get_renders_home_initially() {
        reset_session();
        let html = handle_view_get("");
        assert!(html.contains("valentine-root home"));
        reset_session();
    }

    #[test]
    fn post_navigates() {
        reset_session();
        let html = handle_view_post("target=success");
        assert!(html.contains("valentine-root success"));
        with_session(|s| assert_eq!(s.view, ViewState::Success));
        reset_session();
    }

    #[test]
    fn post_unknown_view() {
        reset_session();
        let html = handle_view_post("target=basement");
        assert!(html.contains("unknown view: basement"));
        with_session(|s| assert_eq!(s.view, ViewState::Home));
        reset_session();
    }

    #[test]
    fn post_missing_target() {
        let html = handle_view_post("");
        assert!(html.contains("Missing target parameter"));
    }

    #[test]
    fn gift_opens_and_navigates() {
        reset_session();
        let html = handle_gift_post("id=photos");
        assert!(html.contains("valentine-root photos"));
        with_session(|s| assert!(s.gifts.is_opened(GiftId::Photos)));
        reset_session();
    }

    #[test]
    fn all_gifts_flow_shows_celebration() {
        reset_session();
        for id in ["songs", "letter", "photos", "letter"] {
            handle_gift_post(&format!("id={}", id));
            handle_view_post("target=gifts");
        }
        let html = handle_view_get("");
        assert!(html.contains("all-gifts-opened"));
        reset_session();
    }

    #[test]
    fn gift_unknown_id() {
        reset_session();
        let html = handle_gift_post("id=pony");
        assert!(html.contains("unknown gift: pony"));
        reset_session();
    }
}
