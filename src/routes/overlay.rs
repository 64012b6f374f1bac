//! `/api/hover` and `/api/pros-cons` — the home-page overlays.

use crate::routes::apply_and_render;
use crate::routes::util::{error_span, get_param, parse_form_body};
use crate::session::state::Event;

// ── POST /api/hover ────────────────────────────────────────────────

/// Handle POST /api/hover
/// Body params:
///   - action=enter → pointer entered the "No" button
///   - action=leave → pointer left it
///   - action=close → close the explanation popup
///   - action=okay  → hand off to the pros/cons popup
pub fn handle_hover_post(body: &str) -> String {
    let params = parse_form_body(body);
    let event = match get_param(&params, "action").unwrap_or("") {
        "enter" => Event::NoButtonEnter,
        "leave" => Event::NoButtonLeave,
        "close" => Event::CloseHoverPopup,
        "okay" => Event::OpenProsCons,
        other => return error_span(&format!("Unknown hover action: {}", other)),
    };
    apply_and_render(event)
}

// ── POST /api/pros-cons ────────────────────────────────────────────

/// Handle POST /api/pros-cons
/// Body: action={close|next|prev}
pub fn handle_pros_cons_post(body: &str) -> String {
    let params = parse_form_body(body);
    let event = match get_param(&params, "action").unwrap_or("") {
        "close" => Event::CloseProsCons,
        "next" => Event::NextSlide,
        "prev" => Event::PreviousSlide,
        other => return error_span(&format!("Unknown pros/cons action: {}", other)),
    };
    apply_and_render(event)
}
