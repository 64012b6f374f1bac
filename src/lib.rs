//! Valentine in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Web Worker
//! bridge to call, plus `load_catalog(json)` for the host page to swap in
//! its own content before the first render. Uses `matchit` for URL routing.
//!
//! Every interaction (button click, hover, audio element callback) is an
//! HTMX request routed to a session transition; the response is the HTML
//! fragment to swap in. Session state lives in WASM memory for as long as
//! the worker does and is never persisted.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod render;
pub mod routes;
pub mod session;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method ("GET" or "POST")
/// * `path`   — URL path (e.g., "/api/view")
/// * `query`  — Query string, with or without the leading `?`
/// * `body`   — URL-encoded form body. Empty string for GET requests.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/view", "view").ok();
    router.insert("/api/gift", "gift").ok();
    router.insert("/api/hover", "hover").ok();
    router.insert("/api/pros-cons", "pros_cons").ok();
    router.insert("/api/player", "player").ok();
    router.insert("/api/player/event", "player_event").ok();
    router.insert("/api/letter", "letter").ok();
    router.insert("/api/state", "state").ok();
    router.insert("/api/catalog/summary", "catalog_summary").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("view", "GET") => routes::view::handle_view_get(query),
            ("state", "GET") => routes::state::handle_state_get(query),
            ("catalog_summary", "GET") => routes::state::handle_catalog_summary_get(query),

            ("view", "POST") => routes::view::handle_view_post(body),
            ("gift", "POST") => routes::view::handle_gift_post(body),
            ("hover", "POST") => routes::overlay::handle_hover_post(body),
            ("pros_cons", "POST") => routes::overlay::handle_pros_cons_post(body),
            ("player", "POST") => routes::player::handle_player_post(body),
            ("player_event", "POST") => routes::player::handle_player_event_post(body),
            ("letter", "POST") => routes::letter::handle_letter_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

/// Replace the compiled-in content catalog and start a fresh session.
///
/// Returns `"ok"` or `"error: {reason}"`. On error the previous catalog
/// and session are kept.
#[wasm_bindgen]
pub fn load_catalog(json: &str) -> String {
    match catalog::load_catalog_json(json) {
        Ok(()) => {
            // indices into the old song/slide lists may be out of range now
            session::state::reset_session();
            "ok".to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog rejected");
            format!("error: {}", e)
        }
    }
}

fn not_found() -> String {
    r#"<span class="text-red">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red">405 — method not allowed</span>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::state::reset_session;

    fn reset() {
        reset_session();
        catalog::reset_catalog();
    }

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/api/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        assert!(handle_request("POST", "/api/state", "", "").contains("405"));
        assert!(handle_request("GET", "/api/gift", "", "").contains("405"));
        assert!(handle_request("DELETE", "/api/view", "", "").contains("405"));
    }

    #[test]
    fn routes_view_get() {
        reset();
        let html = handle_request("GET", "/api/view", "", "");
        assert!(html.contains("valentine-root home"));
        reset();
    }

    #[test]
    fn full_walkthrough() {
        reset();
        // Proposal: hover "No", read the pros, close, then say yes.
        handle_request("POST", "/api/hover", "", "action=enter");
        handle_request("POST", "/api/hover", "", "action=okay");
        handle_request("POST", "/api/pros-cons", "", "action=next");
        handle_request("POST", "/api/pros-cons", "", "action=close");
        let html = handle_request("POST", "/api/view", "", "target=success");
        assert!(html.contains("I LOVE YOU"));

        // Gifts, one by one.
        handle_request("POST", "/api/view", "", "target=gifts");
        let html = handle_request("POST", "/api/gift", "", "id=songs");
        assert!(html.contains("media-player"));
        handle_request("POST", "/api/player", "", "action=select&index=1");
        handle_request("POST", "/api/view", "", "target=gifts");
        let html = handle_request("POST", "/api/gift", "", "id=letter");
        assert!(html.contains("envelope"));
        handle_request("POST", "/api/letter", "", "action=toggle");
        handle_request("POST", "/api/view", "", "target=gifts");
        handle_request("POST", "/api/gift", "", "id=photos");
        let html = handle_request("POST", "/api/view", "", "target=gifts");
        assert!(html.contains("all-gifts-opened"));

        let json = handle_request("GET", "/api/state", "", "");
        assert!(json.contains(r#""track_index":1"#));
        assert!(json.contains(r#""is_playing":true"#));
        assert!(json.contains(r#""open":true"#));
        reset();
    }

    #[test]
    fn load_catalog_resets_session() {
        reset();
        handle_request("POST", "/api/player", "", "action=select&index=2");
        let mut value: serde_json::Value =
            serde_json::from_str(include_str!("../catalog.json")).unwrap();
        value["names"]["receiver"] = serde_json::json!("Robin");
        value["songs"] = serde_json::json!([value["songs"][0].clone()]);
        assert_eq!(load_catalog(&value.to_string()), "ok");

        session::state::with_session(|s| assert_eq!(s.player.track_index, 0));
        let html = handle_request("GET", "/api/view", "", "");
        assert!(html.contains("ROBIN,"));
        let summary = handle_request("GET", "/api/catalog/summary", "", "");
        assert!(summary.contains(r#""songs":1"#));
        reset();
    }

    #[test]
    fn load_catalog_rejects_bad_json() {
        reset();
        handle_request("POST", "/api/view", "", "target=photos");
        let status = load_catalog("{\"names\": 1}");
        assert!(status.starts_with("error: invalid catalog JSON"));
        session::state::with_session(|s| {
            assert_eq!(s.view, session::view::ViewState::Photos)
        });
        reset();
    }
}
