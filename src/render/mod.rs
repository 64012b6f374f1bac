//! HTML fragment rendering — a pure function of session state + catalog.
//!
//! Every fragment is rooted at `#valentine-root`; every control posts back
//! with HTMX and swaps that root (`outerHTML`). Class names are kept from
//! the original page so its stylesheet applies unchanged; styling and
//! animation themselves live outside the crate.

pub mod assets;
pub mod home;
pub mod pages;
pub mod songs;

use crate::catalog::{self, Catalog};
use crate::session::SessionError;
use crate::session::state::{self, AppState};
use crate::session::view::ViewState;

/// CSS selector every control targets.
pub const ROOT_TARGET: &str = "#valentine-root";

/// Render the fragment for whichever view is current.
pub fn render_view(state: &AppState, catalog: &Catalog) -> String {
    let body = match state.view {
        ViewState::Home => home::render_home(state, catalog),
        ViewState::Success => pages::render_success(catalog),
        ViewState::Gifts => pages::render_gifts(state, catalog),
        ViewState::Songs => songs::render_songs(state, catalog),
        ViewState::Photos => pages::render_photos(catalog),
        ViewState::Letter => pages::render_letter(state, catalog),
    };
    wrap_root(state.view, &body)
}

/// Render the live session's current view, appending any queued engine
/// commands so they run once the fragment is swapped in.
pub fn render_current() -> Result<String, SessionError> {
    let mut html = catalog::with_catalog(|catalog| {
        state::with_session(|session| render_view(session, catalog))
    })?;
    html.push_str(&state::take_engine_script());
    Ok(html)
}

fn wrap_root(view: ViewState, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 96);
    html.push_str(&format!(
        r#"<div id="valentine-root" class="valentine-root {}">"#,
        view
    ));
    html.push_str(body);
    html.push_str("</div>");
    html
}

/// HTMX attributes for a control that posts `vals` to `path` and swaps the root.
pub(crate) fn hx_post(path: &str, vals: &[(&str, &str)]) -> String {
    format!(
        r#"hx-post="{}" hx-vals='{}' hx-target="{}" hx-swap="outerHTML""#,
        path,
        hx_vals(vals),
        ROOT_TARGET
    )
}

/// JSON object for `hx-vals`, safe inside a single-quoted attribute.
pub(crate) fn hx_vals(vals: &[(&str, &str)]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = vals
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
        .collect();
    serde_json::Value::Object(map)
        .to_string()
        .replace('&', "&amp;")
        .replace('\'', "&#39;")
}

/// A "back" style button: posts a navigation to `target`.
pub(crate) fn nav_button(class: &str, target: ViewState, label: &str) -> String {
    format!(
        r#"<button class="{}" {}>{}</button>"#,
        class,
        hx_post("/api/view", &[("target", target.as_str())]),
        escape_html(label)
    )
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
