//! Home view — the proposal card plus its two overlays.

use crate::catalog::Catalog;
use crate::render::assets::render_picture;
use crate::render::{escape_html, hx_post, hx_vals};
use crate::session::state::AppState;
use crate::session::view::ViewState;

const HOVER_POPUP_TEXT: &str =
    "Maybe I should explain the perks of being my Valentine… let me tell you 😉";

pub fn render_home(state: &AppState, catalog: &Catalog) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="card">"#);
    html.push_str(&render_picture(&catalog.media.main_bear_gif, "cute bear", "card-image"));

    html.push_str(r#"<h1 class="title">"#);
    html.push_str(&format!(
        r#"<span class="name">{},</span><span class="ask"> {}</span><span class="hearts"> </span>"#,
        escape_html(&catalog.names.receiver.to_uppercase()),
        escape_html(&catalog.content.title)
    ));
    html.push_str("</h1>");

    html.push_str(r#"<div class="choices">"#);
    html.push_str(&format!(
        r#"<button class="btn yes" {}>{}</button>"#,
        hx_post("/api/view", &[("target", ViewState::Success.as_str())]),
        escape_html(&catalog.content.yes_button_text)
    ));
    // enter/leave post separately; both re-render the home card
    html.push_str(&format!(
        r##"<button class="btn no" aria-label="No button" hx-post="/api/hover" hx-trigger="mouseenter" hx-vals='{}' hx-target="#valentine-root" hx-swap="outerHTML" onmouseleave="htmx.ajax('POST', '/api/hover', {{values: {{action: 'leave'}}, target: '#valentine-root', swap: 'outerHTML'}})">{}</button>"##,
        hx_vals(&[("action", "enter")]),
        escape_html(&state.overlay.hover.no_button_label)
    ));
    html.push_str("</div>");
    html.push_str("</div>");

    if state.overlay.popups.hover_popup_visible {
        html.push_str(&render_hover_popup());
    }
    if state.overlay.popups.pros_cons_popup_visible {
        html.push_str(&render_pros_cons_popup(state, catalog));
    }

    html
}

fn render_hover_popup() -> String {
    let close = hx_post("/api/hover", &[("action", "close")]);
    let mut html = String::with_capacity(1024);
    html.push_str(&format!(r#"<div class="overlay" {}>"#, close));
    html.push_str(r#"<div class="popup" onclick="event.stopPropagation()">"#);
    html.push_str(&format!(
        r#"<button class="close-btn" aria-label="Close" {}>✕</button>"#,
        close
    ));
    html.push_str(&format!(r#"<p class="popup-text">{}</p>"#, HOVER_POPUP_TEXT));
    html.push_str(&format!(
        r#"<button class="btn okay-btn" {}>Okay</button>"#,
        hx_post("/api/hover", &[("action", "okay")])
    ));
    html.push_str("</div></div>");
    html
}

fn render_pros_cons_popup(state: &AppState, catalog: &Catalog) -> String {
    let close = hx_post("/api/pros-cons", &[("action", "close")]);
    let slides = &catalog.pros_cons;
    let carousel = state.overlay.carousel;
    let mut html = String::with_capacity(2048);

    html.push_str(&format!(r#"<div class="overlay" {}>"#, close));
    html.push_str(r#"<div class="pros-cons-popup" onclick="event.stopPropagation()">"#);
    html.push_str(&format!(
        r#"<button class="close-btn" aria-label="Close" {}>✕</button>"#,
        close
    ));
    html.push_str(&format!(
        r#"<h2 class="pros-cons-title">{}</h2>"#,
        escape_html(&catalog.content.pros_cons_title)
    ));
    html.push_str(r#"<div class="cards-container">"#);

    // Pros: one slide at a time
    html.push_str(r#"<div class="card pros-card"><h3 class="card-title">💖 Pros</h3>"#);
    if let Some(slide) = slides.get(carousel.current_slide) {
        html.push_str(r#"<div class="pros-list"><div class="pro-item">"#);
        html.push_str(&render_picture(&slide.gif, "pro", "pro-gif"));
        html.push_str(&format!(r#"<p class="pro-text">{}</p>"#, escape_html(&slide.text)));
        html.push_str("</div></div>");
    }
    html.push_str(r#"<div class="pros-nav">"#);
    html.push_str(&format!(
        r#"<button class="nav-btn" {}><img src="{}" alt="previous" class="nav-btn-img"></button>"#,
        hx_post("/api/pros-cons", &[("action", "prev")]),
        escape_html(&catalog.media.left_button)
    ));
    html.push_str(&format!(
        r#"<span class="slide-indicator">{}</span>"#,
        carousel.indicator(slides.len())
    ));
    html.push_str(&format!(
        r#"<button class="nav-btn" {}><img src="{}" alt="next" class="nav-btn-img"></button>"#,
        hx_post("/api/pros-cons", &[("action", "next")]),
        escape_html(&catalog.media.right_button)
    ));
    html.push_str("</div></div>");

    // Cons: fixed
    html.push_str(r#"<div class="card cons-card"><h3 class="card-title">❌ Cons</h3>"#);
    html.push_str(r#"<div class="cons-content">"#);
    html.push_str(&render_picture(&catalog.media.child_gif, "child", "cons-gif"));
    html.push_str(&format!(
        r#"<p class="cons-text">{}</p>"#,
        escape_html(&catalog.content.pros_cons_subtitle)
    ));
    html.push_str("</div></div>");

    html.push_str("</div></div></div>");
    html
}
