//! The simpler views: success card, gift picker, photo gallery, letter.

use crate::catalog::Catalog;
use crate::render::assets::render_picture;
use crate::render::{escape_html, hx_post, nav_button};
use crate::session::gifts::GiftId;
use crate::session::state::AppState;
use crate::session::view::ViewState;

const ALL_GIFTS_TEXT: &str = "Yayyyy!! You opened all the gifts! <br>LOVE YOU SO MUCH!❤️";

pub fn render_success(catalog: &Catalog) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="card success-card">"#);
    html.push_str(&format!(
        r#"<h1 class="yay">{}</h1><p class="subtitle small">{}</p>"#,
        escape_html(&catalog.content.success_message),
        escape_html(&catalog.content.success_subtitle)
    ));
    html.push_str(r#"<div class="image-card">"#);
    html.push_str(&render_picture(&catalog.media.love_you_bear_gif, "cute gif", ""));
    html.push_str("</div>");
    html.push_str(r#"<div class="love-text-container"><h2 class="love-text">I LOVE YOU❤️</h2></div>"#);
    html.push_str(&nav_button(
        "btn romantic-gift-btn",
        ViewState::Gifts,
        &catalog.navigation.back_to_gifts,
    ));
    html.push_str("</div>");
    html
}

/// Gift picker. Once every gift is opened the "back to love" button is
/// replaced by the celebration panel for good.
pub fn render_gifts(state: &AppState, catalog: &Catalog) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="card gifts-card">"#);
    html.push_str(&format!(
        r#"<h1 class="yay">{}</h1>"#,
        escape_html(&catalog.content.gifts_title)
    ));

    html.push_str(r#"<div class="gifts-container">"#);
    let art = [&catalog.gifts.gift1, &catalog.gifts.gift2, &catalog.gifts.gift3];
    for (n, (id, src)) in GiftId::ALL.into_iter().zip(art).enumerate() {
        let opened = if state.gifts.is_opened(id) { " opened" } else { "" };
        html.push_str(&format!(
            r#"<div class="gift-card{}" {}>"#,
            opened,
            hx_post("/api/gift", &[("id", id.as_str())])
        ));
        html.push_str(&format!(r#"<h3 class="gift-title">Gift {}</h3>"#, n + 1));
        html.push_str(r#"<div class="gift-image">"#);
        html.push_str(&render_picture(src, &format!("gift {}", n + 1), ""));
        html.push_str("</div></div>");
    }
    html.push_str("</div>");

    if state.gifts.all_opened() {
        html.push_str(r#"<div class="all-gifts-opened"><div class="love-you-bear-container">"#);
        html.push_str(&render_picture(&catalog.media.love_you_bear_gif, "love you bear", ""));
        html.push_str(&format!(
            r#"</div><p class="all-gifts-text">{}</p></div>"#,
            ALL_GIFTS_TEXT
        ));
    } else {
        html.push_str(&nav_button(
            "btn yes",
            ViewState::Success,
            &catalog.navigation.back_to_love,
        ));
    }

    html.push_str("</div>");
    html
}

pub fn render_photos(catalog: &Catalog) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="card photos-card">"#);
    html.push_str(&format!(
        r#"<h1 class="yay">{}</h1>"#,
        escape_html(&catalog.content.photos_title)
    ));
    html.push_str(r#"<div class="photos-grid">"#);
    for (i, photo) in catalog.couple_photos.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="photo-card"><div class="photo-frame vintage-{}">"#,
            i + 1
        ));
        html.push_str(&render_picture(&photo.image, &format!("Memory {}", i + 1), ""));
        html.push_str(&format!(
            r#"</div><p class="photo-caption">{}</p></div>"#,
            escape_html(&photo.caption)
        ));
    }
    html.push_str("</div>");
    html.push_str(&nav_button(
        "btn yes",
        ViewState::Gifts,
        &catalog.navigation.back_to_gifts,
    ));
    html.push_str("</div>");
    html
}

pub fn render_letter(state: &AppState, catalog: &Catalog) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div class="card letter-card">"#);
    html.push_str(&format!(
        r#"<h1 class="yay">{}</h1>"#,
        escape_html(&catalog.content.letter_title)
    ));
    html.push_str(r#"<div class="envelope-container">"#);
    html.push_str(&format!(
        r#"<div class="envelope{}" {}>"#,
        if state.envelope.open { " open" } else { "" },
        hx_post("/api/letter", &[("action", "toggle")])
    ));
    html.push_str(r#"<div class="envelope-flap"><div class="envelope-triangle"></div></div>"#);
    html.push_str(&format!(
        r#"<div class="envelope-body"><div class="envelope-seal"><span class="heart-symbol">{}</span></div></div>"#,
        escape_html(&catalog.media.envelope_seal)
    ));
    html.push_str("</div>");

    if state.envelope.open {
        let letter = &catalog.letter;
        html.push_str(r#"<div class="letter-paper"><div class="letter-content">"#);
        html.push_str(&format!(
            r#"<h2 class="letter-title">{}</h2>"#,
            escape_html(&letter.title)
        ));
        for paragraph in &letter.content {
            html.push_str(&format!(r#"<p class="letter-text">{}</p>"#, escape_html(paragraph)));
        }
        html.push_str(&format!(
            r#"<p class="letter-signature">{}</p>"#,
            escape_html(&letter.signature)
        ));
        html.push_str("</div></div>");
    }
    html.push_str("</div>");

    html.push_str(&nav_button(
        "btn yes",
        ViewState::Gifts,
        &catalog.navigation.back_to_gifts,
    ));
    html.push_str("</div>");
    html
}
