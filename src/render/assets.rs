//! Image asset resolution.
//!
//! The build-time optimizer writes `.avif` and `.webp` siblings next to
//! every `.jpg`/`.jpeg`/`.png`. Pictures prefer avif, then webp, then the
//! original. This is a naming convention only; nothing is probed at
//! runtime. GIFs and anything else get the original alone.

use crate::render::escape_html;

const RASTER_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub const IMAGE_FALLBACK_TEXT: &str = "Image not available";

/// Modern-format siblings of `src`, if it is a convertible raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModernSources {
    pub avif: String,
    pub webp: String,
}

pub fn modern_sources(src: &str) -> Option<ModernSources> {
    let (base, ext) = src.rsplit_once('.')?;
    // a dot in a directory name is not an extension
    if ext.contains('/') {
        return None;
    }
    let ext = ext.to_ascii_lowercase();
    if !RASTER_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    Some(ModernSources {
        avif: format!("{}.avif", base),
        webp: format!("{}.webp", base),
    })
}

/// `<picture>` with avif/webp sources and a lazy `<img>` fallback.
/// A failed load hides the picture and reveals the text fallback.
pub fn render_picture(src: &str, alt: &str, img_class: &str) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(r#"<div class="optimized-image-container">"#);
    html.push_str("<picture>");
    if let Some(sources) = modern_sources(src) {
        html.push_str(&format!(
            r#"<source srcset="{}" type="image/avif">"#,
            escape_html(&sources.avif)
        ));
        html.push_str(&format!(
            r#"<source srcset="{}" type="image/webp">"#,
            escape_html(&sources.webp)
        ));
    }
    html.push_str(&format!(
        r#"<img src="{}" alt="{}" class="{}" loading="lazy" decoding="async" onerror="this.parentElement.hidden=true;this.parentElement.nextElementSibling.hidden=false">"#,
        escape_html(src),
        escape_html(alt),
        img_class
    ));
    html.push_str("</picture>");
    html.push_str(&format!(
        r#"<div class="image-error" hidden>{}</div>"#,
        IMAGE_FALLBACK_TEXT
    ));
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_png_get_siblings() {
        let s = modern_sources("/assets/photos/beach.jpg").unwrap();
        assert_eq!(s.avif, "/assets/photos/beach.avif");
        assert_eq!(s.webp, "/assets/photos/beach.webp");
        assert!(modern_sources("/a/b.jpeg").is_some());
        assert!(modern_sources("/a/b.png").is_some());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let s = modern_sources("IMG_001.JPG").unwrap();
        assert_eq!(s.avif, "IMG_001.avif");
    }

    #[test]
    fn gif_mp3_and_bare_names_are_left_alone() {
        assert_eq!(modern_sources("/assets/gifs/hug.gif"), None);
        assert_eq!(modern_sources("/assets/audio/song.mp3"), None);
        assert_eq!(modern_sources("/assets.v2/photo"), None);
        assert_eq!(modern_sources("noext"), None);
    }

    #[test]
    fn picture_orders_avif_before_webp() {
        let html = render_picture("/p/one.png", "Memory 1", "photo");
        let avif = html.find("image/avif").unwrap();
        let webp = html.find("image/webp").unwrap();
        let img = html.find("<img").unwrap();
        assert!(avif < webp && webp < img);
        assert!(html.contains(r#"src="/p/one.png""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn gif_picture_has_only_the_original() {
        let html = render_picture("/g/bear.gif", "bear", "card-image");
        assert!(!html.contains("<source"));
        assert!(html.contains(r#"src="/g/bear.gif""#));
    }

    #[test]
    fn picture_carries_text_fallback() {
        let html = render_picture("/p/x.jpg", "x", "");
        assert!(html.contains("onerror="));
        assert!(html.contains(r#"<div class="image-error" hidden>Image not available</div>"#));
    }

    #[test]
    fn alt_text_is_escaped() {
        let html = render_picture("/p/x.jpg", r#"a "quoted" <alt>"#, "");
        assert!(html.contains("alt=\"a &quot;quoted&quot; &lt;alt&gt;\""));
    }
}
