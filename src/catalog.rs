//! Content catalog — names, copy text, songs, photos, slides and media paths.
//!
//! The default catalog is compiled in from `catalog.json` at the crate root.
//! The host page may replace it once at startup via `load_catalog()`; after
//! that it is read-only for the rest of the session.
//!
//! Keys are camelCase so the same JSON object the page would otherwise
//! hand to its front-end config works unchanged.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

const EMBEDDED_CATALOG: &str = include_str!("../catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no songs")]
    NoSongs,

    #[error("catalog has no pros/cons slides")]
    NoSlides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Names {
    pub sender: String,
    pub receiver: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub title: String,
    pub yes_button_text: String,
    pub success_message: String,
    pub success_subtitle: String,
    pub gifts_title: String,
    pub songs_title: String,
    pub photos_title: String,
    pub letter_title: String,
    pub pros_cons_title: String,
    pub pros_cons_subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub back_to_gifts: String,
    pub back_to_love: String,
}

/// One playlist entry. `duration` is display text only ("3:41"); the real
/// duration comes from the playback engine's metadata callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    pub audio: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub image: String,
    pub caption: String,
}

/// A pros/cons carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub gif: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub main_bear_gif: String,
    pub love_you_bear_gif: String,
    pub child_gif: String,
    pub left_button: String,
    pub right_button: String,
    /// Rendered as text inside the envelope seal (usually an emoji).
    pub envelope_seal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftArt {
    pub gift1: String,
    pub gift2: String,
    pub gift3: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letter {
    pub title: String,
    pub content: Vec<String>,
    pub signature: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tooltips {
    pub play: String,
    pub pause: String,
    pub next: String,
    pub previous: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub names: Names,
    pub content: Content,
    pub navigation: Navigation,
    pub songs: Vec<Song>,
    pub couple_photos: Vec<Photo>,
    pub pros_cons: Vec<Slide>,
    pub media: Media,
    pub gifts: GiftArt,
    pub letter: Letter,
    pub tooltips: Tooltips,
}

impl Catalog {
    /// Parse a catalog from JSON.
    ///
    /// Only the song list and slide list are checked: both drive modulo
    /// arithmetic, so an empty list would make every wraparound undefined.
    /// Anything else missing is a serde error; nothing is validated beyond that.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.songs.is_empty() {
            return Err(CatalogError::NoSongs);
        }
        if catalog.pros_cons.is_empty() {
            return Err(CatalogError::NoSlides);
        }
        Ok(catalog)
    }

    /// The catalog compiled into the WASM binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }
}

thread_local! {
    static CATALOG: RefCell<Option<Catalog>> = const { RefCell::new(None) };
}

/// Execute a closure with read access to the active catalog.
/// The embedded catalog is parsed on first use if none was loaded.
pub fn with_catalog<F, R>(f: F) -> Result<R, CatalogError>
where
    F: FnOnce(&Catalog) -> R,
{
    CATALOG.with(|c| {
        {
            let mut slot = c.borrow_mut();
            if slot.is_none() {
                let embedded = Catalog::embedded()?;
                tracing::debug!(songs = embedded.songs.len(), "loaded embedded catalog");
                *slot = Some(embedded);
            }
        }
        // Shared borrow only, so `f` may itself read the catalog.
        let guard = c.borrow();
        match guard.as_ref() {
            Some(catalog) => Ok(f(catalog)),
            None => Catalog::embedded().map(|catalog| f(&catalog)),
        }
    })
}

/// Replace the active catalog with one parsed from `json`.
/// On error the previous catalog stays active.
pub fn load_catalog_json(json: &str) -> Result<(), CatalogError> {
    let catalog = Catalog::from_json(json)?;
    tracing::info!(
        songs = catalog.songs.len(),
        photos = catalog.couple_photos.len(),
        slides = catalog.pros_cons.len(),
        "catalog replaced"
    );
    CATALOG.with(|c| {
        *c.borrow_mut() = Some(catalog);
    });
    Ok(())
}

/// Drop any loaded catalog so the next access re-parses the embedded one.
pub fn reset_catalog() {
    CATALOG.with(|c| {
        *c.borrow_mut() = None;
    });
}

/// Short summary of the active catalog as JSON — the same fields the old
/// config smoke test printed.
pub fn summary_json() -> Result<String, CatalogError> {
    with_catalog(|catalog| {
        serde_json::json!({
            "sender": catalog.names.sender,
            "receiver": catalog.names.receiver,
            "title": catalog.content.title,
            "songs": catalog.songs.len(),
            "photos": catalog.couple_photos.len(),
        })
        .to_string()
    })
}
