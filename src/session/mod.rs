//! Session state — everything the page remembers while the worker is alive.
//!
//! Each sub-state lives in its own module and exposes plain `&mut self`
//! transitions. `state` aggregates them into `AppState`, defines the `Event`
//! enum and the pure `reduce` function, and owns the `thread_local!` that
//! route handlers dispatch into. Nothing here touches HTML.

pub mod engine;
pub mod gifts;
pub mod letter;
pub mod overlay;
pub mod player;
pub mod state;
pub mod view;

use crate::catalog::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("unknown gift: {0}")]
    UnknownGift(String),

    #[error("track {index} out of range (playlist has {count} songs)")]
    TrackOutOfRange { index: usize, count: usize },

    #[error("cannot seek: progress bar width must be positive, got {0}")]
    InvalidSeek(f64),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Advance `index` by one over a ring of `count` entries.
/// `count` must be non-zero; the catalog guarantees this for songs and slides.
pub(crate) fn step_forward(index: usize, count: usize) -> usize {
    (index + 1) % count
}

/// Retreat `index` by one over a ring of `count` entries.
pub(crate) fn step_back(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}
