//! Global session container and the transition function.
//!
//! `reduce` is pure apart from the commands it sends to the injected
//! engine: it takes the current `AppState` and one `Event` and returns
//! the next state. Route handlers go through `dispatch`, which runs
//! `reduce` against the `thread_local!` session, the active catalog and
//! the page's `ScriptEngine`.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in
//! single-threaded WASM. The Web Worker keeps the module alive, so the
//! session lasts as long as the page does.

use serde::Serialize;
use std::cell::RefCell;

use crate::catalog::{self, Catalog};
use crate::session::SessionError;
use crate::session::engine::{PlaybackEngine, ScriptEngine};
use crate::session::gifts::{GiftId, GiftSet};
use crate::session::letter::EnvelopeState;
use crate::session::overlay::OverlayState;
use crate::session::player::PlaybackState;
use crate::session::view::{self, ViewState};

/// Everything the page remembers, owned in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub view: ViewState,
    pub gifts: GiftSet,
    pub player: PlaybackState,
    pub overlay: OverlayState,
    pub envelope: EnvelopeState,
}

/// One user action or engine notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(ViewState),
    /// Mark the gift opened, then show its view.
    OpenGift(GiftId),

    TogglePlay,
    NextTrack,
    PreviousTrack,
    SelectTrack(usize),
    /// Fraction of the track, from a progress-bar click.
    Seek(f64),
    SetVolume(f64),
    TimeUpdate(f64),
    MetadataLoaded(f64),
    TrackEnded,
    PlayRejected(String),

    NoButtonEnter,
    NoButtonLeave,
    CloseHoverPopup,
    OpenProsCons,
    CloseProsCons,
    NextSlide,
    PreviousSlide,

    ToggleEnvelope,
}

pub fn reduce(
    mut state: AppState,
    event: Event,
    catalog: &Catalog,
    engine: &mut dyn PlaybackEngine,
) -> Result<AppState, SessionError> {
    let songs = catalog.songs.as_slice();
    let slides = catalog.pros_cons.len();

    match event {
        Event::Navigate(target) => view::navigate(&mut state.view, target),
        Event::OpenGift(id) => {
            state.gifts.open(id);
            view::navigate(&mut state.view, id.view());
        }

        Event::TogglePlay => state.player.toggle_play(engine),
        Event::NextTrack => state.player.next(songs, engine),
        Event::PreviousTrack => state.player.previous(songs, engine),
        Event::SelectTrack(index) => state.player.select_track(index, songs, engine)?,
        Event::Seek(fraction) => state.player.seek(fraction, engine),
        Event::SetVolume(volume) => state.player.set_volume(volume, engine),
        Event::TimeUpdate(elapsed) => state.player.on_time_update(elapsed),
        Event::MetadataLoaded(duration) => state.player.on_metadata_loaded(duration),
        Event::TrackEnded => state.player.on_track_ended(songs, engine),
        Event::PlayRejected(reason) => state.player.on_play_rejected(&reason),

        Event::NoButtonEnter => state.overlay.on_no_button_enter(),
        Event::NoButtonLeave => state.overlay.on_no_button_leave(),
        Event::CloseHoverPopup => state.overlay.close_hover_popup(),
        Event::OpenProsCons => state.overlay.open_pros_cons_from_hover(),
        Event::CloseProsCons => state.overlay.close_pros_cons_popup(),
        Event::NextSlide => state.overlay.carousel.next(slides),
        Event::PreviousSlide => state.overlay.carousel.previous(slides),

        Event::ToggleEnvelope => state.envelope.toggle(),
    }

    Ok(state)
}

thread_local! {
    static SESSION: RefCell<AppState> = RefCell::new(AppState::default());
    static ENGINE: RefCell<ScriptEngine> = RefCell::new(ScriptEngine::default());
}

/// Execute a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Replace the entire session.
pub fn replace_session(new_state: AppState) {
    SESSION.with(|s| {
        *s.borrow_mut() = new_state;
    });
}

/// Back to a fresh page: default state, no queued engine commands.
pub fn reset_session() {
    replace_session(AppState::default());
    ENGINE.with(|e| e.borrow_mut().clear());
}

/// Apply one event to the live session.
/// On error the session is left exactly as it was.
pub fn dispatch(event: Event) -> Result<(), SessionError> {
    tracing::debug!(?event, "session event");
    catalog::with_catalog(|catalog| {
        ENGINE.with(|engine| {
            SESSION.with(|session| -> Result<(), SessionError> {
                let current = session.borrow().clone();
                let next = reduce(current, event, catalog, &mut *engine.borrow_mut())?;
                *session.borrow_mut() = next;
                Ok(())
            })
        })
    })?
}

/// Drain queued engine commands as an inline `<script>` (empty if none).
pub fn take_engine_script() -> String {
    ENGINE.with(|e| e.borrow_mut().take_script())
}

/// Export the session as JSON (debug snapshot; never re-imported).
pub fn export_session_json() -> String {
    with_session(|state| serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string()))
}
