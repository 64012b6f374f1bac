//! `/api/player` and `/api/player/event` — song player transport and the
//! audio element's progress notifications.

use crate::render::songs::render_progress;
use crate::routes::util::{error_span, get_param, parse_form_body, parse_param, session_error};
use crate::routes::apply_and_render;
use crate::session::player::seek_fraction;
use crate::session::state::{self, Event};

// ── POST /api/player ───────────────────────────────────────────────

/// Handle POST /api/player
/// Body params:
///   - action=toggle                      → play/pause
///   - action=next | action=prev          → step through the playlist (paused)
///   - action=select&index={n}            → jump to a track and play it
///   - action=seek&offset={px}&width={px} → click on the progress bar
///   - action=volume&value={0..1}         → volume slider change
///
/// Returns the re-rendered songs view with any engine commands appended.
pub fn handle_player_post(body: &str) -> String {
    let params = parse_form_body(body);
    let event = match get_param(&params, "action").unwrap_or("") {
        "toggle" => Event::TogglePlay,
        "next" => Event::NextTrack,
        "prev" => Event::PreviousTrack,
        "select" => match parse_param::<usize>(&params, "index") {
            Ok(index) => Event::SelectTrack(index),
            Err(html) => return html,
        },
        "seek" => {
            let offset = match parse_param::<f64>(&params, "offset") {
                Ok(v) => v,
                Err(html) => return html,
            };
            let width = match parse_param::<f64>(&params, "width") {
                Ok(v) => v,
                Err(html) => return html,
            };
            match seek_fraction(offset, width) {
                Ok(fraction) => Event::Seek(fraction),
                Err(e) => return session_error(&e),
            }
        }
        "volume" => match parse_param::<f64>(&params, "value") {
            Ok(v) => Event::SetVolume(v),
            Err(html) => return html,
        },
        other => return error_span(&format!("Unknown player action: {}", other)),
    };
    apply_and_render(event)
}

// ── POST /api/player/event ─────────────────────────────────────────

/// Handle POST /api/player/event — notifications from `#valentine-audio`.
/// Body params:
///   - event=timeupdate&elapsed={s} → returns the progress fragment
///   - event=metadata&duration={s}  → returns the progress fragment
///   - event=ended                  → auto-advance; returns the songs view
///   - event=rejected&reason={name} → play() promise rejected; returns the view
///
/// Engines report `NaN` duration before metadata; `f64::from_str` accepts
/// it and the player state treats it as zero.
pub fn handle_player_event_post(body: &str) -> String {
    let params = parse_form_body(body);
    match get_param(&params, "event").unwrap_or("") {
        "timeupdate" => match parse_param::<f64>(&params, "elapsed") {
            Ok(elapsed) => progress_after(Event::TimeUpdate(elapsed)),
            Err(html) => html,
        },
        "metadata" => match parse_param::<f64>(&params, "duration") {
            Ok(duration) => progress_after(Event::MetadataLoaded(duration)),
            Err(html) => html,
        },
        "ended" => apply_and_render(Event::TrackEnded),
        "rejected" => {
            let reason = get_param(&params, "reason").unwrap_or("").to_string();
            apply_and_render(Event::PlayRejected(reason))
        }
        other => error_span(&format!("Unknown player event: {}", other)),
    }
}

fn progress_after(event: Event) -> String {
    match state::dispatch(event) {
        Ok(()) => state::with_session(render_progress),
        Err(e) => session_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::view::{handle_gift_post, handle_view_post};
    use crate::session::state::{reset_session, take_engine_script, with_session};
    use crate::session::view::ViewState;

    fn reset_on_songs() {
        reset_session();
        handle_gift_post("id=songs");
    }

    #[test]
    fn toggle_plays_and_emits_script() {
        reset_on_songs();
        let html = handle_player_post("action=toggle");
        assert!(html.contains("a.play()"));
        assert!(html.contains("⏸️"));
        reset_session();
    }

    #[test]
    fn prev_wraps_to_last_track() {
        reset_on_songs();
        let html = handle_player_post("action=prev");
        assert!(html.contains("Lover"));
        assert!(html.contains("a.src='/assets/audio/lover.mp3';a.load();"));
        with_session(|s| assert_eq!(s.player.track_index, 2));
        reset_session();
    }

    #[test]
    fn select_track_plays() {
        reset_session();
        let html = handle_player_post("action=select&index=1");
        with_session(|s| {
            assert_eq!(s.player.track_index, 1);
            assert!(s.player.is_playing);
        });
        assert!(html.contains("a.play()"));
        reset_session();
    }

    #[test]
    fn select_out_of_range() {
        reset_session();
        let html = handle_player_post("action=select&index=9");
        assert!(html.contains("track 9 out of range"));
        reset_session();
    }

    #[test]
    fn seek_from_click_offsets() {
        reset_session();
        handle_player_event_post("event=metadata&duration=240");
        handle_player_post("action=seek&offset=150&width=300");
        with_session(|s| assert_eq!(s.player.elapsed_seconds, 120.0));
        let _ = take_engine_script();

        let html = handle_player_post("action=seek&offset=10&width=0");
        assert!(html.contains("cannot seek"));
        reset_session();
    }

    #[test]
    fn volume_change() {
        reset_session();
        let html = handle_player_post("action=volume&value=0.4");
        assert!(html.contains("a.volume=0.4;"));
        with_session(|s| assert_eq!(s.player.volume, 0.4));
        reset_session();
    }

    #[test]
    fn missing_or_bad_params() {
        reset_session();
        assert!(handle_player_post("action=select").contains("Missing index parameter"));
        assert!(handle_player_post("action=volume&value=loud").contains("Invalid value parameter"));
        assert!(handle_player_post("action=dance").contains("Unknown player action"));
        reset_session();
    }

    #[test]
    fn time_update_returns_progress_only() {
        reset_session();
        handle_player_event_post("event=metadata&duration=200");
        let html = handle_player_event_post("event=timeupdate&elapsed=125.4");
        assert!(html.starts_with(r#"<div id="player-progress""#));
        assert!(html.contains("2:05"));
        assert!(html.contains("3:20"));
        reset_session();
    }

    #[test]
    fn nan_duration_is_zero() {
        reset_session();
        let html = handle_player_event_post("event=metadata&duration=NaN");
        assert!(html.contains(r#"<span class="duration">0:00</span>"#));
        reset_session();
    }

    #[test]
    fn ended_advances_without_playing() {
        reset_session();
        handle_player_post("action=select&index=2");
        let html = handle_player_event_post("event=ended");
        with_session(|s| {
            assert_eq!(s.player.track_index, 0);
            assert!(!s.player.is_playing);
        });
        assert!(html.contains("a.load();"));
        assert!(!html.contains("a.play()"));
        reset_session();
    }

    #[test]
    fn rejected_clears_playing_and_rerenders_play_button() {
        reset_on_songs();
        let html = handle_player_post("action=toggle");
        assert!(html.contains("⏸️"));
        let html = handle_player_event_post("event=rejected&reason=NotAllowedError");
        with_session(|s| assert!(!s.player.is_playing));
        assert!(html.contains("media-player"));
        assert!(html.contains("▶️"));
        assert!(!html.contains("⏸️"));
        assert!(html.contains(r#"title="Play""#));
        reset_session();
    }

    #[test]
    fn actions_from_another_view_still_update_state() {
        reset_session();
        handle_view_post("target=gifts");
        let html = handle_player_post("action=next");
        assert!(html.contains("valentine-root gifts"));
        with_session(|s| {
            assert_eq!(s.view, ViewState::Gifts);
            assert_eq!(s.player.track_index, 1);
        });
        reset_session();
    }
}
