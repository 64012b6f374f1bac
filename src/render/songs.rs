//! Songs view — album art, transport controls, progress bar, volume,
//! playlist and the page's single `<audio>` element.
//!
//! The `<audio>` element is marked `hx-preserve` so fragment swaps never
//! interrupt playback. Its progress callbacks post to `/api/player/event`;
//! `timeupdate` and `loadedmetadata` only refresh `#player-progress`.

use crate::catalog::Catalog;
use crate::render::assets::render_picture;
use crate::render::{escape_html, hx_post};
use crate::session::engine::AUDIO_ELEMENT_ID;
use crate::session::player::{format_time, track_number};
use crate::session::state::AppState;
use crate::session::view::ViewState;

pub fn render_songs(state: &AppState, catalog: &Catalog) -> String {
    let player = &state.player;
    let Some(song) = catalog.songs.get(player.track_index) else {
        return r#"<span class="text-red">No song at this position</span>"#.to_string();
    };
    let mut html = String::with_capacity(6144);

    html.push_str(r#"<div class="card songs-card">"#);
    html.push_str(&format!(
        r#"<h1 class="yay">{}</h1>"#,
        escape_html(&catalog.content.songs_title)
    ));
    html.push_str(r#"<div class="media-player-container"><div class="media-player">"#);

    // Album art
    html.push_str(r#"<div class="album-art-section"><div class="album-art-frame"><div class="album-art">"#);
    html.push_str(&render_picture(&song.cover, "Album Cover", "album-image"));
    html.push_str("</div></div>");
    html.push_str(&format!(
        r#"<div class="album-info"><h2 class="album-title">{}</h2><p class="album-artist">{}</p></div>"#,
        escape_html(&song.album),
        escape_html(&song.artist)
    ));
    html.push_str("</div>");

    // Controls
    html.push_str(r#"<div class="media-controls">"#);
    html.push_str(&format!(
        r#"<div class="current-song-info"><h3 class="current-title">{}</h3><p class="current-artist">{}</p></div>"#,
        escape_html(&song.title),
        escape_html(&song.artist)
    ));
    html.push_str(&render_progress(state));

    let (play_icon, play_tip) = if player.is_playing {
        ("⏸️", &catalog.tooltips.pause)
    } else {
        ("▶️", &catalog.tooltips.play)
    };
    html.push_str(r#"<div class="control-buttons">"#);
    html.push_str(&format!(
        r#"<button class="control-btn" title="{}" {}>⏪</button>"#,
        escape_html(&catalog.tooltips.previous),
        hx_post("/api/player", &[("action", "prev")])
    ));
    html.push_str(&format!(
        r#"<button class="play-btn-large" title="{}" {}>{}</button>"#,
        escape_html(play_tip),
        hx_post("/api/player", &[("action", "toggle")]),
        play_icon
    ));
    html.push_str(&format!(
        r#"<button class="control-btn" title="{}" {}>⏩</button>"#,
        escape_html(&catalog.tooltips.next),
        hx_post("/api/player", &[("action", "next")])
    ));
    html.push_str("</div>");

    // Volume: the range input submits its own `value`
    html.push_str(&format!(
        r#"<div class="volume-section"><span class="volume-icon">{}</span><div class="volume-bar-container"><input type="range" class="volume-bar" name="value" min="0" max="1" step="0.1" value="{}" hx-trigger="change" {}></div></div>"#,
        player.volume_icon(),
        player.volume,
        hx_post("/api/player", &[("action", "volume")])
    ));
    html.push_str("</div>"); // media-controls
    html.push_str("</div>"); // media-player

    // Playlist
    html.push_str(r#"<div class="song-playlist">"#);
    html.push_str(&format!(
        r#"<h3 class="playlist-title">{}</h3><div class="playlist-container">"#,
        escape_html(&catalog.content.songs_title)
    ));
    for (index, entry) in catalog.songs.iter().enumerate() {
        let active = if index == player.track_index { " active" } else { "" };
        let index_str = index.to_string();
        html.push_str(&format!(
            r#"<div class="playlist-item{}" data-song="{}" {}>"#,
            active,
            escape_html(&entry.id),
            hx_post("/api/player", &[("action", "select"), ("index", &index_str)])
        ));
        html.push_str(&format!(
            r#"<div class="playlist-item-left"><div class="playlist-number">{}</div><div class="playlist-info"><h4 class="playlist-title-text">{}</h4><p class="playlist-artist">{}</p></div></div>"#,
            track_number(index),
            escape_html(&entry.title),
            escape_html(&entry.artist)
        ));
        html.push_str(&format!(
            r#"<div class="playlist-duration">{}</div></div>"#,
            escape_html(&entry.duration)
        ));
    }
    html.push_str("</div></div>"); // playlist-container, song-playlist
    html.push_str("</div>"); // media-player-container

    html.push_str(&render_audio_element(&song.audio));

    html.push_str(&super::nav_button(
        "btn yes",
        ViewState::Gifts,
        &catalog.navigation.back_to_gifts,
    ));
    html.push_str("</div>");
    html
}

/// Time display and progress bar. Returned alone for engine time updates.
pub fn render_progress(state: &AppState) -> String {
    let player = &state.player;
    format!(
        r##"<div id="player-progress" class="progress-section"><div class="time-display"><span class="current-time">{}</span><span class="duration">{}</span></div><div class="progress-bar-container" hx-post="/api/player" hx-vals='js:{{action: "seek", offset: event.offsetX, width: event.currentTarget.getBoundingClientRect().width}}' hx-target="#valentine-root" hx-swap="outerHTML"><div class="progress-bar"><div class="progress-fill" style="width:{:.2}%"></div></div></div></div>"##,
        format_time(player.elapsed_seconds),
        format_time(player.total_seconds),
        player.progress_percent()
    )
}

fn render_audio_element(src: &str) -> String {
    let event = |name: &str, extra: &str| {
        format!(
            "htmx.ajax('POST', '/api/player/event', {{values: {{event: '{}'{}}}, target: '#player-progress', swap: 'outerHTML'}})",
            name, extra
        )
    };
    format!(
        r#"<audio id="{}" hx-preserve="true" preload="metadata" src="{}" ontimeupdate="{}" onloadedmetadata="{}" onended="{}"></audio>"#,
        AUDIO_ELEMENT_ID,
        escape_html(src),
        event("timeupdate", ", elapsed: this.currentTime"),
        event("metadata", ", duration: this.duration"),
        "htmx.ajax('POST', '/api/player/event', {values: {event: 'ended'}, target: '#valentine-root', swap: 'outerHTML'})"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn songs_state() -> AppState {
        AppState {
            view: ViewState::Songs,
            ..Default::default()
        }
    }

    #[test]
    fn shows_current_song_and_playlist() {
        let catalog = catalog();
        let html = render_songs(&songs_state(), &catalog);
        assert!(html.contains(&catalog.songs[0].title));
        assert!(html.contains(&catalog.songs[0].album));
        assert_eq!(html.matches("playlist-item").count() - html.matches("playlist-item-left").count(), 3);
        assert!(html.contains(r#"<div class="playlist-number">01</div>"#));
        assert!(html.contains(r#"<div class="playlist-number">03</div>"#));
        assert_eq!(html.matches("playlist-item active").count(), 1);
    }

    #[test]
    fn play_button_reflects_flag() {
        let catalog = catalog();
        let mut state = songs_state();
        let html = render_songs(&state, &catalog);
        assert!(html.contains("▶️"));
        assert!(html.contains(r#"title="Play""#));

        state.player.is_playing = true;
        let html = render_songs(&state, &catalog);
        assert!(html.contains("⏸️"));
        assert!(html.contains(r#"title="Pause""#));
    }

    #[test]
    fn progress_shows_formatted_times() {
        let mut state = songs_state();
        state.player.elapsed_seconds = 125.0;
        state.player.total_seconds = 200.0;
        let html = render_progress(&state);
        assert!(html.contains(r#"<span class="current-time">2:05</span>"#));
        assert!(html.contains(r#"<span class="duration">3:20</span>"#));
        assert!(html.contains("width:62.50%"));
    }

    #[test]
    fn progress_zero_before_metadata() {
        let mut state = songs_state();
        state.player.elapsed_seconds = 10.0;
        let html = render_progress(&state);
        assert!(html.contains("width:0.00%"));
    }

    #[test]
    fn audio_element_is_preserved_and_wired() {
        let catalog = catalog();
        let html = render_songs(&songs_state(), &catalog);
        assert!(html.contains(r#"<audio id="valentine-audio" hx-preserve="true""#));
        assert!(html.contains(&format!(r#"src="{}""#, catalog.songs[0].audio)));
        assert!(html.contains("event: 'timeupdate'"));
        assert!(html.contains("event: 'metadata'"));
        assert!(html.contains("event: 'ended'"));
    }

    #[test]
    fn volume_slider_reflects_state() {
        let mut state = songs_state();
        state.player.volume = 0.3;
        let html = render_songs(&state, &catalog());
        assert!(html.contains(r#"value="0.3""#));
        assert!(html.contains("🔉"));
    }
}
