//! Playback engine seam — the audio element the player state commands.
//!
//! The player sub-state never reaches into the DOM. It issues commands
//! through `PlaybackEngine`; the engine's own progress notifications come
//! back as `Event`s via `/api/player/event`.
//!
//! `ScriptEngine` is the in-page implementation: commands are queued and
//! drained into a `<script>` block that runs against `#valentine-audio`
//! when HTMX swaps the songs fragment in. `play()` on the real element is
//! a promise, so rejection can only be reported later, as an
//! `event=rejected` HTMX request from the `.catch()` handler that swaps
//! the re-rendered view in.

/// DOM id of the page's single `<audio>` element.
pub const AUDIO_ELEMENT_ID: &str = "valentine-audio";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("playback rejected: {0}")]
    Rejected(String),
}

pub trait PlaybackEngine {
    /// Point the engine at a new source and reset it. Does not start playback.
    fn load(&mut self, src: &str);
    fn play(&mut self) -> Result<(), EngineError>;
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
    fn set_volume(&mut self, volume: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
}

/// Queues commands until the next songs fragment is rendered.
#[derive(Debug, Default)]
pub struct ScriptEngine {
    pending: Vec<EngineCommand>,
}

impl ScriptEngine {
    pub fn pending(&self) -> &[EngineCommand] {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Drain pending commands into an inline `<script>`.
    /// Returns an empty string when nothing is queued.
    pub fn take_script(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let mut js = String::with_capacity(256);
        js.push_str("<script>(function(){");
        js.push_str(&format!(
            "var a=document.getElementById('{}');if(!a)return;",
            AUDIO_ELEMENT_ID
        ));
        for cmd in self.pending.drain(..) {
            match cmd {
                EngineCommand::Load(src) => {
                    js.push_str(&format!("a.src='{}';a.load();", js_escape(&src)));
                }
                EngineCommand::Play => {
                    // rejection re-renders the view so the play button reflects it
                    js.push_str(
                        "var p=a.play();if(p&&p.catch){p.catch(function(e){\
                         htmx.ajax('POST','/api/player/event',{values:{event:'rejected',\
                         reason:(e&&e.name)||''},target:'#valentine-root',swap:'outerHTML'})})}",
                    );
                }
                EngineCommand::Pause => js.push_str("a.pause();"),
                EngineCommand::Seek(t) => js.push_str(&format!("a.currentTime={};", t)),
                EngineCommand::SetVolume(v) => js.push_str(&format!("a.volume={};", v)),
            }
        }
        js.push_str("})();</script>");
        js
    }
}

impl PlaybackEngine for ScriptEngine {
    fn load(&mut self, src: &str) {
        self.pending.push(EngineCommand::Load(src.to_string()));
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.pending.push(EngineCommand::Play);
        Ok(())
    }

    fn pause(&mut self) {
        self.pending.push(EngineCommand::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        self.pending.push(EngineCommand::Seek(seconds));
    }

    fn set_volume(&mut self, volume: f64) {
        self.pending.push(EngineCommand::SetVolume(volume));
    }
}

/// Escape a string for a single-quoted JS literal inside an HTML `<script>`.
fn js_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            _ => out.push(ch),
        }
    }
    out
}

/// Test double: records every command and can be told to reject `play()`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub commands: Vec<EngineCommand>,
    pub reject_play: Option<String>,
}

#[cfg(test)]
impl PlaybackEngine for RecordingEngine {
    fn load(&mut self, src: &str) {
        self.commands.push(EngineCommand::Load(src.to_string()));
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.commands.push(EngineCommand::Play);
        match &self.reject_play {
            Some(reason) => Err(EngineError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }

    fn pause(&mut self) {
        self.commands.push(EngineCommand::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        self.commands.push(EngineCommand::Seek(seconds));
    }

    fn set_volume(&mut self, volume: f64) {
        self.commands.push(EngineCommand::SetVolume(volume));
    }
}
