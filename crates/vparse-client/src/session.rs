//! Parse flow state machine.
//!
//! Drives the UI around a parse round-trip: `Idle -> Parsing -> {Success,
//! Failed}`. The progress counter is cosmetic and unrelated to upstream
//! progress. `Failed` is recoverable by beginning again (retry or switch
//! line). A success can move to `Playing`; a media load error moves to
//! `PlaybackFailed`, from which the fallback path replays the cached
//! result's download URL.

use thiserror::Error;

use vparse_models::ParseResult;

/// One parse round-trip's UI-visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePhase {
    #[default]
    Idle,
    Parsing,
    Success,
    Failed,
    Playing,
    PlaybackFailed,
}

/// Returned by `begin` while a parse is already in flight. The UI disables
/// the triggering control for the duration of the call; there is no
/// cancellation, a superseded response is still applied.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("a parse request is already in flight")]
pub struct ParseInFlight;

#[derive(Debug, Default)]
pub struct ParseSession {
    phase: ParsePhase,
    progress: u8,
    message: Option<String>,
    result: Option<ParseResult>,
}

impl ParseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ParsePhase {
        self.phase
    }

    /// Cosmetic progress, 0-100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Last failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Result of the most recent completed parse.
    pub fn result(&self) -> Option<&ParseResult> {
        self.result.as_ref()
    }

    /// Start a parse. Refused while one is already in flight.
    pub fn begin(&mut self) -> Result<(), ParseInFlight> {
        if self.phase == ParsePhase::Parsing {
            return Err(ParseInFlight);
        }
        self.phase = ParsePhase::Parsing;
        self.progress = 0;
        self.message = None;
        self.result = None;
        Ok(())
    }

    /// Advance the cosmetic progress bar; capped at 90 until completion.
    pub fn tick(&mut self) {
        if self.phase == ParsePhase::Parsing && self.progress < 90 {
            self.progress += 10;
        }
    }

    /// Apply a successful response. Applied regardless of who started the
    /// request: late responses win (last-write-wins).
    pub fn complete(&mut self, result: ParseResult) {
        self.progress = 100;
        self.result = Some(result);
        self.message = None;
        self.phase = ParsePhase::Success;
    }

    /// Apply a failed response. Recoverable: `begin` is allowed again.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.progress = 0;
        self.message = Some(message.into());
        self.phase = ParsePhase::Failed;
    }

    /// Start playback of the parsed result (VIP flow enters this
    /// immediately after success).
    pub fn begin_playback(&mut self) -> Option<&str> {
        if self.phase != ParsePhase::Success {
            return None;
        }
        self.phase = ParsePhase::Playing;
        self.result.as_ref().map(|r| r.play_url.as_str())
    }

    /// The media element failed to load the play URL.
    pub fn playback_failed(&mut self) {
        if self.phase == ParsePhase::Playing {
            self.phase = ParsePhase::PlaybackFailed;
        }
    }

    /// Switch to the fallback player using a cached result's download URL.
    /// Returns the URL to load, or `None` when there is nothing cached.
    pub fn use_fallback(&mut self, cached: Option<&ParseResult>) -> Option<String> {
        if self.phase != ParsePhase::PlaybackFailed {
            return None;
        }
        let url = cached.map(|r| r.download_url.clone())?;
        self.phase = ParsePhase::Playing;
        Some(url)
    }
}
