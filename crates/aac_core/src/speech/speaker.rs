//! Speech collaborator boundary.
//!
//! # Responsibility
//! - Define the text-to-speech engine contract used by core.
//! - Enforce at-most-one active utterance: every request stops the previous.
//!
//! # Invariants
//! - Blank text never reaches the engine.
//! - `stop()` is always issued before `speak()` for a new request.

use log::debug;
use std::sync::Mutex;

/// Default speaking rate used by the board screens.
pub const DEFAULT_SPEECH_RATE: f32 = 0.95;

/// Options forwarded with each utterance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechOptions {
    pub rate: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SPEECH_RATE,
        }
    }
}

/// Platform text-to-speech engine (browser synthesizer or mobile TTS).
pub trait SpeechEngine {
    /// Starts speaking `text`.
    fn speak(&self, text: &str, options: &SpeechOptions);
    /// Interrupts the current utterance, if any.
    fn stop(&self);
}

/// Last-request-wins wrapper over a [`SpeechEngine`].
pub struct Speaker<E: SpeechEngine> {
    engine: E,
    options: SpeechOptions,
}

impl<E: SpeechEngine> Speaker<E> {
    pub fn new(engine: E, options: SpeechOptions) -> Self {
        Self { engine, options }
    }

    /// Interrupts any current utterance and speaks `text`.
    ///
    /// Returns `false` without touching the engine when `text` is blank.
    pub fn say(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.engine.stop();
        self.engine.speak(trimmed, &self.options);
        debug!(
            "event=speech_request module=speech status=ok chars={} rate={}",
            trimmed.chars().count(),
            self.options.rate
        );
        true
    }

    pub fn stop(&self) {
        self.engine.stop();
    }

    pub fn options(&self) -> SpeechOptions {
        self.options
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Engine that keeps only the latest request for a UI host to play.
///
/// Used when the actual synthesizer lives on the other side of the FFI
/// boundary: the host drains the pending utterance after each call.
#[derive(Debug, Default)]
pub struct PendingUtterance {
    pending: Mutex<Option<(String, f32)>>,
}

impl PendingUtterance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending `(text, rate)` request, leaving none behind.
    pub fn take(&self) -> Option<(String, f32)> {
        match self.pending.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl SpeechEngine for PendingUtterance {
    fn speak(&self, text: &str, options: &SpeechOptions) {
        let request = Some((text.to_string(), options.rate));
        match self.pending.lock() {
            Ok(mut guard) => *guard = request,
            Err(poisoned) => *poisoned.into_inner() = request,
        }
    }

    fn stop(&self) {
        match self.pending.lock() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
