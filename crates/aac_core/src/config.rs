//! Board settings with platform defaults and environment overrides.
//!
//! # Invariants
//! - `tiles_per_page` is at least 1.
//! - `speech_rate` is finite and positive.
//! - Invalid overrides are ignored with a warning; loading never fails.

use crate::packs::FALLBACK_SUBJECT;
use crate::speech::sentence::DigitSpeechPolicy;
use crate::speech::speaker::{SpeechOptions, DEFAULT_SPEECH_RATE};
use log::warn;
use serde::{Deserialize, Serialize};

pub const ENV_TILES_PER_PAGE: &str = "AAC_TILES_PER_PAGE";
pub const ENV_SPEECH_RATE: &str = "AAC_SPEECH_RATE";
pub const ENV_DIGIT_POLICY: &str = "AAC_DIGIT_POLICY";
pub const ENV_DEFAULT_SUBJECT: &str = "AAC_DEFAULT_SUBJECT";

/// Host platform class; decides the default grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Web,
    #[default]
    Mobile,
}

impl Platform {
    pub fn default_tiles_per_page(self) -> usize {
        match self {
            Self::Web => 18,
            Self::Mobile => 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub tiles_per_page: usize,
    pub speech_rate: f32,
    pub digit_policy: DigitSpeechPolicy,
    /// Subject board shown when none is requested.
    pub default_subject: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

impl BoardConfig {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            tiles_per_page: platform.default_tiles_per_page(),
            speech_rate: DEFAULT_SPEECH_RATE,
            digit_policy: DigitSpeechPolicy::default(),
            default_subject: FALLBACK_SUBJECT.to_string(),
        }
    }

    /// Platform defaults overridden by `AAC_*` environment variables.
    pub fn from_env(platform: Platform) -> Self {
        Self::from_lookup(platform, |name| std::env::var(name).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup(platform: Platform, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::for_platform(platform);

        if let Some(raw) = lookup(ENV_TILES_PER_PAGE) {
            match raw.trim().parse::<usize>() {
                Ok(value) if value > 0 => config.tiles_per_page = value,
                _ => warn_invalid(ENV_TILES_PER_PAGE, &raw),
            }
        }
        if let Some(raw) = lookup(ENV_SPEECH_RATE) {
            match raw.trim().parse::<f32>() {
                Ok(value) if value.is_finite() && value > 0.0 => config.speech_rate = value,
                _ => warn_invalid(ENV_SPEECH_RATE, &raw),
            }
        }
        if let Some(raw) = lookup(ENV_DIGIT_POLICY) {
            match DigitSpeechPolicy::parse(&raw) {
                Some(policy) => config.digit_policy = policy,
                None => warn_invalid(ENV_DIGIT_POLICY, &raw),
            }
        }
        if let Some(raw) = lookup(ENV_DEFAULT_SUBJECT) {
            let subject = raw.trim().to_lowercase();
            if subject.is_empty() {
                warn_invalid(ENV_DEFAULT_SUBJECT, &raw);
            } else {
                config.default_subject = subject;
            }
        }
        config
    }

    pub fn speech_options(&self) -> SpeechOptions {
        SpeechOptions {
            rate: self.speech_rate,
        }
    }
}

fn warn_invalid(name: &str, raw: &str) {
    warn!("event=config_load module=config status=fallback var={name} value={raw:?}");
}
