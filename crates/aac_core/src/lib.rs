//! Core domain logic for the AAC communication board.
//! This crate is the single source of truth for board invariants.

pub mod auth;
pub mod board;
pub mod config;
pub mod logging;
pub mod media;
pub mod model;
pub mod packs;
pub mod repo;
pub mod seed;
pub mod service;
pub mod speech;

pub use board::view::{BoardView, InteractionMode};
pub use board::{Board, BoardError, TileActivation};
pub use config::{BoardConfig, Platform};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CollectionKey};
pub use model::tile::{Tile, TileDraft, TileId, TileValidationError};
pub use packs::{
    load_subject_board, PackSource, PackSourceError, PayloadPackSource, SubjectBoard,
};
pub use repo::vocab_repo::{InMemoryVocabRepository, RepoError, RepoResult, VocabRepository};
pub use service::vocab_service::{VocabService, VocabServiceError};
pub use speech::number_words::number_to_words;
pub use speech::sentence::{DigitSpeechPolicy, Sentence};
pub use speech::speaker::{PendingUtterance, Speaker, SpeechEngine, SpeechOptions};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
