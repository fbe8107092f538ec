//! Sentence composition and speech output.
//!
//! # Responsibility
//! - Turn tile activations into the composed sentence.
//! - Render numeric tokens as spoken English.
//! - Forward utterances to the platform speech engine.

pub mod number_words;
pub mod sentence;
pub mod speaker;
