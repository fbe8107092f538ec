//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep board/FFI layers decoupled from store details.

pub mod vocab_service;
