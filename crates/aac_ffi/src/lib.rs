//! Flutter bridge over the board core.

pub mod api;
