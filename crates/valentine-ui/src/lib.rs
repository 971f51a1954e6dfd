//! Valentine Card UI Components
//!
//! Stateless Dioxus components used by the card view. They take plain props
//! and report clicks through event handlers; the card's state lives in the
//! application.

pub mod components;

pub use components::*;
