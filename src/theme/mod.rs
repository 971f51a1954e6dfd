//! Visual theme for the card.

mod styles;

pub use styles::GLOBAL_STYLES;
