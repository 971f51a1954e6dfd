//! Valentine Card Core Library
//!
//! The presentation state machine behind the animated greeting card.
//!
//! ## Overview
//!
//! The card is a linear, hand-authored sequence of visual stages:
//!
//! 1. **Closed card** - clicking flips it open (one-time animation)
//! 2. **Opening transition** - the opened card slides, shrinks and fades away
//! 3. **Content** - a fixed deck of pages (text plus an image or a video),
//!    advanced one page per click
//!
//! A looping background track follows the presentation: it starts when the
//! card opens and falls silent while a video page is showing. The user can
//! override it at any time with the mute toggle.
//!
//! Nothing here knows about rendering. The view layer feeds [`CardEvent`]s into
//! a [`Presentation`] and re-renders from its accessors; audio side effects go
//! through the [`AudioSink`] trait.
//!
//! ## Quick Start
//!
//! ```ignore
//! use valentine_core::{AudioSink, CardConfig, CardEvent, Presentation};
//!
//! let config = CardConfig::builtin()?;
//! let mut card = Presentation::new(config.deck.clone());
//!
//! card.handle(CardEvent::CardClicked, &mut sink);
//! card.handle(CardEvent::FlipFinished, &mut sink);
//! card.handle(CardEvent::OpenedCardClicked, &mut sink); // background track starts
//! ```

pub mod audio;
pub mod config;
pub mod deck;
pub mod error;
pub mod pagination;
pub mod presentation;
pub mod stage;
pub mod video;

// Re-exports
pub use audio::{AudioSink, AudioToggle};
pub use config::{AssetPaths, CardConfig, Timing};
pub use deck::{Deck, Media, Page, PageView};
pub use error::{CardError, CardResult};
pub use pagination::Pagination;
pub use presentation::{CardEvent, Presentation};
pub use stage::{Stage, StageController};
pub use video::{embed_url, video_id, EMBED_BASE};
