//! UI Components for the Valentine Card.
//!
//! One component per visual stage. They are pure views: every interaction is
//! reported upward through an event handler.

mod closed_card;
mod content_view;
mod leaving_card;
mod opened_card;

pub use closed_card::ClosedCard;
pub use content_view::ContentView;
pub use leaving_card::LeavingCard;
pub use opened_card::OpenedCard;
