//! Page components for the Valentine Card.

mod card;

pub use card::CardView;
