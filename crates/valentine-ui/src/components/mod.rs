//! Reusable card components.

mod mute_button;
mod video_frame;

pub use mute_button::{MuteButton, MuteIcon};
pub use video_frame::{VideoFrame, VIDEO_PERMISSIONS};
