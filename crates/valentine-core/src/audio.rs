//! Background audio toggle.
//!
//! The toggle owns the muted flag; the actual playback handle lives behind
//! [`AudioSink`] so the state machine stays independent of any audio API.

use crate::error::CardResult;

/// Something that can start and stop the looping background track.
pub trait AudioSink {
    /// Request playback. Platforms may refuse (autoplay policies).
    fn play(&mut self) -> CardResult<()>;

    /// Pause playback. Cannot fail.
    fn pause(&mut self);
}

/// Muted/unmuted state of the background track. Starts muted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioToggle {
    muted: bool,
}

impl Default for AudioToggle {
    fn default() -> Self {
        Self { muted: true }
    }
}

impl AudioToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the muted flag and start or pause playback to match.
    ///
    /// Returns the new muted state.
    pub fn toggle(&mut self, sink: &mut impl AudioSink) -> bool {
        self.apply(!self.muted, sink);
        self.muted
    }

    /// Move to `muted`. Does nothing if already there.
    pub fn set_muted(&mut self, muted: bool, sink: &mut impl AudioSink) -> bool {
        if self.muted == muted {
            return false;
        }
        self.apply(muted, sink);
        true
    }

    fn apply(&mut self, muted: bool, sink: &mut impl AudioSink) {
        self.muted = muted;
        if muted {
            sink.pause();
            tracing::debug!("Background audio paused");
        } else if let Err(e) = sink.play() {
            // The muted flag keeps the value just set; no retry.
            tracing::error!("Failed to play background audio: {}", e);
        } else {
            tracing::debug!("Background audio playing");
        }
    }
}
