//! Shared helpers for integration tests.

#![allow(dead_code)]

use valentine_core::{AudioSink, CardError, CardResult};

/// What the sink was asked to do, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play,
    Pause,
}

/// Audio sink that records calls and can be told to refuse playback.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<AudioCall>,
    pub refuse_playback: bool,
}

impl RecordingSink {
    pub fn plays(&self) -> usize {
        self.calls.iter().filter(|c| **c == AudioCall::Play).count()
    }

    pub fn pauses(&self) -> usize {
        self.calls.iter().filter(|c| **c == AudioCall::Pause).count()
    }
}

impl AudioSink for RecordingSink {
    fn play(&mut self) -> CardResult<()> {
        self.calls.push(AudioCall::Play);
        if self.refuse_playback {
            return Err(CardError::Playback("play() request was denied".to_string()));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(AudioCall::Pause);
    }
}
