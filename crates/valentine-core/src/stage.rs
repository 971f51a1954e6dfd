//! Top-level visual stages of the card.
//!
//! Stages only move forward:
//! `ClosedCard -> OpeningTransition -> Content`. Operations called outside
//! their preconditions are no-ops and report `false`.

/// One of the three mutually exclusive visual modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Closed card, then the opened card once the flip has played
    #[default]
    ClosedCard,
    /// Opened card animating out of view
    OpeningTransition,
    /// Paged content on the final card
    Content,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::ClosedCard => "closed card",
            Stage::OpeningTransition => "opening transition",
            Stage::Content => "content",
        }
    }
}

/// Tracks the active stage and the one-time flip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageController {
    stage: Stage,
    has_flipped: bool,
    is_animating: bool,
}

impl StageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the closed card has finished flipping. Never reset.
    pub fn has_flipped(&self) -> bool {
        self.has_flipped
    }

    /// Whether the flip animation has been started.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Start rotating the closed card.
    pub fn start_flip(&mut self) -> bool {
        if self.stage != Stage::ClosedCard || self.has_flipped || self.is_animating {
            return false;
        }
        self.is_animating = true;
        tracing::debug!("Card flip started");
        true
    }

    /// Completion hook for the flip animation.
    ///
    /// `is_animating` stays set; it is not consulted after the flip.
    pub fn finish_flip(&mut self) -> bool {
        if self.stage != Stage::ClosedCard || !self.is_animating || self.has_flipped {
            return false;
        }
        self.has_flipped = true;
        tracing::debug!("Card flip finished");
        true
    }

    /// Leave the opened card and start the opening transition.
    pub fn advance_to_transition(&mut self) -> bool {
        if self.stage != Stage::ClosedCard || !self.has_flipped {
            return false;
        }
        self.enter(Stage::OpeningTransition);
        true
    }

    /// Completion hook for the opening transition animation.
    pub fn finish_transition(&mut self) -> bool {
        if self.stage != Stage::OpeningTransition {
            return false;
        }
        self.enter(Stage::Content);
        true
    }

    fn enter(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "stages only move forward");
        tracing::debug!(from = self.stage.label(), to = next.label(), "Stage advanced");
        self.stage = next;
    }
}
