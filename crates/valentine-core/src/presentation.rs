//! The presentation state machine.
//!
//! A single owned state object with one transition per user or animation
//! event. The view re-renders from the accessors after every event.
//!
//! ## Audio intent
//!
//! Background audio is never flipped as a side effect of a transition.
//! Instead the wanted mute state is derived from the stage and active page:
//!
//! | Stage | Active page | Wanted |
//! |-------|-------------|--------|
//! | ClosedCard | - | no opinion |
//! | OpeningTransition | - | sound |
//! | Content | no video | sound |
//! | Content | video | silence |
//!
//! When the derived intent changes, the toggle is set to it. Manual toggles
//! stick until the next change of intent.

use crate::audio::{AudioSink, AudioToggle};
use crate::deck::{Deck, Page};
use crate::pagination::Pagination;
use crate::stage::{Stage, StageController};

/// Everything that can happen to the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEvent {
    /// Click on the closed card
    CardClicked,
    /// The flip animation finished
    FlipFinished,
    /// Click on the opened card
    OpenedCardClicked,
    /// The opening transition animation finished
    TransitionFinished,
    /// Click anywhere in the content area
    ContentClicked,
    /// Click on the mute button
    MuteToggled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    deck: Deck,
    stage: StageController,
    pages: Pagination,
    audio: AudioToggle,
    /// Last derived mute intent, `None` while there is none
    intent: Option<bool>,
}

impl Presentation {
    pub fn new(deck: Deck) -> Self {
        let pages = Pagination::new(deck.len());
        Self {
            deck,
            stage: StageController::new(),
            pages,
            audio: AudioToggle::new(),
            intent: None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn stage(&self) -> Stage {
        self.stage.stage()
    }

    pub fn has_flipped(&self) -> bool {
        self.stage.has_flipped()
    }

    pub fn is_animating(&self) -> bool {
        self.stage.is_animating()
    }

    pub fn page_index(&self) -> usize {
        self.pages.index()
    }

    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    /// The page on display. `None` until the content stage.
    pub fn current_page(&self) -> Option<&Page> {
        match self.stage() {
            Stage::Content => self.deck.get(self.pages.index()),
            _ => None,
        }
    }

    /// Apply an event. Returns whether anything changed.
    pub fn handle(&mut self, event: CardEvent, sink: &mut impl AudioSink) -> bool {
        let changed = match event {
            CardEvent::CardClicked => self.stage.start_flip(),
            CardEvent::FlipFinished => self.stage.finish_flip(),
            CardEvent::OpenedCardClicked => self.stage.advance_to_transition(),
            CardEvent::TransitionFinished => self.stage.finish_transition(),
            CardEvent::ContentClicked => self.advance_page(),
            CardEvent::MuteToggled => {
                self.audio.toggle(sink);
                true
            }
        };

        if changed {
            tracing::debug!(
                ?event,
                stage = self.stage().label(),
                page = self.page_index(),
                "Card event applied"
            );
            self.sync_audio(sink);
        }
        changed
    }

    fn advance_page(&mut self) -> bool {
        if self.stage() != Stage::Content {
            return false;
        }
        self.pages.advance()
    }

    /// Wanted mute state for the current stage and page.
    fn audio_intent(&self) -> Option<bool> {
        match self.stage() {
            Stage::ClosedCard => None,
            Stage::OpeningTransition => Some(false),
            Stage::Content => Some(self.current_page().is_some_and(Page::has_video)),
        }
    }

    fn sync_audio(&mut self, sink: &mut impl AudioSink) {
        let intent = self.audio_intent();
        if intent == self.intent {
            return;
        }
        self.intent = intent;
        if let Some(muted) = intent {
            self.audio.set_muted(muted, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardResult;

    #[derive(Default)]
    struct NullSink;

    impl AudioSink for NullSink {
        fn play(&mut self) -> CardResult<()> {
            Ok(())
        }

        fn pause(&mut self) {}
    }

    fn deck() -> Deck {
        Deck::new(vec![
            Page::with_image("uno", "/1.jpeg"),
            Page::with_video("", "https://youtu.be/v-xzJb9eQIg"),
            Page::text("tres"),
        ])
        .unwrap()
    }

    fn opened(sink: &mut NullSink) -> Presentation {
        let mut card = Presentation::new(deck());
        card.handle(CardEvent::CardClicked, sink);
        card.handle(CardEvent::FlipFinished, sink);
        card.handle(CardEvent::OpenedCardClicked, sink);
        card.handle(CardEvent::TransitionFinished, sink);
        card
    }

    #[test]
    fn no_page_before_content() {
        let card = Presentation::new(deck());
        assert_eq!(card.current_page(), None);
        assert_eq!(card.page_index(), 0);
    }

    #[test]
    fn content_clicks_ignored_before_content() {
        let mut sink = NullSink;
        let mut card = Presentation::new(deck());
        assert!(!card.handle(CardEvent::ContentClicked, &mut sink));
        assert_eq!(card.page_index(), 0);
    }

    #[test]
    fn video_page_silences_and_next_page_restores() {
        let mut sink = NullSink;
        let mut card = opened(&mut sink);
        assert!(!card.is_muted());

        card.handle(CardEvent::ContentClicked, &mut sink);
        assert!(card.is_muted());

        card.handle(CardEvent::ContentClicked, &mut sink);
        assert!(!card.is_muted());
    }

    #[test]
    fn manual_toggle_sticks_within_same_intent() {
        let mut sink = NullSink;
        let mut card = Presentation::new(
            Deck::new(vec![Page::text("a"), Page::text("b")]).unwrap(),
        );
        card.handle(CardEvent::CardClicked, &mut sink);
        card.handle(CardEvent::FlipFinished, &mut sink);
        card.handle(CardEvent::OpenedCardClicked, &mut sink);
        assert!(!card.is_muted());

        card.handle(CardEvent::MuteToggled, &mut sink);
        assert!(card.is_muted());

        card.handle(CardEvent::TransitionFinished, &mut sink);
        card.handle(CardEvent::ContentClicked, &mut sink);
        assert!(card.is_muted());
    }

    #[test]
    fn toggle_before_opening_is_overridden_by_opening() {
        let mut sink = NullSink;
        let mut card = Presentation::new(deck());
        card.handle(CardEvent::MuteToggled, &mut sink);
        assert!(!card.is_muted());
        card.handle(CardEvent::MuteToggled, &mut sink);
        assert!(card.is_muted());

        card.handle(CardEvent::CardClicked, &mut sink);
        card.handle(CardEvent::FlipFinished, &mut sink);
        card.handle(CardEvent::OpenedCardClicked, &mut sink);
        assert!(!card.is_muted());
    }
}
