//! Content pages shown once the card is open.

use serde::Deserialize;

use crate::error::{CardError, CardResult};
use crate::video;

/// Media attached to a page. A page shows at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// Static image path
    Image(String),
    /// Link to a hosted video, any supported shape
    Video(String),
}

/// One unit of content: text plus an optional image or video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub text: String,
    pub media: Option<Media>,
}

impl Page {
    /// A text-only page.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: None,
        }
    }

    /// A page with an image below its text.
    pub fn with_image(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: Some(Media::Image(image.into())),
        }
    }

    /// A page with an embedded video below its text.
    pub fn with_video(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: Some(Media::Video(link.into())),
        }
    }

    pub fn image(&self) -> Option<&str> {
        match &self.media {
            Some(Media::Image(path)) => Some(path),
            _ => None,
        }
    }

    pub fn video_link(&self) -> Option<&str> {
        match &self.media {
            Some(Media::Video(link)) => Some(link),
            _ => None,
        }
    }

    pub fn has_video(&self) -> bool {
        self.video_link().is_some()
    }

    /// Embeddable URL for the page's video, if it has one.
    pub fn embed_url(&self) -> Option<String> {
        self.video_link().map(video::embed_url)
    }

    /// What to draw for this page, given the card's "click to continue" hint.
    pub fn view<'a>(&'a self, hint: &'a str) -> PageView<'a> {
        let embed_url = self.embed_url();
        let hint = (embed_url.is_none() && !hint.is_empty()).then_some(hint);
        PageView {
            text: &self.text,
            image: self.image(),
            embed_url,
            hint,
        }
    }
}

/// Render-ready content of one page.
///
/// The hint is only shown on pages without a video; a video page ends the
/// deck's interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub text: &'a str,
    pub image: Option<&'a str>,
    pub embed_url: Option<String>,
    pub hint: Option<&'a str>,
}

/// A page as written in the configuration file.
#[derive(Debug, Deserialize)]
pub(crate) struct PageEntry {
    #[serde(default)]
    pub(crate) text: String,
    pub(crate) image: Option<String>,
    pub(crate) video: Option<String>,
}

impl TryFrom<PageEntry> for Page {
    type Error = String;

    fn try_from(entry: PageEntry) -> Result<Self, Self::Error> {
        let media = match (entry.image, entry.video) {
            (Some(_), Some(_)) => return Err("page has both an image and a video".to_string()),
            (Some(image), None) => Some(Media::Image(image)),
            (None, Some(video)) => Some(Media::Video(video)),
            (None, None) => None,
        };
        Ok(Self {
            text: entry.text,
            media,
        })
    }
}

/// Fixed, ordered, non-empty sequence of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pages: Vec<Page>,
}

impl Deck {
    pub fn new(pages: Vec<Page>) -> CardResult<Self> {
        if pages.is_empty() {
            return Err(CardError::EmptyDeck);
        }
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Never true for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(CardError::EmptyDeck)));
    }

    #[test]
    fn media_accessors() {
        let image = Page::with_image("hola", "/imagen1.jpeg");
        assert_eq!(image.image(), Some("/imagen1.jpeg"));
        assert!(!image.has_video());
        assert_eq!(image.embed_url(), None);

        let video = Page::with_video("", "https://youtu.be/v-xzJb9eQIg");
        assert_eq!(video.image(), None);
        assert!(video.has_video());
        assert_eq!(
            video.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/v-xzJb9eQIg")
        );

        assert_eq!(Page::text("solo texto").media, None);
    }

    #[test]
    fn image_page_view_shows_hint() {
        let page = Page::with_image("hola", "/imagen1.jpeg");
        let view = page.view("Haz clic para continuar");
        assert_eq!(view.text, "hola");
        assert_eq!(view.image, Some("/imagen1.jpeg"));
        assert_eq!(view.embed_url, None);
        assert_eq!(view.hint, Some("Haz clic para continuar"));
    }

    #[test]
    fn video_page_view_hides_hint() {
        let page = Page::with_video("", "https://youtu.be/v-xzJb9eQIg");
        let view = page.view("Haz clic para continuar");
        assert_eq!(view.text, "");
        assert_eq!(view.image, None);
        assert_eq!(
            view.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/v-xzJb9eQIg")
        );
        assert_eq!(view.hint, None);
    }

    #[test]
    fn empty_hint_is_never_shown() {
        assert_eq!(Page::text("solo texto").view("").hint, None);
        assert_eq!(Page::with_image("a", "/a.png").view("").hint, None);
    }

    #[test]
    fn unrecognized_video_link_embeds_verbatim() {
        let page = Page::with_video("", "not-a-video-link");
        let view = page.view("hint");
        assert_eq!(view.embed_url.as_deref(), Some("not-a-video-link"));
        assert_eq!(view.hint, None);
    }

    #[test]
    fn entry_with_both_media_rejected() {
        let entry = PageEntry {
            text: "x".to_string(),
            image: Some("/a.png".to_string()),
            video: Some("https://youtu.be/v-xzJb9eQIg".to_string()),
        };
        assert!(Page::try_from(entry).is_err());
    }

    #[test]
    fn deck_bounds() {
        let deck = Deck::new(vec![Page::text("a"), Page::text("b")]).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.last_index(), 1);
        assert!(deck.get(2).is_none());
        assert_eq!(deck.iter().count(), 2);
    }
}
