//! Card configuration.
//!
//! The card's content (pages, asset paths, animation timings) is a static
//! table loaded once at startup. A built-in copy ships with the crate in
//! `content/card.toml`.

use serde::Deserialize;

use crate::deck::{Deck, Page, PageEntry};
use crate::error::{CardError, CardResult};

const BUILTIN_CARD: &str = include_str!("../content/card.toml");

/// Static asset locations. Treated as opaque paths; nothing here checks that
/// the files exist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetPaths {
    pub closed_card: String,
    pub opened_card: String,
    pub final_card: String,
    pub audio: String,
}

/// Animation durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Closed card rotating edge-on
    pub flip_ms: u32,
    /// Opened card sliding, shrinking and fading out
    pub transition_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            flip_ms: 500,
            transition_ms: 1000,
        }
    }
}

/// Fully validated card configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// Document title
    pub title: String,
    /// Caption shown under pages that have no video
    pub hint: String,
    pub assets: AssetPaths,
    pub timing: Timing,
    pub deck: Deck,
}

#[derive(Debug, Deserialize)]
struct RawCardConfig {
    title: String,
    #[serde(default)]
    hint: String,
    assets: AssetPaths,
    #[serde(default)]
    timing: Timing,
    #[serde(default, rename = "page")]
    pages: Vec<PageEntry>,
}

impl CardConfig {
    /// Parse and validate a configuration from TOML.
    pub fn from_toml_str(source: &str) -> CardResult<Self> {
        let raw: RawCardConfig = toml::from_str(source)?;

        let pages = raw
            .pages
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Page::try_from(entry).map_err(|reason| CardError::InvalidPage { index, reason })
            })
            .collect::<CardResult<Vec<_>>>()?;

        Ok(Self {
            title: raw.title,
            hint: raw.hint,
            assets: raw.assets,
            timing: raw.timing,
            deck: Deck::new(pages)?,
        })
    }

    /// The configuration embedded in the binary.
    pub fn builtin() -> CardResult<Self> {
        Self::from_toml_str(BUILTIN_CARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Media;

    const ASSETS: &str = r#"
[assets]
closed_card = "/closed.png"
opened_card = "/open.png"
final_card = "/final.png"
audio = "/song.mp3"
"#;

    #[test]
    fn builtin_config_loads() {
        let config = CardConfig::builtin().unwrap();
        assert_eq!(config.deck.len(), 4);
        assert_eq!(config.timing, Timing::default());
        assert_eq!(config.assets.audio, "/sonido.mp3");
        assert_eq!(config.hint, "Haz clic para continuar");

        for page in config.deck.iter().take(3) {
            assert!(page.image().is_some());
        }
        let last = config.deck.get(3).unwrap();
        assert_eq!(last.text, "");
        assert_eq!(
            last.media,
            Some(Media::Video("https://youtu.be/v-xzJb9eQIg".to_string()))
        );
    }

    #[test]
    fn timing_defaults_apply() {
        let source = format!("title = \"t\"\n{}\n[[page]]\ntext = \"only\"\n", ASSETS);
        let config = CardConfig::from_toml_str(&source).unwrap();
        assert_eq!(config.timing.flip_ms, 500);
        assert_eq!(config.timing.transition_ms, 1000);
        assert_eq!(config.hint, "");
    }

    #[test]
    fn no_pages_is_an_error() {
        let source = format!("title = \"t\"\n{}", ASSETS);
        assert!(matches!(
            CardConfig::from_toml_str(&source),
            Err(CardError::EmptyDeck)
        ));
    }

    #[test]
    fn page_with_both_media_reports_index() {
        let source = format!(
            "title = \"t\"\n{}\n[[page]]\ntext = \"a\"\n\n[[page]]\nimage = \"/x.png\"\nvideo = \"https://youtu.be/v-xzJb9eQIg\"\n",
            ASSETS
        );
        match CardConfig::from_toml_str(&source) {
            Err(CardError::InvalidPage { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidPage, got {:?}", other),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            CardConfig::from_toml_str("title = [unclosed"),
            Err(CardError::ConfigParse(_))
        ));
    }
}
