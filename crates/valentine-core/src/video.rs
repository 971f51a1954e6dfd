//! Video link handling.
//!
//! Pages can carry a link to a hosted video. To show it inline the link has
//! to be turned into the embeddable form `https://www.youtube.com/embed/<id>`.
//! Links we cannot make sense of are passed through untouched.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix of every embeddable video URL.
pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Matches watch links (`watch?v=`), short links (`youtu.be/`), `/v/`, `/e/`
/// and `/embed/` links, capturing the 11-character video id.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://(?:www\.)?youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .expect("video id pattern is valid")
});

/// Extract the video id from a link, if it has a recognizable shape.
pub fn video_id(link: &str) -> Option<&str> {
    VIDEO_ID
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Convert a video link to its embeddable URL.
///
/// Falls back to the link itself when no id can be found.
pub fn embed_url(link: &str) -> String {
    match video_id(link) {
        Some(id) => format!("{}{}", EMBED_BASE, id),
        None => {
            tracing::debug!(link, "No video id found, embedding link as-is");
            link.to_string()
        }
    }
}
