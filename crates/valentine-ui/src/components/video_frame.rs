//! Responsive embedded video player.

use dioxus::prelude::*;

/// Features the embedded player may use.
pub const VIDEO_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// 16:9 inline frame for an embeddable video URL.
#[component]
pub fn VideoFrame(
    /// Embeddable URL
    src: String,
    /// Frame title for assistive technology
    #[props(default = "Video".to_string())]
    title: String,
) -> Element {
    rsx! {
        div { class: "video-frame",
            iframe {
                src: "{src}",
                title: "{title}",
                allow: VIDEO_PERMISSIONS,
                allowfullscreen: true,
            }
        }
    }
}
