//! Paged content drawn on top of the final card.
//!
//! Each page shows its text, then its image or video. Pages without a video
//! get the "click to continue" hint; a click anywhere on the card advances.

use dioxus::prelude::*;
use valentine_core::Page;
use valentine_ui::VideoFrame;

#[component]
pub fn ContentView(
    /// Final card background image path
    background: String,
    /// Page on display
    page: Page,
    /// Caption under pages without a video
    hint: String,
    onadvance: EventHandler<()>,
) -> Element {
    let view = page.view(&hint);

    rsx! {
        div { class: "card-final",
            img {
                class: "card-final__background",
                src: "{background}",
                alt: "Carta final",
            }

            div {
                class: "card-content",
                onclick: move |_| onadvance.call(()),

                p { class: "page-text", "{view.text}" }

                if let Some(image) = view.image {
                    img {
                        class: "page-image",
                        src: "{image}",
                        alt: "Imagen de la tarjeta",
                    }
                }

                if let Some(src) = view.embed_url.clone() {
                    VideoFrame { src: src, title: "YouTube video".to_string() }
                }

                if let Some(hint) = view.hint {
                    p { class: "page-hint", "{hint}" }
                }
            }
        }
    }
}
