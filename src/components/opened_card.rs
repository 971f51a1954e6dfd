use dioxus::prelude::*;

/// The opened card, waiting for a click to start the transition.
#[component]
pub fn OpenedCard(src: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        img {
            class: "card-image card-opened",
            src: "{src}",
            alt: "Carta abierta",
            onclick: move |_| onclick.call(()),
        }
    }
}
