//! Mute Toggle Button
//!
//! Round button pinned to the top-right corner. Shows a crossed-out speaker
//! while the background track is muted and a speaker with a sound wave
//! while it plays.

use dioxus::prelude::*;

/// Which speaker icon to draw
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MuteIcon {
    /// Speaker with an X
    Muted,
    /// Speaker with a sound wave
    Playing,
}

impl MuteIcon {
    pub fn for_state(muted: bool) -> Self {
        if muted {
            MuteIcon::Muted
        } else {
            MuteIcon::Playing
        }
    }

    /// Label describing what a click will do
    pub fn aria_label(&self) -> &'static str {
        match self {
            MuteIcon::Muted => "Activar sonido",
            MuteIcon::Playing => "Silenciar sonido",
        }
    }
}

/// Properties for the MuteButton component
#[derive(Clone, PartialEq, Props)]
pub struct MuteButtonProps {
    /// Whether the background track is currently muted
    pub muted: bool,
    /// Click handler
    pub onclick: EventHandler<()>,
}

/// Background audio toggle
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MuteButton {
///         muted: card.read().is_muted(),
///         onclick: move |_| dispatch(CardEvent::MuteToggled),
///     }
/// }
/// ```
#[component]
pub fn MuteButton(props: MuteButtonProps) -> Element {
    let icon = MuteIcon::for_state(props.muted);

    rsx! {
        button {
            class: "mute-btn",
            r#type: "button",
            "aria-label": icon.aria_label(),
            "aria-pressed": if props.muted { "true" } else { "false" },
            onclick: move |evt| {
                // Keep the click from reaching the content area underneath
                evt.stop_propagation();
                props.onclick.call(());
            },
            {match icon {
                MuteIcon::Muted => rsx! {
                    svg {
                        class: "mute-icon",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M11 5L6 9H3v6h3l5 4V5z" }
                        line { x1: "19", y1: "9", x2: "23", y2: "13" }
                        line { x1: "23", y1: "9", x2: "19", y2: "13" }
                    }
                },
                MuteIcon::Playing => rsx! {
                    svg {
                        class: "mute-icon",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M11 5l-5 5H3v4h3l5 4V5z" }
                        path { d: "M19.07 4.93a10 10 0 010 14.14" }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_state() {
        assert_eq!(MuteIcon::for_state(true), MuteIcon::Muted);
        assert_eq!(MuteIcon::for_state(false), MuteIcon::Playing);
    }

    #[test]
    fn labels_describe_next_action() {
        assert_eq!(MuteIcon::Muted.aria_label(), "Activar sonido");
        assert_eq!(MuteIcon::Playing.aria_label(), "Silenciar sonido");
    }
}
