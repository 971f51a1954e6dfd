//! Background audio backed by the page's `<audio>` element.
//!
//! `play()` on a media element is asynchronous and may be rejected (autoplay
//! policy, missing file). The request is fired off and a rejection is only
//! logged; it never feeds back into the card state.
//!
//! The element is rendered without `autoplay`: Dioxus sets `muted` as a
//! content attribute only, so the track must start from an explicit `play()`.

use dioxus::prelude::*;
use valentine_core::{AudioSink, CardError, CardResult};

/// DOM id of the background `<audio>` element rendered by `App`.
pub const AUDIO_ELEMENT_ID: &str = "background-audio";

/// Audio sink driving the background `<audio>` element.
pub struct DomAudio;

impl AudioSink for DomAudio {
    fn play(&mut self) -> CardResult<()> {
        spawn(async move {
            if let Err(e) = play_element().await {
                tracing::error!("Error playing background audio: {}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        spawn(async move {
            if let Err(e) = pause_element().await {
                tracing::warn!("Could not pause background audio: {}", e);
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn audio_element() -> CardResult<web_sys::HtmlAudioElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(AUDIO_ELEMENT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlAudioElement>().ok())
        .ok_or_else(|| CardError::Playback(format!("no <audio id=\"{}\">", AUDIO_ELEMENT_ID)))
}

#[cfg(target_arch = "wasm32")]
async fn play_element() -> CardResult<()> {
    let audio = audio_element()?;
    audio.set_muted(false);
    let promise = audio
        .play()
        .map_err(|e| CardError::Playback(format!("{:?}", e)))?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| CardError::Playback(format!("{:?}", e)))?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn pause_element() -> CardResult<()> {
    audio_element()?
        .pause()
        .map_err(|e| CardError::Playback(format!("{:?}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
async fn play_element() -> CardResult<()> {
    let script = format!(
        r#"const audio = document.getElementById("{id}");
if (!audio) {{ throw new Error("no audio element"); }}
audio.muted = false;
await audio.play();
return true;"#,
        id = AUDIO_ELEMENT_ID
    );
    document::eval(&script)
        .await
        .map(|_| ())
        .map_err(|e| CardError::Playback(format!("{:?}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
async fn pause_element() -> CardResult<()> {
    let script = format!(
        r#"const audio = document.getElementById("{id}");
if (!audio) {{ throw new Error("no audio element"); }}
audio.pause();
return true;"#,
        id = AUDIO_ELEMENT_ID
    );
    document::eval(&script)
        .await
        .map(|_| ())
        .map_err(|e| CardError::Playback(format!("{:?}", e)))
}
