use folio_core::VolumeStore;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Volume persisted in `localStorage`. Storage that is unavailable (private
/// mode, sandboxed frames) behaves like an empty store.
pub struct LocalStorageVolume {
    key: &'static str,
}

impl LocalStorageVolume {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web::Storage> {
        web::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl VolumeStore for LocalStorageVolume {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(self.key).ok().flatten())
    }

    fn save(&mut self, value: &str) {
        match Self::storage() {
            Some(s) => {
                if let Err(e) = s.set_item(self.key, value) {
                    log::debug!("[audio] volume not persisted: {:?}", e);
                }
            }
            None => log::debug!("[audio] no localStorage; volume not persisted"),
        }
    }
}

/// Create the single music element. It is never attached to the document.
pub fn create_music_element() -> Option<web::HtmlAudioElement> {
    match web::HtmlAudioElement::new() {
        Ok(a) => {
            a.set_preload("auto");
            Some(a)
        }
        Err(e) => {
            log::error!("[audio] HtmlAudioElement error: {:?}", e);
            None
        }
    }
}

/// Start playback and report whether the browser accepted it. A synchronous
/// failure is reported the same way as a rejected promise.
pub fn request_play(audio: &web::HtmlMediaElement, on_result: impl FnOnce(bool) + 'static) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => on_result(true),
                Err(e) => {
                    log::debug!("[audio] play() rejected: {:?}", e);
                    on_result(false);
                }
            }
        }),
        Err(e) => {
            log::debug!("[audio] play() threw: {:?}", e);
            on_result(false);
        }
    }
}
