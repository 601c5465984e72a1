use crate::constants::{
    SOUND_CLICK_ATTR, SOUND_CLICK_SELECTOR, SOUND_HOVER_ATTR, SOUND_HOVER_SELECTOR,
};
use crate::dom::{self, EventListener, Listeners};
use crate::ui;
use fnv::FnvHashMap;
use folio_core::{SoundCue, SoundRequest, SoundTrigger, CLICK, HOVER};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fire-and-forget UI sounds, one cached audio element per file.
#[derive(Default)]
pub struct SoundBoard {
    trigger: SoundTrigger,
    cache: FnvHashMap<String, web::HtmlAudioElement>,
}

pub type SharedSounds = Rc<RefCell<SoundBoard>>;

impl SoundBoard {
    pub fn shared() -> SharedSounds {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn play(&mut self, name: &str, volume: f32) {
        if let Some(req) = self.trigger.request(name, volume) {
            self.emit(req);
        }
    }

    pub fn cue(&mut self, cue: SoundCue) {
        if let Some(req) = self.trigger.cue(cue) {
            self.emit(req);
        }
    }

    pub fn toggle(&mut self) -> bool {
        let enabled = self.trigger.toggle();
        log::info!("[sound] {}", if enabled { "enabled" } else { "muted" });
        enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.trigger.is_enabled()
    }

    fn emit(&mut self, req: SoundRequest) {
        let audio = match self.cache.get(&req.name) {
            Some(a) => a.clone(),
            None => match web::HtmlAudioElement::new_with_src(&req.path) {
                Ok(a) => {
                    self.cache.insert(req.name.clone(), a.clone());
                    a
                }
                Err(e) => {
                    log::debug!("[sound] cannot create audio for {}: {:?}", req.path, e);
                    return;
                }
            },
        };
        audio.set_volume(req.volume as f64);
        audio.set_current_time(0.0);
        // Autoplay refusals and missing files are not worth surfacing.
        if let Ok(promise) = audio.play() {
            spawn_local(async move {
                _ = JsFuture::from(promise).await;
            });
        }
    }
}

/// Wire `data-sound-hover` / `data-sound-click` elements. The attribute value
/// may carry a volume; otherwise the standard cue volume applies.
pub fn wire_sound_attributes(document: &web::Document, sounds: &SharedSounds) -> Listeners {
    let mut listeners = Listeners::default();
    for el in dom::query_all(document, SOUND_HOVER_SELECTOR) {
        let volume = ui::cue_volume(el.get_attribute(SOUND_HOVER_ATTR).as_deref(), HOVER.volume);
        let sounds = sounds.clone();
        listeners.push(EventListener::new(&el, "mouseenter", move |_| {
            sounds.borrow_mut().play(HOVER.name, volume);
        }));
    }
    for el in dom::query_all(document, SOUND_CLICK_SELECTOR) {
        let volume = ui::cue_volume(el.get_attribute(SOUND_CLICK_ATTR).as_deref(), CLICK.volume);
        let sounds = sounds.clone();
        listeners.push(EventListener::new(&el, "click", move |_| {
            sounds.borrow_mut().play(CLICK.name, volume);
        }));
    }
    log::debug!("[sound] wired {} elements", listeners.len());
    listeners
}
