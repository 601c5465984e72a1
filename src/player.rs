use crate::audio::{self, LocalStorageVolume};
use crate::constants::*;
use crate::dom::{self, EventListener, Listeners};
use crate::ui;
use folio_core::constants::VOLUME_STORAGE_KEY;
use folio_core::{format_volume, MusicPlayer, Playlist, PlayerEffect, PlayerEffects, VolumeStore};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

struct PlayerDom {
    widget: Option<web::Element>,
    title: Option<web::Element>,
    play: Option<web::Element>,
    mute: Option<web::Element>,
    volume: Option<web::HtmlInputElement>,
    toggle: Option<web::Element>,
}

struct PlayerShared {
    core: RefCell<MusicPlayer>,
    audio: web::HtmlAudioElement,
    store: RefCell<LocalStorageVolume>,
    dom: PlayerDom,
}

/// Background music widget bound to one audio element.
pub struct MusicPlayerView {
    shared: Rc<PlayerShared>,
    _listeners: Listeners,
}

impl MusicPlayerView {
    pub fn mount(document: &web::Document, playlist: Playlist) -> Option<Self> {
        let audio = audio::create_music_element()?;
        let store = LocalStorageVolume::new(VOLUME_STORAGE_KEY);
        let core = MusicPlayer::with_store(playlist, &store);
        log::info!(
            "[player] {} tracks, volume {}",
            core.playlist().len(),
            core.state().volume
        );
        let shared = Rc::new(PlayerShared {
            core: RefCell::new(core),
            audio,
            store: RefCell::new(store),
            dom: PlayerDom {
                widget: dom::by_id(document, PLAYER_WIDGET_ID),
                title: dom::by_id(document, PLAYER_TITLE_ID),
                play: dom::by_id(document, PLAYER_PLAY_ID),
                mute: dom::by_id(document, PLAYER_MUTE_ID),
                volume: dom::by_id_as::<web::HtmlInputElement>(document, PLAYER_VOLUME_ID),
                toggle: dom::by_id(document, PLAYER_TOGGLE_ID),
            },
        });

        let startup = shared.core.borrow().startup();
        apply(&shared, startup);

        let mut listeners = Listeners::default();
        let ended = shared.clone();
        listeners.push(EventListener::new(&shared.audio, "ended", move |_| {
            let fx = ended.core.borrow_mut().track_ended();
            apply(&ended, fx);
        }));

        listeners.push(on_click(document, PLAYER_PLAY_ID, &shared, |p| p.toggle_play()));
        listeners.push(on_click(document, PLAYER_NEXT_ID, &shared, |p| p.skip_next()));
        listeners.push(on_click(document, PLAYER_MUTE_ID, &shared, |p| p.toggle_mute()));
        listeners.push(on_click(document, PLAYER_TOGGLE_ID, &shared, |p| {
            let open = p.toggle_open();
            log::debug!("[player] widget {}", if open { "open" } else { "closed" });
            PlayerEffects::new()
        }));

        if let Some(slider) = &shared.dom.volume {
            let sliding = shared.clone();
            listeners.push(EventListener::new(slider, "input", move |ev| {
                let value = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
                    .map(|input| input.value());
                if let Some(v) = value.as_deref().and_then(ui::parse_slider) {
                    let fx = sliding.core.borrow_mut().set_volume(v);
                    apply(&sliding, fx);
                }
            }));
        }

        if let Some(window) = web::window() {
            for event in GESTURE_EVENTS {
                let gesture = shared.clone();
                let listener = if event == "touchstart" {
                    EventListener::passive(&window, event, move |_| on_gesture(&gesture))
                } else {
                    EventListener::new(&window, event, move |_| on_gesture(&gesture))
                };
                listeners.push(listener);
            }
        }

        render(&shared);
        Some(Self {
            shared,
            _listeners: listeners,
        })
    }
}

impl Drop for MusicPlayerView {
    fn drop(&mut self) {
        _ = self.shared.audio.pause();
    }
}

fn on_click(
    document: &web::Document,
    id: &str,
    shared: &Rc<PlayerShared>,
    action: impl Fn(&mut MusicPlayer) -> PlayerEffects + 'static,
) -> Option<EventListener> {
    let shared = shared.clone();
    dom::add_click_listener(document, id, move || {
        let fx = action(&mut shared.core.borrow_mut());
        apply(&shared, fx);
    })
}

fn on_gesture(shared: &Rc<PlayerShared>) {
    let paused = shared.audio.paused();
    let fx = shared.core.borrow_mut().user_gesture(paused);
    if !fx.is_empty() {
        log::debug!("[player] retrying playback after user gesture");
        apply(shared, fx);
    }
}

fn apply(shared: &Rc<PlayerShared>, effects: PlayerEffects) {
    for effect in effects {
        match effect {
            PlayerEffect::LoadSource(url) => {
                shared.audio.set_src(&url);
                shared.audio.load();
            }
            PlayerEffect::Play => {
                let weak: Weak<PlayerShared> = Rc::downgrade(shared);
                audio::request_play(&shared.audio, move |accepted| {
                    if let Some(shared) = weak.upgrade() {
                        {
                            let mut core = shared.core.borrow_mut();
                            if accepted {
                                core.play_started();
                            } else {
                                core.play_rejected();
                            }
                        }
                        render(&shared);
                    }
                });
            }
            PlayerEffect::Pause => {
                _ = shared.audio.pause();
            }
            PlayerEffect::ApplyVolume(v) => shared.audio.set_volume(v as f64),
            PlayerEffect::PersistVolume(v) => shared.store.borrow_mut().save(&format_volume(v)),
        }
    }
    render(shared);
}

fn render(shared: &PlayerShared) {
    let core = shared.core.borrow();
    let state = core.state();
    let dom = &shared.dom;
    if let Some(widget) = &dom.widget {
        dom::set_class(widget, OPEN_CLASS, state.is_open);
        dom::set_class(widget, PLAYING_CLASS, state.is_playing);
    }
    if let Some(title) = &dom.title {
        dom::set_text(title, &core.current_title());
    }
    if let Some(play) = &dom.play {
        _ = play.set_attribute("title", ui::play_button_title(state.is_playing));
        _ = play.set_attribute("aria-pressed", if state.is_playing { "true" } else { "false" });
    }
    if let Some(mute) = &dom.mute {
        dom::set_class(mute, MUTED_CLASS, core.shows_muted());
    }
    if let Some(slider) = &dom.volume {
        slider.set_value(&state.volume.to_string());
    }
    if let Some(toggle) = &dom.toggle {
        _ = toggle.set_attribute("title", ui::player_toggle_title(state.is_open));
    }
}
