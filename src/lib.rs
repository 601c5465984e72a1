#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use folio_core::{LoaderMode, MascotGuide, SectionChange, SiteConfig, ThemeStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod frame;
mod loader;
mod mascot;
mod overlay;
mod particles;
mod player;
mod render;
mod scroll;
mod sound;
mod theme;
mod ui;

use constants::*;
use loader::LoaderView;
use mascot::MascotView;
use particles::ParticleLayer;
use player::MusicPlayerView;
use scroll::ScrollView;
use sound::{SharedSounds, SoundBoard};
use theme::ThemeView;

/// Everything the page keeps alive. Dropping it detaches every listener and
/// cancels every loop and clock.
struct App {
    _themes: ThemeStore,
    _theme_view: ThemeView,
    _sounds: SharedSounds,
    _sound_listeners: dom::Listeners,
    _particles: Option<ParticleLayer>,
    _mascot: Option<MascotView>,
    _scroll: ScrollView,
    _player: Option<MusicPlayerView>,
    _loader: Rc<LoaderView>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Tear the page runtime down. Safe to call more than once.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("folio-web stopped");
    }
}

fn site_config(document: &web::Document) -> SiteConfig {
    let mut config = SiteConfig::default();
    let attr = dom::by_id(document, APP_ROOT_ID).and_then(|el| el.get_attribute(LOADER_MODE_ATTR));
    if let Some(value) = attr {
        match LoaderMode::parse(&value) {
            Some(mode) => config.loader_mode = mode,
            None => log::warn!(
                "[loader] unknown {} value {:?}; using timer",
                LOADER_MODE_ATTR,
                value
            ),
        }
    }
    config
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let config = site_config(&document);
    config.validate()?;
    let playlist = config.playlist()?;

    let themes = ThemeStore::default();
    let sounds = SoundBoard::shared();
    let theme_view = ThemeView::mount(&document, &config.sections, &themes, &sounds);
    let sound_listeners = sound::wire_sound_attributes(&document, &sounds);

    let particles = match dom::by_id_as::<web::HtmlCanvasElement>(&document, PARTICLE_CANVAS_ID) {
        Some(canvas) => ParticleLayer::mount(canvas, &themes),
        None => {
            log::warn!("[particles] #{} missing; layer disabled", PARTICLE_CANVAS_ID);
            None
        }
    };

    let mascot = MascotView::mount(
        &document,
        MascotGuide::new(config.mascot_delay, config.mascot_message),
    );
    let section_sink = mascot.as_ref().map(|m| m.section_sink());

    // Scroll samples are ignored until the loader lets the page through.
    let ready = Rc::new(Cell::new(false));
    let on_change = move |change: SectionChange| {
        if let Some(sink) = &section_sink {
            sink(change.to);
        }
    };
    let scroll = ScrollView::mount(&document, &config, ready.clone(), on_change);

    let player = MusicPlayerView::mount(&document, playlist);

    let refresh_scroll = scroll.refresher();
    let app_root = dom::by_id(&document, APP_ROOT_ID);
    let loader = LoaderView::mount(&document, &config, move || {
        ready.set(true);
        if let Some(root) = &app_root {
            dom::set_class(root, READY_CLASS, true);
        }
        refresh_scroll();
        log::info!("[loader] page revealed");
    });

    Ok(App {
        _themes: themes,
        _theme_view: theme_view,
        _sounds: sounds,
        _sound_listeners: sound_listeners,
        _particles: particles,
        _mascot: mascot,
        _scroll: scroll,
        _player: player,
        _loader: loader,
    })
}
