use crate::constants::*;
use crate::dom::{self, EventListener, Listeners};
use crate::frame::Interval;
use crate::overlay;
use crate::ui;
use folio_core::{LoaderEvent, LoaderEvents, LoaderMode, LoadingSequencer, SiteConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct LoaderShared {
    seq: RefCell<LoadingSequencer>,
    overlay: Option<web::Element>,
    bar: Option<web::Element>,
    label: Option<web::Element>,
    on_ready: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Intro overlay gating the page. Calls `on_ready` exactly once.
pub struct LoaderView {
    shared: Rc<LoaderShared>,
    clock: RefCell<Option<Interval>>,
    _listeners: Listeners,
}

impl LoaderView {
    pub fn mount(
        document: &web::Document,
        config: &SiteConfig,
        on_ready: impl FnOnce() + 'static,
    ) -> Rc<Self> {
        let video = match config.loader_mode {
            LoaderMode::Video => dom::by_id_as::<web::HtmlVideoElement>(document, INTRO_VIDEO_ID),
            _ => None,
        };
        let assets = match config.loader_mode {
            LoaderMode::Assets => config.preload_assets(),
            _ => Vec::new(),
        };
        let condition = config.ready_condition(assets.len());
        let seq = LoadingSequencer::new(condition, config.loader_fallback, dom::random_seed());
        log::info!("[loader] mode {:?}, condition {:?}", config.loader_mode, condition);

        let overlay_el = dom::by_id(document, LOADER_ID);
        if let Some(el) = &overlay_el {
            overlay::show(el);
        }
        let shared = Rc::new(LoaderShared {
            seq: RefCell::new(seq),
            overlay: overlay_el,
            bar: dom::by_id(document, LOADER_BAR_ID),
            label: dom::by_id(document, LOADER_LABEL_ID),
            on_ready: RefCell::new(Some(Box::new(on_ready))),
        });

        let mut listeners = Listeners::default();
        for path in assets {
            preload_image(path, &shared, &mut listeners);
        }
        if config.loader_mode == LoaderMode::Video {
            match &video {
                Some(video) => wire_video(video, &shared, &mut listeners),
                None => {
                    log::warn!("[loader] #{} missing; skipping intro clip", INTRO_VIDEO_ID);
                    let events = shared.seq.borrow_mut().clip_ended();
                    handle(&shared, events);
                }
            }
        }
        let skipping = Rc::downgrade(&shared);
        listeners.push(dom::add_click_listener(document, LOADER_SKIP_ID, move || {
            if let Some(shared) = skipping.upgrade() {
                let events = shared.seq.borrow_mut().skip();
                handle(&shared, events);
            }
        }));

        let view = Rc::new(Self {
            shared,
            clock: RefCell::new(None),
            _listeners: listeners,
        });
        render(&view.shared);
        if !view.shared.seq.borrow().is_ready() {
            let weak: Weak<LoaderView> = Rc::downgrade(&view);
            let clock = Interval::start(LOADER_TICK_MS, move |dt: Duration| {
                let Some(view) = weak.upgrade() else {
                    return;
                };
                let events = view.shared.seq.borrow_mut().tick(dt);
                handle(&view.shared, events);
                if view.is_ready() {
                    // The interval cannot be cleared from inside its own callback.
                    spawn_local(async move {
                        view.clock.borrow_mut().take();
                    });
                }
            });
            *view.clock.borrow_mut() = clock;
        }
        view
    }

    pub fn is_ready(&self) -> bool {
        self.shared.seq.borrow().is_ready()
    }
}

fn preload_image(path: &str, shared: &Rc<LoaderShared>, listeners: &mut Listeners) {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::debug!("[loader] cannot create image for {}: {:?}", path, e);
            let events = shared.seq.borrow_mut().asset_settled(false);
            handle(shared, events);
            return;
        }
    };
    for (event, loaded) in [("load", true), ("error", false)] {
        let weak = Rc::downgrade(shared);
        listeners.push(EventListener::new(&img, event, move |_| {
            if let Some(shared) = weak.upgrade() {
                let events = shared.seq.borrow_mut().asset_settled(loaded);
                handle(&shared, events);
            }
        }));
    }
    img.set_src(path);
}

fn wire_video(video: &web::HtmlVideoElement, shared: &Rc<LoaderShared>, listeners: &mut Listeners) {
    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new(video, "timeupdate", move |ev| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Some(media) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlMediaElement>().ok())
        else {
            return;
        };
        let duration = media.duration();
        if duration > 0.0 {
            shared.seq.borrow_mut().clip_progress(media.current_time() / duration);
            render(&shared);
        }
    }));
    for event in ["ended", "error"] {
        let weak = Rc::downgrade(shared);
        listeners.push(EventListener::new(video, event, move |_| {
            if let Some(shared) = weak.upgrade() {
                let events = shared.seq.borrow_mut().clip_ended();
                handle(&shared, events);
            }
        }));
    }
    video.set_muted(true);
    let weak = Rc::downgrade(shared);
    crate::audio::request_play(video, move |accepted| {
        if !accepted {
            // A refused intro clip is not worth waiting for.
            if let Some(shared) = weak.upgrade() {
                log::debug!("[loader] intro clip refused to play");
                let events = shared.seq.borrow_mut().clip_ended();
                handle(&shared, events);
            }
        }
    });
}

fn handle(shared: &LoaderShared, events: LoaderEvents) {
    for event in events {
        match event {
            LoaderEvent::Exiting => {
                if let Some(el) = &shared.overlay {
                    overlay::begin_exit(el);
                }
            }
            LoaderEvent::Ready => {
                if let Some(el) = &shared.overlay {
                    overlay::hide(el);
                }
                let on_ready = shared.on_ready.borrow_mut().take();
                if let Some(f) = on_ready {
                    f();
                }
            }
        }
    }
    render(shared);
}

fn render(shared: &LoaderShared) {
    let seq = shared.seq.borrow();
    if let Some(bar) = &shared.bar {
        dom::set_style(bar, "width", &ui::percent_css(seq.progress() as f64));
    }
    if let Some(label) = &shared.label {
        dom::set_text(label, &seq.percent_label());
    }
}
