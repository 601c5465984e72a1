use crate::constants::*;
use crate::dom::{self, EventListener, Listeners};
use crate::frame::Interval;
use folio_core::{MascotGuide, MascotState, MASCOT_HINT};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

struct MascotDom {
    root: web::Element,
    bubble: Option<web::Element>,
    text: Option<web::Element>,
    hint: Option<web::Element>,
}

struct MascotShared {
    guide: RefCell<MascotGuide>,
    dom: MascotDom,
}

/// Guide character pinned to the viewport. Driven by its own UI clock plus
/// scroll and section notifications.
pub struct MascotView {
    shared: Rc<MascotShared>,
    _clock: Option<Interval>,
    _listeners: Listeners,
}

impl MascotView {
    pub fn mount(document: &web::Document, guide: MascotGuide) -> Option<Self> {
        let Some(root) = dom::by_id(document, MASCOT_ID) else {
            log::warn!("[mascot] #{} missing; guide disabled", MASCOT_ID);
            return None;
        };
        let shared = Rc::new(MascotShared {
            guide: RefCell::new(guide),
            dom: MascotDom {
                root,
                bubble: dom::by_id(document, MASCOT_BUBBLE_ID),
                text: dom::by_id(document, MASCOT_TEXT_ID),
                hint: dom::by_id(document, MASCOT_HINT_ID),
            },
        });

        let ticking = shared.clone();
        let clock = Interval::start(UI_TICK_MS, move |dt: Duration| {
            let changed = ticking.guide.borrow_mut().tick(dt);
            if changed {
                render(&ticking);
            }
        });

        let mut listeners = Listeners::default();
        if let Some(window) = web::window() {
            let scrolled = shared.clone();
            listeners.push(EventListener::passive(&window, "scroll", move |_| {
                let y = web::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                if scrolled.guide.borrow_mut().on_scroll(y) {
                    render(&scrolled);
                }
            }));
        }
        let click_target =
            dom::by_id(document, MASCOT_IMAGE_ID).unwrap_or_else(|| shared.dom.root.clone());
        let clicked = shared.clone();
        listeners.push(EventListener::new(&click_target, "click", move |_| {
            clicked.guide.borrow_mut().on_click();
            render(&clicked);
        }));

        render(&shared);
        Some(Self {
            shared,
            _clock: clock,
            _listeners: listeners,
        })
    }

    /// Section sink for the scroll view that does not keep the view alive.
    pub fn section_sink(&self) -> impl Fn(usize) + 'static {
        let weak = Rc::downgrade(&self.shared);
        move |section| {
            if let Some(shared) = weak.upgrade() {
                if shared.guide.borrow_mut().on_section_change(section) {
                    log::debug!("[mascot] bubble opened for section {}", section);
                }
                render(&shared);
            }
        }
    }
}

fn render(shared: &MascotShared) {
    let guide = shared.guide.borrow();
    let dom = &shared.dom;
    let state = guide.state();
    dom::set_class(&dom.root, VISIBLE_CLASS, state != MascotState::Hidden);
    for (property, value) in guide.anchor().style_properties() {
        match value {
            Some(value) => dom::set_style(&dom.root, property, &value),
            None => dom::clear_style(&dom.root, property),
        }
    }
    let speaking = state == MascotState::VisibleSpeaking;
    if let Some(bubble) = &dom.bubble {
        dom::set_class(bubble, OPEN_CLASS, speaking);
    }
    if let Some(text) = &dom.text {
        dom::set_text(text, guide.message());
    }
    if let Some(hint) = &dom.hint {
        dom::set_text(hint, MASCOT_HINT);
        dom::set_class(hint, HIDDEN_CLASS, speaking || !guide.show_hint());
    }
}
