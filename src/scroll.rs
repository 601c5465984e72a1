use crate::constants::*;
use crate::dom::{self, EventListener, Listeners};
use crate::ui;
use folio_core::{
    ScrollMetrics, SectionChange, SectionInfo, SectionTracker, SectionVisibility, SiteConfig,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct ScrollState {
    sections: Vec<SectionInfo>,
    tracker: RefCell<SectionTracker>,
    ready: Rc<Cell<bool>>,
    on_change: Box<dyn Fn(SectionChange)>,
    indicator: Option<web::Element>,
    fill: Option<web::Element>,
    dots: Vec<web::Element>,
}

/// Scroll progress bar, section dots and section reveal.
///
/// Scroll samples are ignored until `ready` is set by the loader.
pub struct ScrollView {
    state: Rc<ScrollState>,
    _listeners: Listeners,
    _observers: Vec<SectionObserver>,
}

impl ScrollView {
    pub fn mount(
        document: &web::Document,
        config: &SiteConfig,
        ready: Rc<Cell<bool>>,
        on_change: impl Fn(SectionChange) + 'static,
    ) -> Self {
        let state = Rc::new(ScrollState {
            sections: config.sections.clone(),
            tracker: RefCell::new(config.section_tracker()),
            ready,
            on_change: Box::new(on_change),
            indicator: dom::by_id(document, PROGRESS_ID),
            fill: dom::by_id(document, PROGRESS_FILL_ID),
            dots: dom::query_all(document, PROGRESS_DOT_SELECTOR),
        });

        let mut listeners = Listeners::default();
        if let Some(window) = web::window() {
            let on_scroll = state.clone();
            listeners.push(EventListener::passive(&window, "scroll", move |_| {
                sample(&on_scroll)
            }));
        }
        for (i, dot) in state.dots.iter().enumerate() {
            let attr = dot.get_attribute(DOT_INDEX_ATTR);
            let target = ui::parse_section_ref(attr.as_deref(), &state.sections).unwrap_or(i);
            let on_click = state.clone();
            listeners.push(EventListener::new(dot, "click", move |_| {
                if let Some(idx) = on_click.tracker.borrow().target(target) {
                    scroll_to_section(&on_click.sections, idx);
                }
            }));
        }
        for el in dom::query_all(document, SCROLL_TO_SELECTOR) {
            let attr = el.get_attribute(SCROLL_TO_ATTR);
            match ui::parse_section_ref(attr.as_deref(), &state.sections) {
                Some(idx) => {
                    let on_click = state.clone();
                    listeners.push(EventListener::new(&el, "click", move |_| {
                        scroll_to_section(&on_click.sections, idx)
                    }))
                }
                None => log::warn!("[scroll] ignoring unknown scroll target"),
            }
        }

        let visibility = Rc::new(RefCell::new(config.section_visibility()));
        let observers = state
            .sections
            .iter()
            .enumerate()
            .filter_map(|(i, info)| {
                let el = dom::by_id(document, info.element_id)?;
                SectionObserver::observe(&el, i, info.visibility_threshold, visibility.clone())
            })
            .collect::<Vec<_>>();
        log::info!(
            "[scroll] {} dots, {} observed sections",
            state.dots.len(),
            observers.len()
        );

        render(&state);
        Self {
            state,
            _listeners: listeners,
            _observers: observers,
        }
    }

    /// Samples the scroll position outside of a scroll event, e.g. once the
    /// page is revealed. Does not keep the view alive.
    pub fn refresher(&self) -> impl Fn() + 'static {
        let weak = Rc::downgrade(&self.state);
        move || {
            if let Some(state) = weak.upgrade() {
                sample(&state);
            }
        }
    }
}

fn read_metrics() -> Option<ScrollMetrics> {
    let window = web::window()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    Some(ScrollMetrics::new(scroll_y, viewport, document_height))
}

fn sample(state: &ScrollState) {
    if !state.ready.get() {
        return;
    }
    let Some(metrics) = read_metrics() else {
        return;
    };
    let change = state.tracker.borrow_mut().update(&metrics);
    render(state);
    if let Some(change) = change {
        log::debug!("[scroll] section {} -> {}", change.from, change.to);
        (state.on_change)(change);
    }
}

fn render(state: &ScrollState) {
    let view = state.tracker.borrow().view();
    if let Some(fill) = &state.fill {
        dom::set_style(fill, "height", &ui::percent_css(view.percent));
    }
    if let Some(indicator) = &state.indicator {
        dom::set_class(indicator, VISIBLE_CLASS, view.indicator_visible);
    }
    for (i, dot) in state.dots.iter().enumerate() {
        dom::set_class(dot, ACTIVE_CLASS, i == view.current);
        if let Some(info) = state.sections.get(i) {
            let color = if i == view.current {
                info.dot_color
            } else {
                "transparent"
            };
            dom::set_style(dot, "background-color", color);
        }
    }
}

/// Smoothly scroll the section element into view. No-op when it is absent.
fn scroll_to_section(sections: &[SectionInfo], index: usize) {
    let Some(info) = sections.get(index) else {
        return;
    };
    let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(info.element_id))
    else {
        log::debug!("[scroll] #{} not in page", info.element_id);
        return;
    };
    let options = web::ScrollIntoViewOptions::new();
    options.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// IntersectionObserver for one section, toggling its visible class.
/// Disconnected on drop.
struct SectionObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl SectionObserver {
    fn observe(
        el: &web::Element,
        index: usize,
        threshold: f64,
        visibility: Rc<RefCell<SectionVisibility>>,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let visible = entry.is_intersecting();
                    if visibility.borrow_mut().observe(index, visible) {
                        dom::set_class(&entry.target(), VISIBLE_CLASS, visible);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[scroll] IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(el);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
