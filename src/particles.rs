use crate::dom::{self, EventListener};
use crate::frame::AnimationLoop;
use crate::render;
use folio_core::{LoopSlot, ParticleField, Theme, ThemeStore, ThemeSubscription};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

struct LayerState {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
    field: RefCell<ParticleField>,
    animation: RefCell<LoopSlot<AnimationLoop>>,
}

/// Full-viewport canvas of falling particles. Re-mounted on every theme
/// change; the previous loop is cancelled before the new one starts.
pub struct ParticleLayer {
    state: Rc<LayerState>,
    _subscription: ThemeSubscription,
    _resize: Option<EventListener>,
}

impl ParticleLayer {
    /// Returns `None` when the canvas has no 2D context; the page still works
    /// without the decoration.
    pub fn mount(canvas: web::HtmlCanvasElement, themes: &ThemeStore) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
            _ => {
                log::warn!("[particles] 2d context unavailable; layer disabled");
                return None;
            }
        };
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let state = Rc::new(LayerState {
            ctx,
            canvas,
            field: RefCell::new(ParticleField::new(themes.get(), w, h, dom::random_seed())),
            animation: RefCell::new(LoopSlot::new()),
        });
        start_animation(&state);

        let on_theme = state.clone();
        let subscription = themes.subscribe(move |theme| remount(&on_theme, theme));

        let resize = web::window().and_then(|window| {
            let weak = Rc::downgrade(&state);
            EventListener::new(&window, "resize", move |_| on_resize(&weak))
        });

        log::info!(
            "[particles] mounted {} particles",
            state.field.borrow().particles().len()
        );
        Some(Self {
            state,
            _subscription: subscription,
            _resize: resize,
        })
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.state.animation.borrow_mut().stop();
    }
}

/// Stops the running loop, if any, before starting a fresh one.
fn start_animation(state: &Rc<LayerState>) {
    let weak: Weak<LayerState> = Rc::downgrade(state);
    state.animation.borrow_mut().replace(|| {
        AnimationLoop::start(move |_dt| {
            if let Some(state) = weak.upgrade() {
                let mut field = state.field.borrow_mut();
                field.step();
                render::draw_particles(&state.ctx, &field);
            }
        })
    });
}

fn remount(state: &Rc<LayerState>, theme: Theme) {
    state.animation.borrow_mut().stop();
    state.field.borrow_mut().reseed(theme);
    start_animation(state);
    log::info!("[particles] remounted for {} theme", theme.name());
}

fn on_resize(state: &Weak<LayerState>) {
    if let Some(state) = state.upgrade() {
        let (w, h) = dom::sync_canvas_to_viewport(&state.canvas);
        state.field.borrow_mut().resize(w, h);
    }
}
