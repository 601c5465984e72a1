use folio_core::LoopHandle;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// requestAnimationFrame loop. The callback receives the time since the
/// previous frame. Dropping the handle cancels the pending frame.
///
/// Must not be dropped from inside its own callback.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut(Duration) + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            callback: RefCell::new(None),
            handle: Cell::new(None),
            running: Cell::new(true),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        let mut last_instant = Instant::now();
        *inner.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.running.get() {
                return;
            }
            let now = Instant::now();
            let dt = now - last_instant;
            last_instant = now;
            frame(dt);
            if inner.running.get() {
                inner.request();
            }
        }) as Box<dyn FnMut()>));
        inner.request();
        Self { inner }
    }
}

impl LoopHandle for AnimationLoop {
    fn stop(&mut self) {
        self.inner.running.set(false);
        if let Some(h) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(h);
            }
        }
    }
}

impl LoopInner {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(h) => self.handle.set(Some(h)),
                Err(e) => {
                    log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                    self.running.set(false);
                }
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.callback.borrow_mut().take();
    }
}

/// setInterval clock handing out measured deltas. Cleared on drop.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: i32, mut tick: impl FnMut(Duration) + 'static) -> Option<Self> {
        let window = web::window()?;
        let mut last_instant = Instant::now();
        let callback = Closure::wrap(Box::new(move || {
            let now = Instant::now();
            let dt = now - last_instant;
            last_instant = now;
            tick(dt);
        }) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(handle) => Some(Self {
                handle,
                _callback: callback,
            }),
            Err(e) => {
                log::warn!("[frame] setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}
