use crate::core::{Rect, TrailConfig, TrailManager, TrailSurface, MOTION_SETTLE_MS};
use crate::surface::DomTrailSurface;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedTrail = Rc<RefCell<TrailContext>>;

/// A pending callback that is cancelled when replaced or dropped.
#[derive(Default)]
pub struct Debounce {
    pending: Option<Timeout>,
}

impl Debounce {
    pub fn restart(&mut self, millis: u32, callback: impl FnOnce() + 'static) {
        // Dropping the previous Timeout clears it.
        self.pending = Some(Timeout::new(millis, callback));
    }
}

/// Everything the trail handlers share. Built once on page load and kept for
/// the page's lifetime.
pub struct TrailContext {
    pub manager: TrailManager<web::HtmlImageElement>,
    pub surface: DomTrailSurface,
    pub motion: Debounce,
    pub scroll_motion: Debounce,
}

impl TrailContext {
    pub fn new(surface: DomTrailSurface) -> Self {
        Self {
            manager: TrailManager::new(TrailConfig::default()),
            surface,
            motion: Debounce::default(),
            scroll_motion: Debounce::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.surface.bounds()
    }

    pub fn frame(&mut self) {
        let now = js_sys::Date::now();
        let mut rng = rand::thread_rng();
        self.manager.frame(now, &mut self.surface, &mut rng);
    }

    pub fn scroll_frame(&mut self) {
        let now = js_sys::Date::now();
        let mut rng = rand::thread_rng();
        self.manager.scroll_frame(now, &mut self.surface, &mut rng);
    }
}

/// Restart the pointer-move debounce; when it fires the cursor counts as idle.
pub fn restart_motion_timer(ctx: &SharedTrail) {
    let settle = ctx.clone();
    ctx.borrow_mut().motion.restart(MOTION_SETTLE_MS, move || {
        settle.borrow_mut().manager.motion_settled();
    });
}

pub fn restart_scroll_motion_timer(ctx: &SharedTrail) {
    let settle = ctx.clone();
    ctx.borrow_mut().scroll_motion.restart(MOTION_SETTLE_MS, move || {
        settle.borrow_mut().manager.motion_settled();
    });
}

/// One-off frame for a coalesced scroll spawn.
pub fn request_scroll_frame(ctx: &SharedTrail) {
    let ctx = ctx.clone();
    let cb = Closure::once_into_js(move || {
        ctx.borrow_mut().scroll_frame();
    });
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

pub fn start_loop(ctx: SharedTrail) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
