use crate::dom;
use crate::frame::{self, SharedTrail};
use web_sys as web;

pub fn wire_scroll_handlers(window: &web::Window, ctx: &SharedTrail) {
    wire_scroll_motion(window, ctx);
    wire_scroll_spawn(window, ctx);
}

// Scrolling moves the container under a resting cursor, so it counts as motion.
fn wire_scroll_motion(window: &web::Window, ctx: &SharedTrail) {
    let ctx = ctx.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        let inside = {
            let mut c = ctx.borrow_mut();
            let bounds = c.bounds();
            let mut rng = rand::thread_rng();
            c.manager.scroll_moved(bounds, &mut rng)
        };
        if inside {
            frame::restart_scroll_motion_timer(&ctx);
        }
    });
}

fn wire_scroll_spawn(window: &web::Window, ctx: &SharedTrail) {
    let ctx = ctx.clone();
    dom::add_passive_listener(window, "scroll", move |_ev: web::Event| {
        let now = js_sys::Date::now();
        let needs_frame = ctx.borrow_mut().manager.scroll_requested(now);
        if needs_frame {
            frame::request_scroll_frame(&ctx);
        }
    });
}
