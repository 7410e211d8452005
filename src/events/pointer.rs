use crate::dom;
use crate::frame::{self, SharedTrail};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_pointer_handlers(document: &web::Document, ctx: &SharedTrail) {
    wire_initial_position(document, ctx);
    wire_pointermove(document, ctx);
}

/// The first pointerover anywhere in the document seeds the cursor position.
fn wire_initial_position(document: &web::Document, ctx: &SharedTrail) {
    let ctx = ctx.clone();
    let closure = Closure::once_into_js(move |ev: web::PointerEvent| {
        let mut c = ctx.borrow_mut();
        let bounds = c.bounds();
        if c.manager.seed_initial(client_pos(&ev), bounds) {
            log::debug!(
                "[trail] initial pointer at ({}, {}) inside={}",
                ev.client_x(),
                ev.client_y(),
                c.manager.pointer().in_container
            );
        }
    });

    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "pointerover",
        closure.unchecked_ref(),
        &opts,
    );
}

fn wire_pointermove(document: &web::Document, ctx: &SharedTrail) {
    let ctx = ctx.clone();
    dom::add_listener(document, "pointermove", move |ev: web::PointerEvent| {
        let inside = {
            let mut c = ctx.borrow_mut();
            let bounds = c.bounds();
            c.manager.pointer_moved(client_pos(&ev), bounds)
        };
        if inside {
            frame::restart_motion_timer(&ctx);
        }
    });
}
