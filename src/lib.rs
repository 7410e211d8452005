#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod bouquet_view;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod surface;

use crate::constants::{DRAGGABLE_FLOWER_SELECTOR, FLOWER_ATTR, TRAIL_CONTAINER_SELECTOR};
use crate::core::{Bouquet, BOUQUET_REQUIRED};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bloom-trail starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };

    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", move |_ev: web::Event| init());
    } else {
        init();
    }
    Ok(())
}

// The two components share nothing; one failing to wire leaves the other running.
fn init() {
    if let Err(e) = init_trail() {
        log::error!("trail init error: {:?}", e);
    }
    if let Err(e) = init_bouquet() {
        log::error!("bouquet init error: {:?}", e);
    }
}

fn init_trail() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::document()?;
    let container = dom::query_html(&document, TRAIL_CONTAINER_SELECTOR)
        .context("trail container")?;

    let ctx: frame::SharedTrail = Rc::new(RefCell::new(frame::TrailContext::new(
        surface::DomTrailSurface::new(document.clone(), container),
    )));

    events::wire_pointer_handlers(&document, &ctx);
    events::wire_scroll_handlers(&window, &ctx);
    frame::start_loop(ctx);

    log::info!("[trail] wired");
    Ok(())
}

fn init_bouquet() -> anyhow::Result<()> {
    let document = dom::document()?;
    let view = bouquet_view::BouquetView::locate(&document).context("bouquet elements")?;
    bouquet_view::enable_wrap_up(&document);

    let tokens = dom::query_all_html(&document, DRAGGABLE_FLOWER_SELECTOR);
    let ids: Vec<String> = tokens
        .iter()
        .filter_map(|t| t.get_attribute(FLOWER_ATTR))
        .collect();
    if ids.len() < BOUQUET_REQUIRED {
        log::warn!(
            "[bouquet] only {} draggable flowers on the page, {} needed to finish",
            ids.len(),
            BOUQUET_REQUIRED
        );
    }

    let bouquet = Rc::new(RefCell::new(Bouquet::new(ids, BOUQUET_REQUIRED)));
    events::wire_bouquet_handlers(events::BouquetWiring {
        bouquet,
        view,
        tokens,
    });

    log::info!("[bouquet] wired");
    Ok(())
}
