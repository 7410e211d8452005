use crate::bouquet_view::BouquetView;
use crate::constants::*;
use crate::core::{Bouquet, DropOutcome};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct BouquetWiring {
    pub bouquet: Rc<RefCell<Bouquet>>,
    pub view: BouquetView,
    pub tokens: Vec<web::HtmlElement>,
}

pub fn wire_bouquet_handlers(w: BouquetWiring) {
    for token in &w.tokens {
        wire_token(&w, token);
    }
    wire_dragover(&w);
    wire_dragleave(&w);
    wire_drop(&w);
}

fn wire_token(w: &BouquetWiring, token: &web::HtmlElement) {
    let Some(flower) = token.get_attribute(FLOWER_ATTR) else {
        return;
    };

    let bouquet = w.bouquet.clone();
    let el = token.clone();
    dom::add_listener(token, "dragstart", move |ev: web::DragEvent| {
        let usable =
            bouquet.borrow().can_drag(&flower) && !el.class_list().contains(USED_CLASS);
        if !usable {
            ev.prevent_default();
            return;
        }
        _ = el.class_list().add_1(DRAGGING_CLASS);
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed(DRAG_EFFECT);
            _ = dt.set_data(DRAG_FORMAT, &flower);
        }
    });

    let el = token.clone();
    dom::add_listener(token, "dragend", move |_ev: web::DragEvent| {
        _ = el.class_list().remove_1(DRAGGING_CLASS);
    });
}

fn wire_dragover(w: &BouquetWiring) {
    let view = w.view.clone();
    dom::add_listener(&w.view.drop_zone, "dragover", move |ev: web::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect(DRAG_EFFECT);
        }
        view.set_drag_over(true);
    });
}

fn wire_dragleave(w: &BouquetWiring) {
    let view = w.view.clone();
    dom::add_listener(&w.view.drop_zone, "dragleave", move |_ev: web::DragEvent| {
        view.set_drag_over(false);
    });
}

fn wire_drop(w: &BouquetWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.view.drop_zone, "drop", move |ev: web::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        w2.view.set_drag_over(false);

        let flower = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(DRAG_FORMAT).ok())
            .unwrap_or_default();

        let outcome = w2.bouquet.borrow_mut().collect(&flower);
        match outcome {
            DropOutcome::Ignored => {
                log::debug!("[bouquet] ignored drop {:?}", flower);
            }
            DropOutcome::Progress { remaining } => {
                w2.view.show_dropped(&flower);
                w2.view.mark_used(&flower);
                w2.view.update_progress(remaining);
                log::debug!("[bouquet] collected {} ({} to go)", flower, remaining);
            }
            DropOutcome::Completed => {
                w2.view.show_dropped(&flower);
                w2.view.mark_used(&flower);
                w2.view.complete();
                log::info!("[bouquet] complete");
            }
        }
    });
}
