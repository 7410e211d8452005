use crate::constants::*;
use crate::core::{asset_path, progress_text};
use crate::dom::{self, DomError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM half of the bouquet builder.
#[derive(Clone)]
pub struct BouquetView {
    document: web::Document,
    pub drop_zone: web::HtmlElement,
    dropped: web::HtmlElement,
    final_bouquet: web::HtmlElement,
    drop_text: web::HtmlElement,
}

impl BouquetView {
    pub fn locate(document: &web::Document) -> Result<Self, DomError> {
        Ok(Self {
            document: document.clone(),
            drop_zone: dom::html_by_id(document, DROP_ZONE_ID)?,
            dropped: dom::html_by_id(document, DROPPED_FLOWERS_ID)?,
            final_bouquet: dom::html_by_id(document, FINAL_BOUQUET_ID)?,
            drop_text: dom::query_html(document, DROP_TEXT_SELECTOR)?,
        })
    }

    pub fn set_drag_over(&self, on: bool) {
        let cl = self.drop_zone.class_list();
        if on {
            _ = cl.add_1(DRAG_OVER_CLASS);
        } else {
            _ = cl.remove_1(DRAG_OVER_CLASS);
        }
    }

    pub fn show_dropped(&self, flower: &str) {
        let Ok(wrapper) = self.document.create_element("div") else {
            return;
        };
        _ = wrapper.class_list().add_1(DROPPED_FLOWER_CLASS);

        let Some(img) = self
            .document
            .create_element("img")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            return;
        };
        img.set_src(&asset_path(flower));
        img.set_alt(flower);

        _ = wrapper.append_child(&img);
        _ = self.dropped.append_child(&wrapper);
    }

    /// Marks the source token so it can no longer be dragged. Missing tokens
    /// are ignored.
    pub fn mark_used(&self, flower: &str) {
        let selector = format!("[{}=\"{}\"]", FLOWER_ATTR, flower);
        if let Ok(Some(token)) = self.document.query_selector(&selector) {
            _ = token.class_list().add_1(USED_CLASS);
        }
    }

    pub fn update_progress(&self, remaining: usize) {
        self.drop_text.set_text_content(Some(progress_text(remaining).as_str()));
    }

    pub fn complete(&self) {
        dom::set_style(&self.dropped, "display", "none");
        dom::set_style(&self.drop_text, "display", "none");

        dom::set_style(&self.final_bouquet, "display", "block");

        dom::set_style(&self.drop_zone, "border-style", COMPLETE_BORDER_STYLE);
        dom::set_style(&self.drop_zone, "border-color", COMPLETE_BORDER_COLOR);
        dom::set_style(&self.drop_zone, "background", COMPLETE_BACKGROUND);
    }
}

/// Keep the wrap-up section interactive above the trail layer.
pub fn enable_wrap_up(document: &web::Document) {
    if let Ok(section) = dom::query_html(document, WRAP_UP_SELECTOR) {
        dom::set_style(&section, "pointer-events", "auto");
    }
}
