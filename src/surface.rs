use crate::constants::TRAIL_IMG_CLASS;
use crate::core::{
    transform, transition, Rect, Spawn, TrailConfig, TrailItem, TrailSurface, FADE_IN_KICK_MS,
    TRAIL_IMAGES,
};
use crate::dom;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Trail images live as absolutely positioned `<img>` children of the
/// container; CSS transitions do the fading.
pub struct DomTrailSurface {
    document: web::Document,
    container: web::HtmlElement,
}

impl DomTrailSurface {
    pub fn new(document: web::Document, container: web::HtmlElement) -> Self {
        Self {
            document,
            container,
        }
    }

    fn create_img(&self) -> Option<web::HtmlImageElement> {
        self.document
            .create_element("img")
            .ok()?
            .dyn_into::<web::HtmlImageElement>()
            .ok()
    }
}

impl TrailSurface for DomTrailSurface {
    type Handle = web::HtmlImageElement;

    fn bounds(&self) -> Rect {
        dom::element_rect(&self.container)
    }

    fn place(&mut self, spawn: &Spawn, config: &TrailConfig) -> Option<Self::Handle> {
        let src = TRAIL_IMAGES.get(spawn.image_index)?;
        let img = self.create_img()?;
        _ = img.class_list().add_1(TRAIL_IMG_CLASS);
        img.set_src(src);

        dom::set_style(&img, "left", &format!("{}px", spawn.offset.x));
        dom::set_style(&img, "top", &format!("{}px", spawn.offset.y));
        dom::set_style(&img, "transform", &transform(spawn.rotation_deg, 0.0));
        dom::set_style(
            &img,
            "transition",
            &transition(config.in_duration_ms, config.in_easing),
        );

        if self.container.append_child(&img).is_err() {
            return None;
        }

        // Let the browser commit scale(0) before switching to scale(1).
        let grow = img.clone();
        let target = transform(spawn.rotation_deg, 1.0);
        Timeout::new(FADE_IN_KICK_MS, move || {
            dom::set_style(&grow, "transform", &target);
        })
        .forget();

        Some(img)
    }

    fn retire(&mut self, item: &TrailItem<Self::Handle>, config: &TrailConfig) {
        let img = item.handle.clone();
        dom::set_style(
            &img,
            "transition",
            &transition(config.out_duration_ms, config.out_easing),
        );
        dom::set_style(&img, "transform", &transform(item.rotation_deg, 0.0));

        Timeout::new(config.out_duration_ms, move || {
            dom::detach(&img);
        })
        .forget();
    }
}
