use crate::core::constants::LAYOUT_DEBOUNCE_MS;
use crate::core::layout::PLANET_LAYOUT_PROPERTIES;
use crate::core::{Debouncer, LayoutMode, Placement};
use crate::dom;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PLANET_SELECTOR: &str = ".planet-float";

struct Responder {
    document: web::Document,
    debounce: Debouncer,
    rng: StdRng,
}

impl Responder {
    fn adjust(&mut self) {
        let Some(vp) = dom::viewport() else {
            return;
        };
        let planets: Vec<web::HtmlElement> = dom::query_all(&self.document, PLANET_SELECTOR);
        if planets.is_empty() {
            return;
        }
        let mode = vp.layout_mode();
        match mode {
            LayoutMode::MobileLandscape => {
                for p in &planets {
                    let placement = Placement::random(&mut self.rng);
                    dom::set_styles(p, &placement.style_properties());
                }
            }
            LayoutMode::Default => {
                for p in &planets {
                    dom::clear_styles(p, &PLANET_LAYOUT_PROPERTIES);
                }
            }
        }
        log::debug!(
            "[layout] {:?} at {}x{} ({} planets)",
            mode,
            vp.width,
            vp.height,
            planets.len()
        );
    }
}

/// Lay planets out for the current viewport now, then again after every
/// burst of resize or orientation events.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let responder = Rc::new(RefCell::new(Responder {
        document: document.clone(),
        debounce: Debouncer::new(),
        rng: StdRng::from_entropy(),
    }));
    responder.borrow_mut().adjust();

    for event in ["resize", "orientationchange"] {
        let responder = responder.clone();
        dom::add_window_listener(event, move |_| {
            let generation = responder.borrow_mut().debounce.arm();
            let responder = responder.clone();
            dom::set_timeout(LAYOUT_DEBOUNCE_MS, move || {
                let mut r = responder.borrow_mut();
                if r.debounce.fire(generation) {
                    r.adjust();
                }
            });
        });
    }
    Ok(())
}
