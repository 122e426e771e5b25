use crate::core::particles::{self, ParticleSpec};
use crate::dom;
use glam::Vec2;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PLANET_SELECTOR: &str = ".planet-float";
const PARTICLE_CLASS: &str = "planet-particle";

/// Start an independent spawn timer for every planet.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let planets: Vec<web::HtmlElement> = dom::query_all(document, PLANET_SELECTOR);
    if planets.is_empty() {
        log::debug!("[emitter] no planets");
        return Ok(());
    }
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    for planet in &planets {
        schedule(document.clone(), planet.clone(), rng.clone());
    }
    log::info!("[emitter] {} planets", planets.len());
    Ok(())
}

fn schedule(document: web::Document, planet: web::HtmlElement, rng: Rc<RefCell<StdRng>>) {
    let delay = particles::next_interval_ms(&mut *rng.borrow_mut());
    dom::set_timeout(delay, move || {
        if planet.is_connected() {
            let rect = planet.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() * 0.5) as f32,
                (rect.top() + rect.height() * 0.5) as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            // Hidden planets report an empty box and get no particle this tick.
            if let Some(spec) = particles::spawn(&mut *rng.borrow_mut(), center, size) {
                if let Err(e) = spawn_node(&document, &spec) {
                    log::debug!("[emitter] spawn skipped: {e}");
                }
            }
        }
        schedule(document, planet, rng);
    });
}

fn spawn_node(document: &web::Document, spec: &ParticleSpec) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let node: web::HtmlElement = document
        .create_element("span")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    node.set_class_name(PARTICLE_CLASS);
    _ = node.set_attribute("aria-hidden", "true");
    dom::set_styles(&node, &spec.style_properties());
    body.append_child(&node)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // The class change has to land after the node has been laid out at its
    // origin, otherwise the transition has no start state.
    let node_go = node.clone();
    dom::next_frame(move || {
        dom::next_frame(move || {
            _ = node_go.class_list().add_1("go");
        });
    });

    // Timer only; a listener closure would outlive the node.
    dom::set_timeout(spec.removal_deadline_ms(), move || node.remove());
    Ok(())
}
