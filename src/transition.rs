use crate::core::constants::{EXIT_TRANSITION_MS, OVERLAY_NAVIGATE_MS};
use crate::core::transition::{overlay_radius, should_intercept, ClickInfo, LeaveState};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const EXIT_CLASS: &str = "page-exit";
const OVERLAY_CLASS: &str = "planet-overlay";
const OVERLAY_SELECTOR: &str = ".planet-overlay";
const PLANET_LINK_SELECTOR: &str = ".planet-float[data-href]";

fn click_info(ev: &web::MouseEvent, link: &web::Element) -> ClickInfo {
    ClickInfo {
        button: ev.button(),
        modified: ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key(),
        new_tab: link
            .get_attribute("target")
            .map(|t| t == "_blank")
            .unwrap_or(false),
        download: link.has_attribute("download"),
    }
}

/// Link exit transitions, planet overlays, and the reset for pages that come
/// back from the back/forward cache.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let leave = Rc::new(RefCell::new(LeaveState::default()));
    wire_link_transitions(document, leave.clone());
    wire_planet_links(document, leave.clone());
    wire_page_restore(document, leave);
    Ok(())
}

/// Play the exit animation before following same-site links. Handled by a
/// single delegated listener so links added later are covered too.
fn wire_link_transitions(document: &web::Document, leave: Rc<RefCell<LeaveState>>) {
    let doc = document.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        if ev.default_prevented() {
            return;
        }
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if !should_intercept(&click_info(&ev, &link), &href) {
            return;
        }
        ev.prevent_default();
        leave.borrow_mut().begin();
        if let Some(body) = doc.body() {
            _ = body.class_list().add_1(EXIT_CLASS);
        }
        log::debug!("[transition] leaving for {href}");
        dom::set_timeout(EXIT_TRANSITION_MS, move || dom::navigate(&href));
    });
}

/// Grow a full-screen overlay from the click point, then follow the planet's
/// `data-href`.
fn wire_planet_links(document: &web::Document, leave: Rc<RefCell<LeaveState>>) {
    let planets: Vec<web::HtmlElement> = dom::query_all(document, PLANET_LINK_SELECTOR);
    for planet in planets {
        let doc = document.clone();
        let target = planet.clone();
        let leave = leave.clone();
        dom::add_listener(&planet, "click", move |ev: web::MouseEvent| {
            let Some(href) = target.get_attribute("data-href") else {
                return;
            };
            ev.prevent_default();
            leave.borrow_mut().begin();
            let point = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            if let Err(e) = grow_overlay(&doc, point) {
                log::debug!("[transition] overlay skipped: {e}");
            }
            dom::set_timeout(OVERLAY_NAVIGATE_MS, move || dom::navigate(&href));
        });
    }
}

fn wire_page_restore(document: &web::Document, leave: Rc<RefCell<LeaveState>>) {
    let doc = document.clone();
    dom::add_window_listener("pageshow", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|ev| ev.persisted())
            .unwrap_or(false);
        if !leave.borrow_mut().on_page_show(persisted) {
            return;
        }
        if let Some(body) = doc.body() {
            _ = body.class_list().remove_1(EXIT_CLASS);
        }
        for overlay in dom::query_all::<web::Element>(&doc, OVERLAY_SELECTOR) {
            overlay.remove();
        }
        log::debug!("[transition] restored from cache");
    });
}

fn grow_overlay(document: &web::Document, point: Vec2) -> anyhow::Result<()> {
    let vp = dom::viewport().ok_or_else(|| anyhow::anyhow!("no viewport"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let overlay: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    overlay.set_class_name(OVERLAY_CLASS);
    let radius = overlay_radius(point, Vec2::new(vp.width as f32, vp.height as f32));
    dom::set_styles(
        &overlay,
        &[
            ("position", "fixed".to_string()),
            ("--x", format!("{}px", point.x)),
            ("--y", format!("{}px", point.y)),
            ("--r", format!("{}px", radius.ceil())),
        ],
    );
    body.append_child(&overlay)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::next_frame(move || {
        dom::next_frame(move || {
            _ = overlay.class_list().add_1("expand");
        });
    });
    Ok(())
}
