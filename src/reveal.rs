use crate::core::constants::*;
use crate::core::reveal::stagger_delay_ms;
use crate::core::RevealTracker;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_SELECTOR: &str = ".reveal";
const STAGGER_SELECTOR: &str = "[data-stagger] > *, .stagger > *";
const REVEAL_ID_ATTR: &str = "data-reveal-id";
const REVEAL_TRANSITION: &str = "all 0.8s cubic-bezier(0.2, 0.9, 0.2, 1)";

fn reveal_id(el: &web::Element) -> Option<usize> {
    el.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

/// Hide every `.reveal` element and show each one the first time it scrolls
/// into view.
pub fn setup_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let targets: Vec<web::HtmlElement> = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));

    let tracker_cb = tracker.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = reveal_id(&target) else {
                    continue;
                };
                let first = tracker_cb.borrow_mut().on_intersection(
                    id,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if !first {
                    continue;
                }
                observer.unobserve(&target);
                if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                    dom::set_styles(el, &[("opacity", "1"), ("transform", "translateY(0)")]);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let start_offset = format!("translateY({}px)", REVEAL_START_OFFSET_PX);
    for (id, el) in targets.iter().enumerate() {
        _ = el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
        dom::set_styles(
            el,
            &[
                ("opacity", "0"),
                ("transform", start_offset.as_str()),
                ("transition", REVEAL_TRANSITION),
            ],
        );
        tracker.borrow_mut().observe(id);
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}

/// Show staged group items one after another in document order.
pub fn setup_staggered(document: &web::Document) -> anyhow::Result<()> {
    let items: Vec<web::Element> = dom::query_all(document, STAGGER_SELECTOR);
    for (i, el) in items.into_iter().enumerate() {
        dom::set_timeout(stagger_delay_ms(i), move || {
            _ = el.class_list().add_1("visible");
        });
    }
    Ok(())
}
