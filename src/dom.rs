use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Inner viewport size in CSS px.
pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Every element matching `selector` that casts to `T`, in document order.
/// An invalid selector yields nothing.
pub fn query_all<T: JsCast>(root: &web::Document, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect()
}

pub fn set_styles<S: AsRef<str>>(el: &web::HtmlElement, props: &[(&str, S)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value.as_ref());
    }
}

pub fn clear_styles(el: &web::HtmlElement, names: &[&str]) {
    let style = el.style();
    for name in names {
        _ = style.remove_property(name);
    }
}

pub fn add_window_listener(event: &str, handler: impl FnMut(web::Event) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        ms.min(i32::MAX as u32) as i32,
    );
}

/// Run `f` once on the next animation frame, after the browser has applied
/// pending style changes.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    _ = window.request_animation_frame(cb.unchecked_ref());
}

pub fn navigate(href: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(href) {
            log::warn!("navigation to {href} failed: {e:?}");
        }
    }
}
