#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod emitter;
mod form;
mod layout;
mod parallax;
mod reveal;
mod starfield;
mod transition;

type Setup = fn(&web::Document) -> anyhow::Result<()>;

// Every effect is independent; one failing to start leaves the rest running.
const EFFECTS: [(&str, Setup); 10] = [
    ("starfield", starfield::setup),
    ("emitter", emitter::setup),
    ("layout", layout::setup),
    ("reveal", reveal::setup_scroll_reveal),
    ("stagger", reveal::setup_staggered),
    ("scroll-parallax", parallax::setup_scroll_parallax),
    ("pointer-parallax", parallax::setup_pointer_parallax),
    ("active-nav", parallax::setup_active_nav),
    ("transitions", transition::setup),
    ("form", form::setup),
];

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cosmos-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The module may load before the body is parsed.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let ready = Closure::once_into_js(move || init_effects(&doc));
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    } else {
        init_effects(&document);
    }
    Ok(())
}

fn init_effects(document: &web::Document) {
    for (name, setup) in EFFECTS {
        if let Err(e) = setup(document) {
            log::error!("[{name}] setup failed: {e:?}");
        }
    }
}
