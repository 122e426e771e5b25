use crate::core::{Starfield, StarfieldParams};
use crate::dom;
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_SELECTOR: &str = "#cosmos, canvas[data-starfield]";
const FRAME_LOG_INTERVAL: u64 = 600;

/// A starfield bound to one canvas and its 2D context.
pub struct CanvasStarfield {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Starfield,
    frames: u64,
    started: Instant,
}

impl CanvasStarfield {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let params = canvas
            .get_attribute("data-starfield")
            .map(|v| StarfieldParams::from_variant(&v))
            .unwrap_or(StarfieldParams::COSMOS);
        let vp = dom::viewport().ok_or_else(|| anyhow::anyhow!("no viewport"))?;
        let field = Starfield::new(params, vp.width, vp.height, StdRng::from_entropy());
        let mut renderer = Self {
            canvas,
            ctx,
            field,
            frames: 0,
            started: Instant::now(),
        };
        renderer.sync_surface();
        Ok(renderer)
    }

    /// Match the backing store to the viewport at device pixel density and
    /// rebuild the star set for the new size.
    pub fn resize(&mut self) {
        let Some(vp) = dom::viewport() else {
            return;
        };
        self.sync_surface();
        self.field.regenerate(vp.width, vp.height);
        log::debug!(
            "[starfield] resized to {}x{}, {} stars",
            vp.width,
            vp.height,
            self.field.stars().len()
        );
    }

    fn sync_surface(&mut self) {
        let (Some(window), Some(vp)) = (web::window(), dom::viewport()) else {
            return;
        };
        let dpr = window.device_pixel_ratio();
        self.canvas.set_width(((vp.width * dpr) as u32).max(1));
        self.canvas.set_height(((vp.height * dpr) as u32).max(1));
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", vp.width));
        _ = style.set_property("height", &format!("{}px", vp.height));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    pub fn frame(&mut self) {
        self.field.step();
        let (w, h) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for dot in self.field.dots() {
            self.ctx.begin_path();
            self.ctx.set_fill_style_str(&dot.css_color());
            _ = self.ctx.arc(
                dot.pos.x as f64,
                dot.pos.y as f64,
                dot.radius as f64,
                0.0,
                TAU,
            );
            self.ctx.fill();
        }
        self.frames += 1;
        if self.frames % FRAME_LOG_INTERVAL == 0 {
            let secs = self.started.elapsed().as_secs_f64().max(1e-3);
            log::debug!("[starfield] {:.1} fps average", self.frames as f64 / secs);
        }
    }
}

/// Drive `frame()` from `requestAnimationFrame` for the life of the page.
pub fn start_loop(renderer: Rc<RefCell<CanvasStarfield>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        renderer.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Start a renderer on every starfield canvas in the document.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let canvases: Vec<web::HtmlCanvasElement> = dom::query_all(document, CANVAS_SELECTOR);
    if canvases.is_empty() {
        log::debug!("[starfield] no canvas, disabled");
        return Ok(());
    }
    for canvas in canvases {
        let renderer = match CanvasStarfield::new(canvas) {
            Ok(r) => Rc::new(RefCell::new(r)),
            Err(e) => {
                log::warn!("[starfield] disabled: {e}");
                continue;
            }
        };
        log::info!(
            "[starfield] {} stars",
            renderer.borrow().field.stars().len()
        );
        let on_resize = renderer.clone();
        dom::add_window_listener("resize", move |_| on_resize.borrow_mut().resize());
        start_loop(renderer);
    }
    Ok(())
}
