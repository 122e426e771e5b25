use crate::core::constants::{NAV_ACTIVE_COLOR, NAV_IDLE_COLOR};
use crate::core::nav::{self, Section, SectionList};
use crate::core::parallax::*;
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const PARALLAX_SELECTOR: &str = "[data-parallax]";
const PLANET_SELECTOR: &str = ".planet-float";
const NAV_LINK_SELECTOR: &str = ".nav-links a";

pub fn setup_scroll_parallax(document: &web::Document) -> anyhow::Result<()> {
    let document = document.clone();
    dom::add_window_listener("scroll", move |_| {
        let scrolled = dom::scroll_y();
        // Re-queried per event so elements added later still move.
        for el in dom::query_all::<web::HtmlElement>(&document, PARALLAX_SELECTOR) {
            let speed = parse_speed(el.get_attribute("data-parallax").as_deref());
            _ = el
                .style()
                .set_property("transform", &translate_y(scroll_offset(scrolled, speed)));
        }
    });
    Ok(())
}

pub fn setup_pointer_parallax(document: &web::Document) -> anyhow::Result<()> {
    let planets: Vec<web::HtmlElement> = dom::query_all(document, PLANET_SELECTOR);
    if planets.is_empty() {
        return Ok(());
    }
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let Some(vp) = dom::viewport() else {
            return;
        };
        let pointer = pointer_vector(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(vp.width as f32, vp.height as f32),
        );
        for (i, planet) in planets.iter().enumerate() {
            _ = planet
                .style()
                .set_property("transform", &translate(pointer_offset(pointer, i)));
        }
    });
    Ok(())
}

fn section_for(document: &web::Document, link: &web::Element) -> Option<Section> {
    let href = link.get_attribute("href")?;
    let id = nav::fragment_target(&href)?;
    let section = document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    Some(Section {
        top: section.offset_top() as f64,
        height: section.client_height() as f64,
    })
}

/// Colour the nav link of the section under the top of the viewport.
pub fn setup_active_nav(document: &web::Document) -> anyhow::Result<()> {
    let links: Vec<web::HtmlElement> = dom::query_all(document, NAV_LINK_SELECTOR);
    if links.is_empty() {
        return Ok(());
    }
    let document = document.clone();
    dom::add_window_listener("scroll", move |_| {
        // Section geometry moves with layout, so it is measured per event.
        let sections: SectionList = links.iter().map(|l| section_for(&document, l)).collect();
        let Some(active) = nav::active_index(dom::scroll_y(), &sections) else {
            return;
        };
        for (i, link) in links.iter().enumerate() {
            let color = if i == active {
                NAV_ACTIVE_COLOR
            } else {
                NAV_IDLE_COLOR
            };
            _ = link.style().set_property("color", color);
        }
    });
    Ok(())
}
