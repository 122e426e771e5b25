use crate::dom;
use web_sys as web;

const FORM_SELECTOR: &str = ".contact-form";
const ACK_MESSAGE: &str = "Thank you for reaching out! (This is a demo form)";

/// The contact form is a demo: acknowledge and clear instead of submitting.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let forms: Vec<web::HtmlFormElement> = dom::query_all(document, FORM_SELECTOR);
    let Some(form) = forms.into_iter().next() else {
        return Ok(());
    };
    let target = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if let Some(w) = web::window() {
            _ = w.alert_with_message(ACK_MESSAGE);
        }
        target.reset();
    });
    Ok(())
}
