use crate::constants::{CONTACT_FORM_ID, FORM_STATUS_CLASS, FORM_STATUS_ID, FORM_STATUS_MESSAGE};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Demo handler for the contact form: nothing is sent anywhere, the visitor
/// just gets an acknowledgement and a cleared form.
pub fn wire_contact_form(document: &web::Document) -> Option<EventListener> {
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)?
        .dyn_into::<web::HtmlFormElement>()
        .ok()?;

    let doc = document.clone();
    let form_for_submit = form.clone();
    // Non-passive so the default navigation can be cancelled
    let listener = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            ev.prevent_default();
            if let Some(status) = doc.get_element_by_id(FORM_STATUS_ID) {
                status.set_text_content(Some(FORM_STATUS_MESSAGE));
                _ = status.class_list().add_1(FORM_STATUS_CLASS);
            }
            form_for_submit.reset();
            log::info!("[form] demo submission acknowledged");
        },
    );
    Some(listener)
}
