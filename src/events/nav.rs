use crate::constants::{MENU_BUTTON_ID, NAV_MENU_ID, OPEN_CLASS};
use crate::dom;
use gloo_events::EventListener;
use web_sys as web;

/// Hamburger toggle for the site navigation.
///
/// The button flips `open` on itself and on the menu; following any link in
/// an open menu closes it again. Pages missing either element get nothing.
pub fn wire_nav_toggle(document: &web::Document) -> Vec<EventListener> {
    let (Some(button), Some(menu)) = (
        document.get_element_by_id(MENU_BUTTON_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) else {
        return Vec::new();
    };

    let mut listeners = Vec::new();

    let (b, m) = (button.clone(), menu.clone());
    listeners.push(EventListener::new(&button, "click", move |_| {
        _ = b.class_list().toggle(OPEN_CLASS);
        _ = m.class_list().toggle(OPEN_CLASS);
    }));

    for link in dom::query_all_in::<web::Element>(&menu, "a") {
        let (b, m) = (button.clone(), menu.clone());
        listeners.push(EventListener::new(&link, "click", move |_| {
            if m.class_list().contains(OPEN_CLASS) {
                _ = b.class_list().remove_1(OPEN_CLASS);
                _ = m.class_list().remove_1(OPEN_CLASS);
            }
        }));
    }

    log::debug!("[nav] wired toggle with {} link(s)", listeners.len() - 1);
    listeners
}
