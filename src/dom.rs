use crate::constants::YEAR_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements of type `T` matching `selector` in document order.
///
/// An invalid selector, or nodes that are not a `T`, contribute nothing.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    document
        .query_selector_all(selector)
        .map(|list| nodes_as(&list))
        .unwrap_or_default()
}

/// Like [`query_all`], scoped to the descendants of `root`.
pub fn query_all_in<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    root.query_selector_all(selector)
        .map(|list| nodes_as(&list))
        .unwrap_or_default()
}

fn nodes_as<T: JsCast>(list: &web::NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Write the current (local) year into `#year`, if the page has one.
pub fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
