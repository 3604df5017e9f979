#![cfg(target_arch = "wasm32")]
use gloo_events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod gsap;
mod tilt;

/// Everything wired onto the current document. Dropping it detaches all
/// listeners.
struct Page {
    _nav: Vec<EventListener>,
    _form: Option<EventListener>,
    tilt: Vec<events::TiltBinding>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");
    mount();
    Ok(())
}

/// Wire the current document, detaching any previously mounted page first.
///
/// Called automatically on load; client-side routers call it again after
/// swapping page content.
#[wasm_bindgen]
pub fn mount() {
    unmount();
    match init() {
        Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

/// Detach every listener installed by [`mount`].
#[wasm_bindgen]
pub fn unmount() {
    let previous = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(page) = previous {
        log::info!("[page] detaching ({} tilt element(s))", page.tilt.len());
    }
}

fn init() -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::stamp_year(&document);
    let nav = events::wire_nav_toggle(&document);
    let form = events::wire_contact_form(&document);
    gsap::run_page_effects(&window, &document);
    // Tilt is plain style mutation and does not need the animation engine
    let tilt = events::wire_tilt_elements(&document);

    Ok(Page {
        _nav: nav,
        _form: form,
        tilt,
    })
}
