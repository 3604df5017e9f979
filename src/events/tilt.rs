use crate::constants::{
    TILT_MARKER_SELECTOR, TILT_MAX_ATTR, TILT_SCALE_ATTR, TILT_TRANSFORM_STYLE, TILT_TRANSITION,
};
use crate::dom;
use crate::tilt::{respond, ElementRect, TiltConfig, TiltInput, TiltTransform};
use glam::Vec2;
use gloo_events::EventListener;
use smallvec::{smallvec, SmallVec};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `[data-tilt]` element with its settings and live listeners.
///
/// Dropping the binding unregisters every listener and puts the element back
/// in the neutral pose.
pub struct TiltBinding {
    element: web::HtmlElement,
    _listeners: SmallVec<[EventListener; 4]>,
}

impl TiltBinding {
    pub fn attach(element: web::HtmlElement) -> Self {
        let config = TiltConfig::from_attributes(
            element.get_attribute(TILT_MAX_ATTR).as_deref(),
            element.get_attribute(TILT_SCALE_ATTR).as_deref(),
        );
        log::debug!("[tilt] attach {:?}", config);
        let style = element.style();
        _ = style.set_property("transform-style", TILT_TRANSFORM_STYLE);
        _ = style.set_property("transition", TILT_TRANSITION);

        let listeners: SmallVec<[EventListener; 4]> = smallvec![
            listen(&element, config, "pointermove", pointer_move),
            listen(&element, config, "pointerleave", |_| {
                Some(TiltInput::PointerLeave)
            }),
            listen(&element, config, "touchstart", touch_start),
            listen(&element, config, "touchend", |_| Some(TiltInput::TouchEnd)),
        ];

        Self {
            element,
            _listeners: listeners,
        }
    }
}

impl Drop for TiltBinding {
    fn drop(&mut self) {
        apply(&self.element, &TiltTransform::NEUTRAL);
    }
}

/// Bind every tilt-marked element in `document`.
pub fn wire_tilt_elements(document: &web::Document) -> Vec<TiltBinding> {
    let bindings: Vec<TiltBinding> =
        dom::query_all::<web::HtmlElement>(document, TILT_MARKER_SELECTOR)
            .into_iter()
            .map(TiltBinding::attach)
            .collect();
    if bindings.is_empty() {
        log::debug!("[tilt] no tilt elements on page");
    } else {
        log::info!("[tilt] bound {} element(s)", bindings.len());
    }
    bindings
}

fn listen(
    element: &web::HtmlElement,
    config: TiltConfig,
    kind: &'static str,
    read: fn(&web::Event) -> Option<TiltInput>,
) -> EventListener {
    let el = element.clone();
    EventListener::new(element, kind, move |ev| {
        let Some(input) = read(ev) else {
            return;
        };
        if let Some(transform) = respond(&config, input, || element_rect(&el)) {
            apply(&el, &transform);
        }
    })
}

fn pointer_move(ev: &web::Event) -> Option<TiltInput> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    Some(TiltInput::PointerMove(Vec2::new(
        ev.client_x() as f32,
        ev.client_y() as f32,
    )))
}

fn touch_start(ev: &web::Event) -> Option<TiltInput> {
    let ev = ev.dyn_ref::<web::TouchEvent>()?;
    let first = ev
        .touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
    Some(TiltInput::TouchStart(first))
}

#[inline]
fn element_rect(el: &web::HtmlElement) -> ElementRect {
    let r = el.get_bounding_client_rect();
    ElementRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

fn apply(el: &web::HtmlElement, transform: &TiltTransform) {
    let transform = if transform.is_finite() {
        transform
    } else {
        log::warn!("[tilt] non-finite transform {:?}, resetting", transform);
        &TiltTransform::NEUTRAL
    };
    _ = el.style().set_property("transform", &transform.to_css());
}
