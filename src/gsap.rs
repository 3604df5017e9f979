//! [`Animator`] backed by the page's global GSAP instance.

use crate::constants::*;
use crate::dom;
use crate::effects::{plan_page, Animator, Direction, EffectTargets, Prop, TriggerTarget, Tween};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct GsapAnimator {
    gsap: JsValue,
    from: Function,
    to: Function,
    set: Function,
}

impl GsapAnimator {
    /// Look up `window.gsap`; `None` when the page did not load it.
    ///
    /// Registers `window.ScrollTrigger` as a plugin when that is present too.
    pub fn detect(window: &web::Window) -> Option<Self> {
        let gsap = Reflect::get(window, &"gsap".into())
            .ok()
            .filter(|v| v.is_object())?;
        let from = method(&gsap, "from")?;
        let to = method(&gsap, "to")?;
        let set = method(&gsap, "set")?;

        match Reflect::get(window, &"ScrollTrigger".into()) {
            Ok(plugin) if plugin.is_function() || plugin.is_object() => {
                if let Some(register) = method(&gsap, "registerPlugin") {
                    _ = register.call1(&gsap, &plugin);
                }
            }
            _ => log::warn!("[fx] ScrollTrigger missing; scroll-bound tweens play on load"),
        }

        Some(Self { gsap, from, to, set })
    }
}

impl Animator for GsapAnimator {
    type Target = web::Element;

    fn animate(&self, target: &web::Element, tween: &Tween) {
        let f = match tween.direction {
            Direction::From => &self.from,
            Direction::To => &self.to,
        };
        if let Err(e) = f.call2(&self.gsap, target, &tween_vars(target, tween)) {
            log::warn!("[fx] tween failed: {:?}", e);
        }
    }

    fn set_initial(&self, target: &web::Element, values: &[(Prop, f64)]) {
        let vars = Object::new();
        for (prop, value) in values {
            put(&vars, prop.key(), &JsValue::from_f64(*value));
        }
        if let Err(e) = self.set.call2(&self.gsap, target, &vars) {
            log::warn!("[fx] set failed: {:?}", e);
        }
    }
}

fn method(obj: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(obj, &name.into()).ok()?.dyn_into::<Function>().ok()
}

#[inline]
fn put(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &key.into(), value);
}

fn tween_vars(target: &web::Element, tween: &Tween) -> Object {
    let vars = Object::new();
    for (prop, value) in &tween.props {
        put(&vars, prop.key(), &JsValue::from_f64(*value));
    }
    if let Some(duration) = tween.duration {
        put(&vars, "duration", &JsValue::from_f64(duration));
    }
    if tween.delay > 0.0 {
        put(&vars, "delay", &JsValue::from_f64(tween.delay));
    }
    put(&vars, "ease", &tween.ease.name().into());

    if let Some(scroll) = &tween.scroll {
        let st = Object::new();
        let trigger: JsValue = match scroll.trigger {
            TriggerTarget::Selector(sel) => sel.into(),
            TriggerTarget::Itself => target.clone().into(),
        };
        put(&st, "trigger", &trigger);
        put(&st, "start", &scroll.start.into());
        if let Some(end) = scroll.end {
            put(&st, "end", &end.into());
        }
        if scroll.scrub {
            put(&st, "scrub", &JsValue::TRUE);
        }
        put(&vars, "scrollTrigger", &st);
    }
    vars
}

/// Collect the effect targets from `document` and hand them to GSAP.
///
/// Pages without GSAP simply render statically.
pub fn run_page_effects(window: &web::Window, document: &web::Document) {
    let Some(animator) = GsapAnimator::detect(window) else {
        log::info!("[fx] gsap not loaded, skipping page effects");
        return;
    };
    let targets: EffectTargets<web::Element> = EffectTargets {
        headings: dom::query_all(document, HERO_HEADING_SELECTOR),
        header_copy: dom::query_all(document, HEADER_COPY_SELECTOR),
        header_circles: dom::query_all(document, HEADER_CIRCLE_SELECTOR),
        cards: dom::query_all(document, CARD_SELECTOR),
        parallax: dom::query_all(document, PARALLAX_SELECTOR),
    };
    if targets.is_empty() {
        log::debug!("[fx] no effect targets on page");
        return;
    }
    plan_page(&animator, &targets);
    log::info!("[fx] scheduled effects for {} element(s)", targets.len());
}
