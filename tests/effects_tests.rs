// Host-side tests for the page effect plan.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod effects {
    include!("../src/effects.rs");
}

use effects::*;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Animate(&'static str, Tween),
    Set(&'static str, Vec<(Prop, f64)>),
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<Call>>,
}

impl Animator for Recorder {
    type Target = &'static str;

    fn animate(&self, target: &&'static str, tween: &Tween) {
        self.calls
            .borrow_mut()
            .push(Call::Animate(*target, tween.clone()));
    }

    fn set_initial(&self, target: &&'static str, values: &[(Prop, f64)]) {
        self.calls.borrow_mut().push(Call::Set(*target, values.to_vec()));
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn animated(calls: &[Call]) -> Vec<(&'static str, Tween)> {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::Animate(t, tw) => Some((*t, tw.clone())),
            Call::Set(..) => None,
        })
        .collect()
}

#[test]
fn empty_page_issues_nothing() {
    let rec = Recorder::default();
    let targets = EffectTargets::default();
    assert!(targets.is_empty());
    plan_page(&rec, &targets);
    assert!(rec.calls.borrow().is_empty());
}

#[test]
fn headings_enter_from_below_with_stagger() {
    let rec = Recorder::default();
    let targets = EffectTargets {
        headings: vec!["h1-a", "h1-b", "h1-c"],
        ..Default::default()
    };
    plan_page(&rec, &targets);
    let calls = animated(&rec.calls.borrow());
    assert_eq!(calls.len(), 3);
    for (i, (_, tw)) in calls.iter().enumerate() {
        assert_eq!(tw.direction, Direction::From);
        assert_eq!(tw.props.as_slice(), &[(Prop::Y, 80.0), (Prop::Opacity, 0.0)]);
        assert_eq!(tw.duration, Some(1.2));
        assert!(approx(tw.delay, i as f64 * 0.05));
        assert_eq!(tw.ease, Ease::Power3Out);
        assert!(tw.scroll.is_none());
    }
}

#[test]
fn header_copy_starts_after_base_delay() {
    let tw0 = header_copy(0);
    let tw2 = header_copy(2);
    assert!(approx(tw0.delay, 0.2));
    assert!(approx(tw2.delay, 0.3));
    assert_eq!(tw0.duration, Some(0.9));
    assert_eq!(tw0.props.as_slice(), &[(Prop::Y, 30.0), (Prop::Opacity, 0.0)]);
}

#[test]
fn circles_alternate_direction_and_scrub_on_header() {
    let up_down: Vec<f64> = (0..4).map(|i| header_circle(i).props[0].1).collect();
    assert_eq!(up_down, vec![30.0, -30.0, 30.0, -30.0]);

    let tw = header_circle(0);
    assert_eq!(tw.direction, Direction::To);
    assert_eq!(tw.ease, Ease::Linear);
    let scroll = tw.scroll.expect("circles are scroll bound");
    assert_eq!(scroll.trigger, TriggerTarget::Selector("header"));
    assert_eq!(scroll.start, "top top");
    assert_eq!(scroll.end, Some("bottom top"));
    assert!(scroll.scrub);
}

#[test]
fn cards_are_hidden_before_any_reveal() {
    let rec = Recorder::default();
    let targets = EffectTargets {
        cards: vec!["card-0", "card-1", "card-2"],
        ..Default::default()
    };
    plan_page(&rec, &targets);
    let calls = rec.calls.borrow();
    assert_eq!(calls.len(), 6);
    for (i, call) in calls.iter().take(3).enumerate() {
        assert_eq!(
            call,
            &Call::Set(
                targets.cards[i],
                vec![(Prop::AutoAlpha, 0.0), (Prop::Y, 40.0)]
            )
        );
    }
    for (i, (target, tw)) in animated(&calls).into_iter().enumerate() {
        assert_eq!(target, targets.cards[i]);
        assert_eq!(tw.props.as_slice(), &[(Prop::AutoAlpha, 1.0), (Prop::Y, 0.0)]);
        assert!(approx(tw.delay, i as f64 * 0.08));
        let scroll = tw.scroll.expect("cards reveal on scroll");
        assert_eq!(scroll.trigger, TriggerTarget::Itself);
        assert_eq!(scroll.start, "top 85%");
        assert!(!scroll.scrub);
    }
}

#[test]
fn no_cards_means_no_initial_state() {
    let rec = Recorder::default();
    let targets = EffectTargets {
        headings: vec!["h1"],
        parallax: vec!["bg"],
        ..Default::default()
    };
    plan_page(&rec, &targets);
    assert!(rec
        .calls
        .borrow()
        .iter()
        .all(|c| matches!(c, Call::Animate(..))));
}

#[test]
fn parallax_layers_drift_ten_percent() {
    let tw = parallax_layer();
    assert_eq!(tw.props.as_slice(), &[(Prop::YPercent, 10.0)]);
    let scroll = tw.scroll.expect("parallax is scroll bound");
    assert_eq!(scroll.trigger, TriggerTarget::Itself);
    assert_eq!(scroll.start, "top bottom");
    assert_eq!(scroll.end, Some("bottom top"));
    assert!(scroll.scrub);
}

#[test]
fn plan_follows_page_order() {
    let rec = Recorder::default();
    let targets = EffectTargets {
        headings: vec!["h1"],
        header_copy: vec!["p"],
        header_circles: vec!["circle"],
        cards: vec!["card"],
        parallax: vec!["bg"],
    };
    plan_page(&rec, &targets);
    let order: Vec<&'static str> = rec
        .calls
        .borrow()
        .iter()
        .map(|c| match c {
            Call::Animate(t, _) | Call::Set(t, _) => *t,
        })
        .collect();
    assert_eq!(order, vec!["h1", "p", "circle", "card", "card", "bg"]);
    assert_eq!(targets.len(), 5);
}

#[test]
fn engine_names_match_gsap_keys() {
    assert_eq!(Prop::Y.key(), "y");
    assert_eq!(Prop::YPercent.key(), "yPercent");
    assert_eq!(Prop::Opacity.key(), "opacity");
    assert_eq!(Prop::AutoAlpha.key(), "autoAlpha");
    assert_eq!(Ease::Linear.name(), "none");
    assert_eq!(Ease::Power3Out.name(), "power3.out");
}
