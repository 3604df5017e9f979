// Entrance, reveal and parallax effects expressed against an abstract
// animation engine.
//
// The plan only decides *what* to animate; an [`Animator`] implementation
// (GSAP on the real page) decides how.

use crate::constants::*;
use smallvec::{smallvec, SmallVec};

/// Animatable properties, named after the engine's keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prop {
    Y,
    YPercent,
    Opacity,
    /// Opacity that also toggles `visibility` at 0.
    AutoAlpha,
}

impl Prop {
    pub fn key(self) -> &'static str {
        match self {
            Prop::Y => "y",
            Prop::YPercent => "yPercent",
            Prop::Opacity => "opacity",
            Prop::AutoAlpha => "autoAlpha",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power3Out,
}

impl Ease {
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power3Out => "power3.out",
        }
    }
}

/// `From` animates from the given values to the element's current ones,
/// `To` from the current values to the given ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    From,
    To,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerTarget {
    Selector(&'static str),
    /// The animated element itself.
    Itself,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBinding {
    pub trigger: TriggerTarget,
    pub start: &'static str,
    pub end: Option<&'static str>,
    /// Tie progress directly to the scroll position instead of playing once.
    pub scrub: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub direction: Direction,
    pub props: SmallVec<[(Prop, f64); 2]>,
    /// Seconds; `None` leaves it to the engine (scrubbed tweens).
    pub duration: Option<f64>,
    pub delay: f64,
    pub ease: Ease,
    pub scroll: Option<ScrollBinding>,
}

/// Animation engine capability.
pub trait Animator {
    type Target;

    fn animate(&self, target: &Self::Target, tween: &Tween);
    fn set_initial(&self, target: &Self::Target, values: &[(Prop, f64)]);
}

/// Elements found on the page, grouped by the effect they get.
pub struct EffectTargets<T> {
    pub headings: Vec<T>,
    pub header_copy: Vec<T>,
    pub header_circles: Vec<T>,
    pub cards: Vec<T>,
    pub parallax: Vec<T>,
}

impl<T> Default for EffectTargets<T> {
    fn default() -> Self {
        Self {
            headings: Vec::new(),
            header_copy: Vec::new(),
            header_circles: Vec::new(),
            cards: Vec::new(),
            parallax: Vec::new(),
        }
    }
}

impl<T> EffectTargets<T> {
    pub fn len(&self) -> usize {
        self.headings.len()
            + self.header_copy.len()
            + self.header_circles.len()
            + self.cards.len()
            + self.parallax.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn hero_heading(index: usize) -> Tween {
    Tween {
        direction: Direction::From,
        props: smallvec![(Prop::Y, HERO_OFFSET_Y), (Prop::Opacity, 0.0)],
        duration: Some(HERO_DURATION_SEC),
        delay: index as f64 * HERO_STAGGER_SEC,
        ease: Ease::Power3Out,
        scroll: None,
    }
}

pub fn header_copy(index: usize) -> Tween {
    Tween {
        direction: Direction::From,
        props: smallvec![(Prop::Y, HEADER_COPY_OFFSET_Y), (Prop::Opacity, 0.0)],
        duration: Some(HEADER_COPY_DURATION_SEC),
        delay: HEADER_COPY_BASE_DELAY_SEC + index as f64 * HEADER_COPY_STAGGER_SEC,
        ease: Ease::Power3Out,
        scroll: None,
    }
}

/// Even circles sink, odd ones rise, while the header scrolls out.
pub fn header_circle(index: usize) -> Tween {
    let y = if index % 2 == 0 {
        CIRCLE_DRIFT_Y
    } else {
        -CIRCLE_DRIFT_Y
    };
    Tween {
        direction: Direction::To,
        props: smallvec![(Prop::Y, y)],
        duration: None,
        delay: 0.0,
        ease: Ease::Linear,
        scroll: Some(ScrollBinding {
            trigger: TriggerTarget::Selector(HEADER_SELECTOR),
            start: "top top",
            end: Some("bottom top"),
            scrub: true,
        }),
    }
}

pub const CARD_HIDDEN: [(Prop, f64); 2] = [(Prop::AutoAlpha, 0.0), (Prop::Y, CARD_OFFSET_Y)];

pub fn card_reveal(index: usize) -> Tween {
    Tween {
        direction: Direction::To,
        props: smallvec![(Prop::AutoAlpha, 1.0), (Prop::Y, 0.0)],
        duration: Some(CARD_DURATION_SEC),
        delay: index as f64 * CARD_STAGGER_SEC,
        ease: Ease::Power3Out,
        scroll: Some(ScrollBinding {
            trigger: TriggerTarget::Itself,
            start: CARD_TRIGGER_START,
            end: None,
            scrub: false,
        }),
    }
}

pub fn parallax_layer() -> Tween {
    Tween {
        direction: Direction::To,
        props: smallvec![(Prop::YPercent, PARALLAX_Y_PERCENT)],
        duration: None,
        delay: 0.0,
        ease: Ease::Linear,
        scroll: Some(ScrollBinding {
            trigger: TriggerTarget::Itself,
            start: "top bottom",
            end: Some("bottom top"),
            scrub: true,
        }),
    }
}

/// Issue every page effect against `animator`, in page order.
pub fn plan_page<A: Animator>(animator: &A, targets: &EffectTargets<A::Target>) {
    for (i, h) in targets.headings.iter().enumerate() {
        animator.animate(h, &hero_heading(i));
    }
    for (i, el) in targets.header_copy.iter().enumerate() {
        animator.animate(el, &header_copy(i));
    }
    for (i, c) in targets.header_circles.iter().enumerate() {
        animator.animate(c, &header_circle(i));
    }
    // Hide every card before any reveal is scheduled
    for card in &targets.cards {
        animator.set_initial(card, &CARD_HIDDEN);
    }
    for (i, card) in targets.cards.iter().enumerate() {
        animator.animate(card, &card_reveal(i));
    }
    let layer = parallax_layer();
    for el in &targets.parallax {
        animator.animate(el, &layer);
    }
}
