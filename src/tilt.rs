// Pointer-driven 3D tilt: configuration parsing and the pointer → transform
// mapping.
//
// Nothing here touches the DOM. Every input event is mapped to an output
// transform from scratch; the only smoothing is the CSS transition applied by
// the binding in `events::tilt`.

use crate::constants::{TILT_DEFAULT_MAX_DEG, TILT_DEFAULT_SCALE, TILT_PERSPECTIVE_PX};
use glam::Vec2;

/// Per-element settings, read once from the element's data attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_angle_deg: f32,
    pub scale: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_deg: TILT_DEFAULT_MAX_DEG,
            scale: TILT_DEFAULT_SCALE,
        }
    }
}

impl TiltConfig {
    /// Build a config from raw `data-tilt-max` / `data-tilt-scale` values.
    ///
    /// Values that are missing, unparseable, zero or non-finite fall back to
    /// the defaults. A leading number is enough (`"8deg"` reads as 8).
    pub fn from_attributes(max_angle: Option<&str>, scale: Option<&str>) -> Self {
        Self {
            max_angle_deg: attribute_or(max_angle, TILT_DEFAULT_MAX_DEG),
            scale: attribute_or(scale, TILT_DEFAULT_SCALE),
        }
    }
}

#[inline]
fn attribute_or(raw: Option<&str>, default: f32) -> f32 {
    raw.and_then(leading_number)
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(default)
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
pub fn leading_number(s: &str) -> Option<f32> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Element bounds in viewport coordinates, as reported at event time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl TiltTransform {
    /// Resting pose: no rotation, unit scale.
    pub const NEUTRAL: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rotate_x_deg.is_finite() && self.rotate_y_deg.is_finite() && self.scale.is_finite()
    }

    /// CSS `transform` value: perspective, then rotateX, rotateY, scale.
    pub fn to_css(&self) -> String {
        // `+ 0.0` folds -0 into 0 so the output never reads "-0deg"
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            TILT_PERSPECTIVE_PX,
            self.rotate_x_deg + 0.0,
            self.rotate_y_deg + 0.0,
            self.scale + 0.0
        )
    }
}

/// Pointer displacement from the rect's center divided by half its size.
///
/// Roughly [-1, 1] inside the element and unbounded outside it. An axis with
/// no usable extent (zero, negative or non-finite) reports 0.
pub fn normalized_offset(rect: &ElementRect, pointer: Vec2) -> Vec2 {
    let delta = pointer - rect.center();
    let half = rect.half_extent();
    Vec2::new(axis_ratio(delta.x, half.x), axis_ratio(delta.y, half.y))
}

#[inline]
fn axis_ratio(delta: f32, half_extent: f32) -> f32 {
    if !(half_extent.is_finite() && half_extent > 0.0) {
        return 0.0;
    }
    let r = delta / half_extent;
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

/// Map a pointer position to the active transform.
///
/// The offset is deliberately not clamped: a pointer outside the element
/// yields angles beyond `max_angle_deg`.
pub fn compute_transform(config: &TiltConfig, rect: &ElementRect, pointer: Vec2) -> TiltTransform {
    let p = normalized_offset(rect, pointer);
    TiltTransform {
        rotate_x_deg: p.y * config.max_angle_deg,
        rotate_y_deg: -p.x * config.max_angle_deg,
        scale: config.scale,
    }
}

/// Input events a tilt element reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TiltInput {
    PointerMove(Vec2),
    PointerLeave,
    /// First touch point, if the event carried any.
    TouchStart(Option<Vec2>),
    TouchEnd,
}

/// Decide the transform for one input event.
///
/// `rect` is only queried for events that need the current layout. `None`
/// means the element's transform should be left as is.
pub fn respond(
    config: &TiltConfig,
    input: TiltInput,
    rect: impl FnOnce() -> ElementRect,
) -> Option<TiltTransform> {
    match input {
        TiltInput::PointerMove(p) | TiltInput::TouchStart(Some(p)) => {
            Some(compute_transform(config, &rect(), p))
        }
        TiltInput::TouchStart(None) => None,
        TiltInput::PointerLeave | TiltInput::TouchEnd => Some(TiltTransform::NEUTRAL),
    }
}
