/// Page wiring and effect tuning constants.
///
/// Selectors, ids and timings live here so the DOM glue and the pure effect
/// plan agree on them, and so host tests can check their relationships.

// Tilt
pub const TILT_MARKER_SELECTOR: &str = "[data-tilt]";
pub const TILT_MAX_ATTR: &str = "data-tilt-max";
pub const TILT_SCALE_ATTR: &str = "data-tilt-scale";
pub const TILT_DEFAULT_MAX_DEG: f32 = 12.0;
pub const TILT_DEFAULT_SCALE: f32 = 1.03;
pub const TILT_PERSPECTIVE_PX: f32 = 1200.0;
pub const TILT_TRANSITION: &str = "transform 0.12s ease-out";
pub const TILT_TRANSFORM_STYLE: &str = "preserve-3d";

// Navigation
pub const MENU_BUTTON_ID: &str = "menuButton";
pub const NAV_MENU_ID: &str = "navMenu";
pub const OPEN_CLASS: &str = "open";

// Footer
pub const YEAR_ID: &str = "year";

// Contact form demo
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const FORM_STATUS_CLASS: &str = "text-green-600";
pub const FORM_STATUS_MESSAGE: &str =
    "Thanks! This is a demo form — connect to your email/backend to receive messages.";

// Effect targets
pub const HERO_HEADING_SELECTOR: &str = "h1";
pub const HEADER_COPY_SELECTOR: &str = "header p, header a";
pub const HEADER_CIRCLE_SELECTOR: &str = ".circle-yellow";
pub const CARD_SELECTOR: &str = ".card-3d";
pub const PARALLAX_SELECTOR: &str = ".parallax";
pub const HEADER_SELECTOR: &str = "header";

// Hero entrance (seconds / px)
pub const HERO_OFFSET_Y: f64 = 80.0;
pub const HERO_DURATION_SEC: f64 = 1.2;
pub const HERO_STAGGER_SEC: f64 = 0.05;

// Header copy entrance
pub const HEADER_COPY_OFFSET_Y: f64 = 30.0;
pub const HEADER_COPY_DURATION_SEC: f64 = 0.9;
pub const HEADER_COPY_BASE_DELAY_SEC: f64 = 0.2;
pub const HEADER_COPY_STAGGER_SEC: f64 = 0.05;

// Header circles drift this far (px) over the header's scroll range
pub const CIRCLE_DRIFT_Y: f64 = 30.0;

// Card reveal
pub const CARD_OFFSET_Y: f64 = 40.0;
pub const CARD_DURATION_SEC: f64 = 0.8;
pub const CARD_STAGGER_SEC: f64 = 0.08;
pub const CARD_TRIGGER_START: &str = "top 85%";

// Background parallax, percent of own height
pub const PARALLAX_Y_PERCENT: f64 = 10.0;
