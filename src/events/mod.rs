pub mod form;
pub mod nav;
pub mod tilt;

pub use form::wire_contact_form;
pub use nav::wire_nav_toggle;
pub use tilt::{wire_tilt_elements, TiltBinding};
