//! Form rendering module
//!
//! - `field_renderer`: field and error slot rendering
//! - `strength_meter`: password strength bar
//! - `registration_form`: the registration form and its action panel

mod field_renderer;
mod registration_form;
mod strength_meter;

pub use registration_form::draw as draw_registration;
