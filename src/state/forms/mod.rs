//! Form domain layer
//!
//! Typed controls of the registration form, the registry binding them to
//! their error slots, the validation rules, password strength scoring and
//! the validator that drives it all.

mod field;
mod registry;
mod rules;
mod strength;
mod validator;

pub use field::{Field, FieldKey, FieldKind};
pub use registry::{registration_fields, ErrorSlot, FieldRegistry};
pub use strength::StrengthMeter;
pub use validator::{reset_form, FormElements, FormValidator, SubmitButton};
