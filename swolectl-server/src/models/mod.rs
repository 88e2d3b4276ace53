//! Domain payloads with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationErrors listing every bad field, not panic.

pub mod validation;
pub mod member;
pub mod workout;

pub use validation::{FieldKind, ValidationError, ValidationErrors, SCHEMA_KEY};
pub use member::{NewMember, MEMBER_FIELDS};
pub use workout::{NewWorkout, WORKOUT_FIELDS};
