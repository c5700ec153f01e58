//! Form domain layer: fields, validators, and per-screen form state

mod field;
mod form_state;
mod strength;
mod validators;

pub use field::*;
pub use form_state::*;
pub use strength::*;
pub use validators::*;
