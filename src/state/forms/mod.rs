//! Form state: field values, validation rules, and submit orchestration

mod field;
mod form_state;
mod rules;

pub use field::*;
pub use form_state::*;
pub use rules::*;
