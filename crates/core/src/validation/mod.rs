//! Form validation engine.
//!
//! Rule tables are declared as typed field descriptors ([`FieldRule`]) and
//! evaluated by a pure evaluator with no database access. Checks that need
//! the store (reference existence, uniqueness) are layered on top by the
//! caller, which appends to the same [`FieldErrors`].

pub mod evaluator;
pub mod rules;

pub use evaluator::evaluate;
pub use rules::{Evaluation, FieldErrors, FieldKind, FieldRule, FieldValue, FieldValues};
