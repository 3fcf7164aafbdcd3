//! Case-type composition for the casekit backed-enum crates.
//!
//! Merges an arbitrary number of independent behavior modules into one
//! constructible case type, by explicit method-table merging rather than any
//! inheritance feature: the table is seeded with the base contract's
//! `toString` and each module's methods are copied over it in supplied order,
//! later entries overwriting earlier ones.

// Behavior modules: named method sets over a borrowed case view
pub mod module;
pub use module::{BehaviorModule, CaseView, MethodFn};

// Table merging and the composed case type it produces
pub mod compose;
pub use compose::{ComposedCase, ComposedCaseType, TO_STRING, compose};
