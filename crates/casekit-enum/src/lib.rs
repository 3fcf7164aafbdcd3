//! The backed-enum factory for the casekit crates.
//!
//! Materializes a read-only collection of singleton enum cases from an
//! ordered definition and a case constructor. The factory sees composed case
//! types purely through the `CaseConstruct`/`EnumCase` contracts of
//! `casekit-common`; it never composes behavior itself.

pub mod backed;
pub use backed::{BackedEnum, CaseId};
