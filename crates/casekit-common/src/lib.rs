//! Foundational types for the casekit backed-enum crates.
//!
//! This crate provides the pieces shared by the composer and the factory:
//! - Backing primitives (`CaseValue`)
//! - Ordered enum definitions and their boundary adapters (`EnumDefinition`)
//! - The case contracts (`EnumCase`, `CaseConstruct`) and the plain case
//!   (`BaseCase`, `BaseCaseType`)
//! - Error types (`ConstructError`, `DefinitionError`)

// Case contracts and the plain (behavior-free) case
pub mod case;
pub use case::{BaseCase, BaseCaseType, CaseConstruct, EnumCase};

// Ordered name -> value definitions plus boundary adapters
pub mod definition;
pub use definition::EnumDefinition;

// Error types for adapters and case construction
pub mod error;
pub use error::{ConstructError, DefinitionError};

// String-or-number backing primitives
pub mod value;
pub use value::CaseValue;
