//! Error types for definition adapters and case construction.
//!
//! Lookup misses are not errors anywhere in this workspace: `from`-style
//! operations signal "not found" and "wrong shape of input" with `None`. Only
//! construction-time failures in caller-supplied code and malformed adapter
//! input surface as error values.

use thiserror::Error;

/// A caller-supplied case constructor failed during the factory build pass.
///
/// Fatal: the factory propagates it immediately and no partially built
/// collection is observable.
#[derive(Debug, Error)]
#[error("failed to construct case `{name}`")]
pub struct ConstructError {
    name: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ConstructError {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Name of the case whose construction failed.
    pub fn case_name(&self) -> &str {
        &self.name
    }
}

/// A definition boundary adapter rejected its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("enum definition must be a JSON object")]
    NotAnObject,
    #[error("case `{key}` has a non-primitive backing value")]
    UnsupportedValue { key: String },
}
