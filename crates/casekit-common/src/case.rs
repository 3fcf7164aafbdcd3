//! The case contract and the plain backed case.

use std::fmt;

use crate::error::ConstructError;
use crate::value::CaseValue;

/// Contract every enum case satisfies: an immutable name, an immutable
/// backing value, and a string rendering (the `toString` of the case).
pub trait EnumCase {
    fn name(&self) -> &str;

    fn value(&self) -> &CaseValue;

    /// Default rendering is the string form of the backing value.
    fn render(&self) -> String {
        self.value().to_string()
    }
}

/// Constructor seam handed to the enum factory: builds one case per
/// definition entry. Fallible so that a caller-supplied constructor can
/// abort the whole build pass.
pub trait CaseConstruct {
    type Case: EnumCase;

    fn construct(&self, name: &str, value: &CaseValue) -> Result<Self::Case, ConstructError>;
}

/// A case with no composed behavior: just a name and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCase {
    name: String,
    value: CaseValue,
}

impl BaseCase {
    pub fn new(name: impl Into<String>, value: impl Into<CaseValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl EnumCase for BaseCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &CaseValue {
        &self.value
    }
}

impl fmt::Display for BaseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Constructor for [`BaseCase`]; never fails. The default case type when no
/// behavior is composed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseCaseType;

impl CaseConstruct for BaseCaseType {
    type Case = BaseCase;

    fn construct(&self, name: &str, value: &CaseValue) -> Result<BaseCase, ConstructError> {
        Ok(BaseCase::new(name, value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_is_value_string() {
        let case = BaseCase::new("PENDING", "pending");
        assert_eq!(case.render(), "pending");
        assert_eq!(case.to_string(), "pending");

        let case = BaseCase::new("ADMIN", 1);
        assert_eq!(case.to_string(), "1");
    }
}
