//! Backing primitive values for enum cases.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The backing primitive of an enum case: a string or a number.
///
/// Values never coerce across kinds: `Num(1.0)` and `Str("1")` are distinct
/// keys in every lookup. Within the numeric kind, `-0.0` and every NaN
/// payload are canonicalized so each behaves as a single reverse-index key,
/// the way a JS object key table treats them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseValue {
    Str(String),
    Num(f64),
}

impl CaseValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Num(_) => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Str(_) => None,
            Self::Num(n) => Some(*n),
        }
    }

    /// Canonical bit pattern for hashing and equality: `-0.0` folds into
    /// `0.0`, all NaNs fold into one quiet NaN.
    fn num_bits(n: f64) -> u64 {
        if n == 0.0 {
            0.0f64.to_bits()
        } else if n.is_nan() {
            f64::NAN.to_bits()
        } else {
            n.to_bits()
        }
    }
}

impl PartialEq for CaseValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Num(a), Self::Num(b)) => Self::num_bits(*a) == Self::num_bits(*b),
            _ => false,
        }
    }
}

impl Eq for CaseValue {}

impl Hash for CaseValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Str(s) => {
                state.write_u8(0);
                s.hash(state);
            }
            Self::Num(n) => {
                state.write_u8(1);
                state.write_u64(Self::num_bits(*n));
            }
        }
    }
}

impl fmt::Display for CaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            // Rust's f64 display already renders integral values without a
            // trailing `.0`, matching the string form callers expect.
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CaseValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for CaseValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for CaseValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i64> for CaseValue {
    fn from(n: i64) -> Self {
        Self::Num(n as f64)
    }
}

impl From<i32> for CaseValue {
    fn from(n: i32) -> Self {
        Self::Num(f64::from(n))
    }
}

impl From<u32> for CaseValue {
    fn from(n: u32) -> Self {
        Self::Num(f64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(value: &CaseValue) -> u64 {
        use std::hash::BuildHasher;
        std::collections::hash_map::RandomState::new().hash_one(value)
    }

    #[test]
    fn test_no_cross_kind_equality() {
        assert_ne!(CaseValue::from(1), CaseValue::from("1"));
        assert_ne!(CaseValue::from("0"), CaseValue::from(0));
    }

    #[test]
    fn test_numeric_canonicalization() {
        assert_eq!(CaseValue::Num(-0.0), CaseValue::Num(0.0));
        assert_eq!(CaseValue::Num(f64::NAN), CaseValue::Num(-f64::NAN));
        assert_ne!(CaseValue::Num(1.0), CaseValue::Num(2.0));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        // Same RandomState would be needed for a strict check; instead rely on
        // num_bits being the sole hashed payload.
        assert_eq!(
            CaseValue::num_bits(-0.0),
            CaseValue::num_bits(0.0),
        );
        assert_eq!(
            CaseValue::num_bits(f64::NAN),
            CaseValue::num_bits(f64::from_bits(0x7ff8_0000_0000_0001)),
        );
        // Smoke test that hashing itself is stable for equal values.
        let a = CaseValue::Num(42.0);
        let b = CaseValue::Num(42.0);
        assert_eq!(a, b);
        let _ = hash_of(&a);
    }

    #[test]
    fn test_display_matches_js_string_form() {
        assert_eq!(CaseValue::from(3).to_string(), "3");
        assert_eq!(CaseValue::from(2.5).to_string(), "2.5");
        assert_eq!(CaseValue::from("pending").to_string(), "pending");
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let v: CaseValue = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(v, CaseValue::from("active"));
        let v: CaseValue = serde_json::from_str("7").unwrap();
        assert_eq!(v, CaseValue::from(7));
        assert_eq!(serde_json::to_string(&CaseValue::from("a")).unwrap(), "\"a\"");
    }
}
