//! Insertion-ordered enum definitions and their boundary adapters.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde_json::Value as JsonValue;

use crate::error::DefinitionError;
use crate::value::CaseValue;

type DefinitionMap = IndexMap<String, CaseValue, FxBuildHasher>;

/// A mapping from case name to backing primitive value, in insertion order.
///
/// Names are unique by construction. Re-inserting an existing name replaces
/// its value but keeps the original position, per `IndexMap` semantics. The
/// definition is the factory's input contract and is expected to be free of
/// synthetic reverse entries; dictionaries derived from numeric enums go
/// through [`EnumDefinition::from_reverse_mapped`] first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumDefinition {
    entries: DefinitionMap,
}

impl EnumDefinition {
    pub fn new() -> Self {
        Self {
            entries: DefinitionMap::default(),
        }
    }

    /// Builder-style insert.
    pub fn case(mut self, name: impl Into<String>, value: impl Into<CaseValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CaseValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&CaseValue> {
        self.entries.get(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CaseValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Adapter for dictionaries derived from numeric enumerations, whose
    /// object form carries a synthetic `value -> name` back-reference for
    /// each member (`E[E["A"] = 0] = "A"` leaves both `"A"` and `"0"` as
    /// keys). A key is synthetic when coercing it to a number the way JS
    /// `Number(key)` does would not yield NaN; those keys are dropped,
    /// everything else is kept in iteration order.
    pub fn from_reverse_mapped<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<CaseValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut definition = Self::new();
        for (name, value) in pairs {
            let name = name.into();
            if is_numeric_key(&name) {
                continue;
            }
            definition.entries.insert(name, value.into());
        }
        definition
    }

    /// Reads a definition from a JSON object, preserving member order.
    ///
    /// Values must be strings or numbers; anything else is rejected. This
    /// adapter does not filter synthetic reverse entries — feed its output
    /// through [`EnumDefinition::from_reverse_mapped`] when the object came
    /// from a numeric enumeration.
    pub fn from_json_object(json: &JsonValue) -> Result<Self, DefinitionError> {
        let JsonValue::Object(members) = json else {
            return Err(DefinitionError::NotAnObject);
        };
        let mut definition = Self::new();
        for (name, value) in members {
            let value = match value {
                JsonValue::String(s) => CaseValue::Str(s.clone()),
                JsonValue::Number(n) => match n.as_f64() {
                    Some(n) => CaseValue::Num(n),
                    None => {
                        return Err(DefinitionError::UnsupportedValue { key: name.clone() });
                    }
                },
                _ => {
                    return Err(DefinitionError::UnsupportedValue { key: name.clone() });
                }
            };
            definition.entries.insert(name.clone(), value);
        }
        Ok(definition)
    }
}

impl<K: Into<String>, V: Into<CaseValue>> FromIterator<(K, V)> for EnumDefinition {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut definition = Self::new();
        for (name, value) in iter {
            definition.insert(name, value);
        }
        definition
    }
}

/// Approximates JS `Number(key)` coercion: the empty (or whitespace-only)
/// string coerces to `0`, and trimmed float syntax parses. `"NaN"` parses but
/// coerces to NaN, so it is a real member name, not a synthetic key.
fn is_numeric_key(key: &str) -> bool {
    let trimmed = key.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(|n| !n.is_nan())
}
