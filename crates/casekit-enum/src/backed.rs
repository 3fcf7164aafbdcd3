//! Backed-enum collections: singleton case sets addressable by name, by
//! ordered position, and by reverse value lookup.

use std::fmt;
use std::ops::Index;

use rustc_hash::FxHashMap;
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use casekit_common::{
    BaseCase, CaseConstruct, CaseValue, ConstructError, EnumCase, EnumDefinition,
};

/// Position of a case within its owning collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaseId(u32);

impl CaseId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A collection of singleton enum cases.
///
/// Built once from an [`EnumDefinition`] and structurally frozen thereafter:
/// no accessor can change the case order, the name index, or the reverse
/// index, so a finished collection is safe to share across readers. Every
/// access path — [`BackedEnum::get`], indexing, [`BackedEnum::cases`],
/// [`BackedEnum::from`] — resolves to the same slot, so a case name always
/// yields the same case reference.
///
/// When two cases share a backing value, the later one in definition order
/// wins the reverse index (last-write-wins); both stay reachable by name and
/// both appear in [`BackedEnum::cases`].
pub struct BackedEnum<C> {
    cases: Vec<C>,
    by_name: FxHashMap<String, CaseId>,
    reverse: FxHashMap<CaseValue, CaseId>,
}

impl<C: EnumCase> BackedEnum<C> {
    /// Materializes a collection from a definition and a case constructor.
    ///
    /// Single pass in definition order: construct the case, append it, and
    /// insert-or-overwrite its `value -> case` reverse entry. A constructor
    /// failure propagates immediately; no partially built collection is
    /// observable. An empty definition yields a valid empty collection.
    pub fn build<T>(definition: &EnumDefinition, case_type: &T) -> Result<Self, ConstructError>
    where
        T: CaseConstruct<Case = C>,
    {
        trace!(cases = definition.len(), "building backed enum");
        let mut collection = Self::with_capacity(definition.len());
        for (name, value) in definition.iter() {
            let case = case_type.construct(name, value)?;
            collection.push_case(case);
        }
        Ok(collection)
    }

    fn with_capacity(cases: usize) -> Self {
        Self {
            cases: Vec::with_capacity(cases),
            by_name: FxHashMap::default(),
            reverse: FxHashMap::default(),
        }
    }

    fn push_case(&mut self, case: C) {
        let id = CaseId(self.cases.len() as u32);
        self.by_name.insert(case.name().to_owned(), id);
        if let Some(prior) = self.reverse.insert(case.value().clone(), id) {
            debug!(
                value = %case.value(),
                prior = prior.index(),
                "duplicate backing value; later case wins reverse lookup"
            );
        }
        self.cases.push(case);
    }

    /// The cases in definition order.
    pub fn cases(&self) -> &[C] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cases.iter()
    }

    /// Named accessor: the case defined under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&C> {
        let id = self.by_name.get(name)?;
        self.cases.get(id.index())
    }

    /// Reverse lookup by backing value.
    ///
    /// Exact-match only: no coercion between string and number, no case
    /// folding. An absent value is a miss (`None`), never an error.
    pub fn from<V: Into<CaseValue>>(&self, value: V) -> Option<&C> {
        self.from_value(&value.into())
    }

    fn from_value(&self, value: &CaseValue) -> Option<&C> {
        let id = self.reverse.get(value)?;
        self.cases.get(id.index())
    }

    /// Idempotent lookup through an existing case: re-dispatches on the
    /// case's own backing value, so `from_case(c)` returns `c` itself unless
    /// a later case overwrote that value in the reverse index.
    pub fn from_case(&self, case: &C) -> Option<&C> {
        self.from_value(case.value())
    }

    /// Lookup from dynamically shaped input.
    ///
    /// JSON strings and numbers are looked up exactly; every other kind
    /// (null, booleans, arrays, objects) is the wrong shape of input, which
    /// this collection treats identically to "not found".
    pub fn from_json(&self, candidate: &JsonValue) -> Option<&C> {
        match candidate {
            JsonValue::String(s) => self.from_value(&CaseValue::Str(s.clone())),
            JsonValue::Number(n) => {
                let n = n.as_f64()?;
                self.from_value(&CaseValue::Num(n))
            }
            _ => None,
        }
    }

    /// The backing values in [`BackedEnum::cases`] order. Not deduplicated:
    /// a value shared by two cases appears twice.
    pub fn values(&self) -> Vec<CaseValue> {
        self.cases.iter().map(|case| case.value().clone()).collect()
    }
}

impl BackedEnum<BaseCase> {
    /// Builds a plain collection with no composed behavior; never fails.
    pub fn of(definition: &EnumDefinition) -> Self {
        let mut collection = Self::with_capacity(definition.len());
        for (name, value) in definition.iter() {
            collection.push_case(BaseCase::new(name, value.clone()));
        }
        collection
    }
}

impl<C: EnumCase> Index<&str> for BackedEnum<C> {
    type Output = C;

    /// Panics when no case is defined under `name`; [`BackedEnum::get`] is
    /// the total form.
    fn index(&self, name: &str) -> &C {
        match self.get(name) {
            Some(case) => case,
            None => panic!("no case named `{name}`"),
        }
    }
}

impl<'a, C: EnumCase> IntoIterator for &'a BackedEnum<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

impl<C: EnumCase + fmt::Debug> fmt::Debug for BackedEnum<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackedEnum")
            .field("cases", &self.cases)
            .finish()
    }
}
