//! Behavior modules: independently defined method sets intended to be merged
//! into a case type.

use std::fmt;
use std::sync::Arc;

use casekit_common::CaseValue;

/// Borrowed view of a case handed to behavior methods.
///
/// Modules never own case state; name and value live in the case itself and
/// methods only derive from them.
#[derive(Clone, Copy, Debug)]
pub struct CaseView<'a> {
    pub name: &'a str,
    pub value: &'a CaseValue,
}

/// One composed method: derives a value from the case view.
pub type MethodFn = Arc<dyn Fn(CaseView<'_>) -> CaseValue + Send + Sync>;

/// A named, ordered set of methods.
///
/// Composition copies the method closures by `Arc` clone and never mutates
/// the module, so the same modules may be composed repeatedly in different
/// orders.
#[derive(Clone)]
pub struct BehaviorModule {
    name: &'static str,
    methods: Vec<(String, MethodFn)>,
}

impl BehaviorModule {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            methods: Vec::new(),
        }
    }

    /// Adds a named method. Defining the same name twice within one module is
    /// allowed; the later definition wins at composition time, consistent
    /// with the cross-module override order.
    pub fn method(
        mut self,
        method_name: impl Into<String>,
        f: impl Fn(CaseView<'_>) -> CaseValue + Send + Sync + 'static,
    ) -> Self {
        self.methods.push((method_name.into(), Arc::new(f)));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Method entries in definition order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &MethodFn)> {
        self.methods.iter().map(|(name, f)| (name.as_str(), f))
    }
}

impl fmt::Debug for BehaviorModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Method bodies are opaque closures; show names only.
        let methods: Vec<_> = self.methods.iter().map(|(name, _)| name).collect();
        f.debug_struct("BehaviorModule")
            .field("name", &self.name)
            .field("methods", &methods)
            .finish()
    }
}
