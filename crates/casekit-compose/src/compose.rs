//! Merging behavior modules onto the base case contract.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use casekit_common::{CaseConstruct, CaseValue, ConstructError, EnumCase};

use crate::module::{BehaviorModule, CaseView, MethodFn};

/// Method name of the base rendering contract.
pub const TO_STRING: &str = "toString";

type MethodTable = IndexMap<String, MethodFn, FxBuildHasher>;

/// Builds a constructible case type whose instances satisfy the base
/// contract plus the union of the supplied modules' method contracts.
///
/// The method table is seeded with the base `toString` (string form of the
/// backing value), then each module's methods are copied over it in supplied
/// order. Override order is left-to-right with last-wins, for module-vs-base
/// and module-vs-module conflicts alike; there is no conflict error. Pure:
/// the modules are not mutated and no other state is touched.
pub fn compose(modules: &[BehaviorModule]) -> ComposedCaseType {
    let mut table = MethodTable::default();
    let base_to_string: MethodFn = Arc::new(|view| CaseValue::Str(view.value.to_string()));
    table.insert(TO_STRING.to_owned(), base_to_string);
    for module in modules {
        for (method_name, f) in module.entries() {
            table.insert(method_name.to_owned(), Arc::clone(f));
        }
    }
    ComposedCaseType {
        table: Arc::new(table),
    }
}

/// The product of [`compose`]: a case type carrying the merged method table.
///
/// Every case it constructs shares the table by `Arc`, so composing once and
/// constructing many cases duplicates no behavior state.
#[derive(Clone)]
pub struct ComposedCaseType {
    table: Arc<MethodTable>,
}

impl ComposedCaseType {
    /// Method names in table order (base `toString` first, then module
    /// methods in first-definition order).
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl CaseConstruct for ComposedCaseType {
    type Case = ComposedCase;

    fn construct(&self, name: &str, value: &CaseValue) -> Result<ComposedCase, ConstructError> {
        Ok(ComposedCase {
            name: name.to_owned(),
            value: value.clone(),
            table: Arc::clone(&self.table),
        })
    }
}

impl fmt::Debug for ComposedCaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<_> = self.method_names().collect();
        f.debug_struct("ComposedCaseType")
            .field("methods", &methods)
            .finish()
    }
}

/// An enum case with composed behavior attached.
#[derive(Clone)]
pub struct ComposedCase {
    name: String,
    value: CaseValue,
    table: Arc<MethodTable>,
}

impl ComposedCase {
    /// Invokes a composed method; `None` when neither a module nor the base
    /// contract defines it.
    pub fn call(&self, method: &str) -> Option<CaseValue> {
        let f = self.table.get(method)?;
        Some(f(self.view()))
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    fn view(&self) -> CaseView<'_> {
        CaseView {
            name: &self.name,
            value: &self.value,
        }
    }
}

impl EnumCase for ComposedCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &CaseValue {
        &self.value
    }

    fn render(&self) -> String {
        // The table always carries a toString entry; the fallback only
        // protects against a hand-built table without one.
        match self.call(TO_STRING) {
            Some(rendered) => rendered.to_string(),
            None => self.value.to_string(),
        }
    }
}

impl fmt::Display for ComposedCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for ComposedCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedCase")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_module(label: &'static str) -> BehaviorModule {
        BehaviorModule::new(label).method("label", move |_| CaseValue::from(label))
    }

    fn build_case(case_type: &ComposedCaseType) -> ComposedCase {
        case_type
            .construct("USER", &CaseValue::from(2))
            .expect("composed construction is infallible")
    }

    #[test]
    fn test_base_to_string_seed() {
        let case_type = compose(&[]);
        let case = build_case(&case_type);
        assert_eq!(case.render(), "2");
        assert_eq!(case.to_string(), "2");
        assert_eq!(case.call(TO_STRING), Some(CaseValue::from("2")));
    }

    #[test]
    fn test_override_order_is_caller_controlled() {
        let first = label_module("first");
        let second = label_module("second");

        let case = build_case(&compose(&[first.clone(), second.clone()]));
        assert_eq!(case.call("label"), Some(CaseValue::from("second")));

        // Reversed order flips the winner; the modules were not mutated by
        // the first composition.
        let case = build_case(&compose(&[second, first]));
        assert_eq!(case.call("label"), Some(CaseValue::from("first")));
    }

    #[test]
    fn test_module_overrides_base_to_string() {
        let stringable = BehaviorModule::new("stringable")
            .method(TO_STRING, |view| CaseValue::from(view.name));
        let case = build_case(&compose(&[stringable]));
        assert_eq!(case.to_string(), "USER");
    }

    #[test]
    fn test_later_definition_wins_within_module() {
        let module = BehaviorModule::new("m")
            .method("f", |_| CaseValue::from(1))
            .method("f", |_| CaseValue::from(2));
        let case = build_case(&compose(&[module]));
        assert_eq!(case.call("f"), Some(CaseValue::from(2)));
    }

    #[test]
    fn test_unknown_method_is_none() {
        let case = build_case(&compose(&[]));
        assert_eq!(case.call("missing"), None);
    }

    #[test]
    fn test_methods_see_case_state() {
        let doubler = BehaviorModule::new("doubler").method("double", |view| {
            match view.value.as_num() {
                Some(n) => CaseValue::from(n * 2.0),
                None => view.value.clone(),
            }
        });
        let case = build_case(&compose(&[doubler]));
        assert_eq!(case.call("double"), Some(CaseValue::from(4)));
    }
}
