//! Backed-enum runtime collections with composable case behavior.
//!
//! Turns a plain name → value mapping into a collection of singleton,
//! identity-stable case objects supporting ordered iteration, named access,
//! and safe reverse lookup — with optional behavior merged in from
//! independent modules.
//!
//! ```
//! use casekit::{BackedEnum, EnumCase, EnumDefinition};
//!
//! let roles = BackedEnum::of(
//!     &EnumDefinition::new()
//!         .case("ADMIN", 1)
//!         .case("USER", 2)
//!         .case("GUEST", 3),
//! );
//!
//! assert_eq!(roles["ADMIN"].name(), "ADMIN");
//! assert_eq!(roles.from(2).map(|case| case.name()), Some("USER"));
//! assert!(roles.from(999).is_none());
//! ```
//!
//! Behavior composition merges method tables in supplied order, later
//! modules overriding earlier ones:
//!
//! ```
//! use casekit::{BackedEnum, BehaviorModule, CaseValue, EnumDefinition, TO_STRING, compose};
//!
//! let stringable = BehaviorModule::new("stringable")
//!     .method(TO_STRING, |view| CaseValue::from(view.name));
//! let statuses = BackedEnum::build(
//!     &EnumDefinition::new().case("PENDING", "pending"),
//!     &compose(&[stringable]),
//! )
//! .unwrap();
//!
//! assert_eq!(statuses["PENDING"].to_string(), "PENDING");
//! ```

pub use casekit_common::{
    BaseCase, BaseCaseType, CaseConstruct, CaseValue, ConstructError, DefinitionError,
    EnumCase, EnumDefinition,
};
pub use casekit_compose::{
    BehaviorModule, CaseView, ComposedCase, ComposedCaseType, MethodFn, TO_STRING, compose,
};
pub use casekit_enum::{BackedEnum, CaseId};
