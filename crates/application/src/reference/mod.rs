//! Reference parsing and interpolation
//!
//! Parses dotted configuration references into typed variables and resolves
//! them against a mapping of known values.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use confref_application::reference::{ReferenceResolver, VariableInventory, new_interpolation};
//!
//! let interpolations = vec![
//!     new_interpolation("var.region").unwrap(),
//!     new_interpolation("aws_instance.web.*.id").unwrap(),
//! ];
//!
//! let inventory: VariableInventory = interpolations.iter().collect();
//! assert_eq!(inventory.resource_ids().len(), 1);
//!
//! let values = HashMap::from([("var.region".to_string(), "eu-west-1".to_string())]);
//! let report = ReferenceResolver::new(values).resolve_all(&interpolations);
//! assert_eq!(report.value_of("var.region"), Some("eu-west-1"));
//! assert_eq!(report.unresolved, vec!["aws_instance.web.*.id"]);
//! ```

pub mod engine;
pub mod factory;
pub mod interpolation;
pub mod inventory;
pub mod parser;

pub use engine::{ReferenceResolver, ResolutionReport, ResolvedReference};
pub use factory::{is_bare_reference, new_interpolated_variable, new_interpolation};
pub use interpolation::{Interpolation, ValueSource, VariableInterpolation};
pub use inventory::VariableInventory;
pub use parser::parse_variable;
