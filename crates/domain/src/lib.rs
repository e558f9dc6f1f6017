//! Confref Domain - Variable reference types
//!
//! This crate defines the typed descriptors produced when a configuration
//! reference such as `var.region` or `aws_instance.web.*.id` is parsed.
//! All types here are immutable values with no I/O dependencies.

pub mod error;
pub mod variable;

pub use error::{ReferenceError, ReferenceResult};
pub use variable::{
    InstanceIndex, ResourceMapVariable, ResourceVariable, USER_VARIABLE_PREFIX, UserMapVariable,
    UserVariable, Variable, VariableKind,
};
