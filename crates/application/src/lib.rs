//! Confref Application - Reference parsing and resolution
//!
//! Classifies raw reference strings, parses them into
//! [`confref_domain::Variable`] descriptors and resolves them against a
//! caller-supplied value mapping. Everything here is synchronous and pure.

pub mod reference;

pub use confref_domain::{ReferenceError, ReferenceResult};
pub use reference::{
    Interpolation, ReferenceResolver, ResolutionReport, ValueSource, VariableInventory,
    new_interpolated_variable, new_interpolation, parse_variable,
};
