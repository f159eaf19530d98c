//! # Kurry Types
//!
//! Value model and run-time type registry for the kurry curry engine.
//! Values are classified structurally into a closed set of kinds; type
//! constraints test membership against those kinds, and the checker turns
//! failures into fixed-format diagnostics.

mod value;
mod kind;
mod repr;
mod types;
mod env;
mod capability;
mod signature;
mod helpers;
mod error;
mod checker;
pub mod adt;
pub mod builtins;

// Re-export public API
pub use value::{Callable, Function, Tagged, Value, __};
pub use kind::Kind;
pub use repr::format_number;
pub use types::{NullaryType, Type, TypeClass, TypeVar};
pub use env::Environment;
pub use capability::{Capabilities, Concat, ToBoolean};
pub use signature::{RenderedSignature, Signature};
pub use helpers::{arguments, number_word, ordinal};
pub use error::{Error, ErrorKind, Witness};
pub use checker::{is, TypeChecker};
pub use builtins::BuiltinRegistry;

// =============================================================================
// Tests
// =============================================================================
