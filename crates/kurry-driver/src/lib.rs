//! Kurry driver library
//!
//! Turns command-line words into values for `kurry call`.

pub mod args;

pub use args::{parse_arg, parse_args, ArgError};
