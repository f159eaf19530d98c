//! Call errors and their rendered messages
//!
//! The rendered text is relied upon by callers, so every variant's
//! wording is fixed:
//!
//! ```text
//! Invalid value
//!
//! add :: FiniteNumber -> FiniteNumber -> FiniteNumber
//!                        ^^^^^^^^^^^^
//!                                   1
//!
//! 1)  true :: Boolean
//!
//! The second argument to ‘add’ is not a member of ‘FiniteNumber’.
//! ```

use std::fmt;

use crate::env::Environment;
use crate::helpers;
use crate::signature::RenderedSignature;
use crate::types::TypeClass;
use crate::value::Value;

/// An offending value, captured for the message
#[derive(Debug, Clone, PartialEq)]
pub struct Witness {
    /// Parameter index (0-based)
    pub index: usize,
    pub repr: String,
    /// Classified type names
    pub types: Vec<String>,
}

impl Witness {
    pub fn new(env: &Environment, index: usize, value: &Value) -> Self {
        Self {
            index,
            repr: value.to_string(),
            types: env.classify(value),
        }
    }
}

/// Error kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// More arguments than unfilled slots
    ArityMismatch { expected: usize, found: usize },
    /// Value is not a member of the parameter's type
    InvalidValue {
        index: usize,
        expected: String,
        witness: Witness,
    },
    /// `null` or `undefined` where property access is required
    Inaccessible { index: usize, witness: Witness },
    /// Values sharing a type variable have different types
    TypeVarViolation { var: String, witnesses: Vec<Witness> },
    /// Value lacks a capability its type variable requires
    TypeClassViolation {
        var: String,
        class: TypeClass,
        witness: Witness,
    },
    /// Argument outside the range a function accepts
    Range(String),
    /// Generic error message
    Generic(String),
}

/// Error raised by applying a function
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    /// Name of the function being applied
    pub name: String,
    pub signature: Option<RenderedSignature>,
}

impl Error {
    pub fn new(
        kind: ErrorKind,
        name: impl Into<String>,
        signature: Option<RenderedSignature>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            signature,
        }
    }

    pub fn arity(name: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, found }, name, None)
    }

    pub fn range(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range(message.into()), name, None)
    }

    pub fn generic(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Generic(message.into()), name, None)
    }

    /// Headline, signature with markers, and the numbered values
    fn write_block(
        &self,
        f: &mut fmt::Formatter<'_>,
        headline: &str,
        witnesses: &[&Witness],
    ) -> fmt::Result {
        writeln!(f, "{}", headline)?;
        writeln!(f)?;
        if let Some(signature) = &self.signature {
            let marks: Vec<(usize, usize)> = witnesses
                .iter()
                .enumerate()
                .map(|(n, w)| (w.index, n + 1))
                .collect();
            let (marker, labels) = signature.underline(&marks);
            writeln!(f, "{}", signature.text)?;
            writeln!(f, "{}", marker)?;
            writeln!(f, "{}", labels)?;
            writeln!(f)?;
        }
        for (n, witness) in witnesses.iter().enumerate() {
            writeln!(f, "{})  {} :: {}", n + 1, witness.repr, witness.types.join(", "))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::ArityMismatch { expected, found } => write!(
                f,
                "‘{}’ requires {}; received {}.",
                self.name,
                helpers::arguments(*expected),
                helpers::arguments(*found)
            ),
            ErrorKind::InvalidValue {
                index,
                expected,
                witness,
            } => {
                self.write_block(f, "Invalid value", &[witness])?;
                write!(
                    f,
                    "The {} argument to ‘{}’ is not a member of ‘{}’.",
                    helpers::ordinal(index + 1),
                    self.name,
                    expected
                )
            }
            ErrorKind::Inaccessible { index, witness } => {
                self.write_block(f, "Inaccessible value", &[witness])?;
                write!(
                    f,
                    "The {} argument to ‘{}’ cannot be null or undefined.",
                    helpers::ordinal(index + 1),
                    self.name
                )
            }
            ErrorKind::TypeVarViolation { witnesses, .. } => {
                let witnesses: Vec<&Witness> = witnesses.iter().collect();
                self.write_block(f, "Type-variable constraint violation", &witnesses)?;
                write!(
                    f,
                    "Since there is no type of which all the above values are members, \
                     the type-variable constraint has been violated."
                )
            }
            ErrorKind::TypeClassViolation { var, class, witness } => {
                self.write_block(f, "Type-class constraint violation", &[witness])?;
                write!(
                    f,
                    "‘{}’ requires ‘{}’ to satisfy the {} type-class constraint; \
                     the value at position 1 does not.",
                    self.name, var, class
                )
            }
            ErrorKind::Range(msg) | ErrorKind::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}
