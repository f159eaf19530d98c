//! Argument validation

use log::trace;

use crate::env::Environment;
use crate::error::{Error, ErrorKind, Witness};
use crate::helpers;
use crate::signature::Signature;
use crate::types::Type;
use crate::value::Value;

/// Validates arguments against a signature within an environment
pub struct TypeChecker<'a> {
    env: &'a Environment,
    signature: &'a Signature,
}

impl<'a> TypeChecker<'a> {
    pub fn new(env: &'a Environment, signature: &'a Signature) -> Self {
        Self { env, signature }
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.signature.name(), Some(self.signature.render()))
    }

    /// Check `value` as the argument at `index`. `pending` holds the
    /// values already supplied to the other slots; only concrete siblings
    /// take part in type-variable unification.
    pub fn check(
        &self,
        pending: &[Option<Value>],
        index: usize,
        value: &Value,
    ) -> Result<(), Error> {
        trace!(
            "checking {} argument to {}",
            helpers::ordinal(index + 1),
            self.signature.name()
        );
        let Some(param) = self.signature.params().get(index) else {
            return Ok(());
        };

        match param {
            Type::Nullary(ty) => {
                if ty.test(value) {
                    Ok(())
                } else {
                    Err(self.error(ErrorKind::InvalidValue {
                        index,
                        expected: ty.name().to_string(),
                        witness: Witness::new(self.env, index, value),
                    }))
                }
            }
            Type::Accessible => {
                if value.is_nullish() {
                    Err(self.error(ErrorKind::Inaccessible {
                        index,
                        witness: Witness::new(self.env, index, value),
                    }))
                } else {
                    Ok(())
                }
            }
            Type::TypeRep => {
                if value.is_callable() {
                    Ok(())
                } else {
                    Err(self.error(ErrorKind::InvalidValue {
                        index,
                        expected: "Function".to_string(),
                        witness: Witness::new(self.env, index, value),
                    }))
                }
            }
            Type::Var(var) => {
                let capabilities = self.env.capabilities();
                if let Some(class) = var
                    .classes()
                    .iter()
                    .find(|class| !capabilities.satisfies(**class, value))
                {
                    return Err(self.error(ErrorKind::TypeClassViolation {
                        var: var.name().to_string(),
                        class: *class,
                        witness: Witness::new(self.env, index, value),
                    }));
                }

                let kind = value.kind();
                let mut consistent = true;
                let mut witnesses = Vec::new();
                for (slot, ty) in self.signature.params().iter().enumerate() {
                    match ty {
                        Type::Var(other) if other.same(var) => {}
                        _ => continue,
                    }
                    let observed = if slot == index {
                        Some(value)
                    } else {
                        pending.get(slot).and_then(Option::as_ref)
                    };
                    if let Some(observed) = observed {
                        consistent &= observed.kind() == kind;
                        witnesses.push(Witness::new(self.env, slot, observed));
                    }
                }

                if consistent {
                    Ok(())
                } else {
                    Err(self.error(ErrorKind::TypeVarViolation {
                        var: var.name().to_string(),
                        witnesses,
                    }))
                }
            }
        }
    }
}

/// Standalone membership test. Type variables accept any value that
/// satisfies their type classes.
pub fn is(env: &Environment, ty: &Type, value: &Value) -> bool {
    if value.is_placeholder() {
        return false;
    }
    match ty {
        Type::Nullary(t) => t.test(value),
        Type::Accessible => !value.is_nullish(),
        Type::TypeRep => value.is_callable(),
        Type::Var(var) => var
            .classes()
            .iter()
            .all(|class| env.capabilities().satisfies(*class, value)),
    }
}
