//! Curried functions
//!
//! A `CurriedFunction` pairs a definition (signature, implementation,
//! environment) with a snapshot of the slots filled so far. Applying it
//! never mutates the receiver: each step yields either a new snapshot or
//! the implementation's result.

use std::fmt;
use std::sync::Arc;

use kurry_types::{Callable, Environment, Error, Function, Signature, Type, TypeChecker, Value};
use log::{debug, trace};

/// The wrapped function: receives `this` and the filled arguments in declared order.
pub type Implementation = Arc<dyn Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync>;

struct Definition {
    signature: Signature,
    implementation: Implementation,
    env: Environment,
    check_types: bool,
}

/// Outcome of one application
#[derive(Debug, Clone)]
pub enum Applied {
    /// Some slots are still unfilled
    Partial(CurriedFunction),
    /// Every slot was filled and the implementation ran
    Complete(Value),
}

impl Applied {
    /// The result, or the partial function as a function value
    pub fn into_value(self) -> Value {
        match self {
            Applied::Partial(f) => f.to_value(),
            Applied::Complete(value) => value,
        }
    }

    pub fn partial(self) -> Option<CurriedFunction> {
        match self {
            Applied::Partial(f) => Some(f),
            Applied::Complete(_) => None,
        }
    }

    pub fn complete(self) -> Option<Value> {
        match self {
            Applied::Partial(_) => None,
            Applied::Complete(value) => Some(value),
        }
    }
}

#[derive(Clone)]
pub struct CurriedFunction {
    def: Arc<Definition>,
    pending: Arc<[Option<Value>]>,
}

impl CurriedFunction {
    pub(crate) fn new(
        signature: Signature,
        env: Environment,
        check_types: bool,
        implementation: Implementation,
    ) -> Self {
        debug!("defining {}", signature);
        let pending = vec![None; signature.arity()].into();
        Self {
            def: Arc::new(Definition {
                signature,
                implementation,
                env,
                check_types,
            }),
            pending,
        }
    }

    /// Declare the return type shown in the signature.
    pub fn returning(self, returns: Type) -> Self {
        let def = Definition {
            signature: self.def.signature.clone().with_returns(returns),
            implementation: self.def.implementation.clone(),
            env: self.def.env.clone(),
            check_types: self.def.check_types,
        };
        Self {
            def: Arc::new(def),
            pending: self.pending,
        }
    }

    pub fn name(&self) -> &str {
        self.def.signature.name()
    }

    pub fn signature(&self) -> &Signature {
        &self.def.signature
    }

    /// The signature over the unfilled slots only
    pub fn remaining_signature(&self) -> Signature {
        let params: Vec<Type> = self
            .unfilled()
            .map(|i| self.def.signature.params()[i].clone())
            .collect();
        let remaining = Signature::new(self.name(), params);
        match self.def.signature.returns() {
            Some(returns) => remaining.with_returns(returns.clone()),
            None => remaining,
        }
    }

    /// Number of unfilled slots
    pub fn arity(&self) -> usize {
        self.pending.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn is_checked(&self) -> bool {
        self.def.check_types
    }

    fn unfilled(&self) -> impl Iterator<Item = usize> + '_ {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
    }

    pub fn apply(&self, args: &[Value]) -> Result<Applied, Error> {
        self.apply_with(&Value::Undefined, args)
    }

    /// Apply `args` to the unfilled slots, left to right. Placeholders leave
    /// their slot unfilled; trailing ones past the last slot are ignored.
    /// The implementation runs with `this` once every slot is filled.
    pub fn apply_with(&self, this: &Value, args: &[Value]) -> Result<Applied, Error> {
        let open: Vec<usize> = self.unfilled().collect();
        let concrete = args.iter().filter(|arg| !arg.is_placeholder()).count();
        if concrete > open.len() {
            return Err(Error::arity(self.name(), open.len(), concrete));
        }
        // A concrete argument positioned past the last unfilled slot
        let reach = args
            .iter()
            .rposition(|arg| !arg.is_placeholder())
            .map_or(0, |i| i + 1);
        if reach > open.len() {
            return Err(Error::arity(self.name(), open.len(), reach));
        }

        let checker = TypeChecker::new(&self.def.env, &self.def.signature);
        let mut pending = self.pending.to_vec();
        for (arg, &slot) in args.iter().zip(&open) {
            if arg.is_placeholder() {
                continue;
            }
            if self.def.check_types {
                checker.check(&pending, slot, arg)?;
            }
            trace!("{}: filled slot {} with {}", self.name(), slot, arg);
            pending[slot] = Some(arg.clone());
        }

        if pending.iter().all(Option::is_some) {
            debug!("{}: saturated, invoking implementation", self.name());
            let values: Vec<Value> = pending.into_iter().flatten().collect();
            let result = (self.def.implementation)(this, &values)?;
            return Ok(Applied::Complete(result));
        }

        Ok(Applied::Partial(Self {
            def: self.def.clone(),
            pending: pending.into(),
        }))
    }

    /// Apply and flatten the outcome into a value.
    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        self.apply(args).map(Applied::into_value)
    }

    pub fn to_value(&self) -> Value {
        Value::Function(Function::new(self.clone()))
    }
}

impl Callable for CurriedFunction {
    fn name(&self) -> &str {
        CurriedFunction::name(self)
    }

    fn arity(&self) -> usize {
        CurriedFunction::arity(self)
    }

    fn call_with(&self, this: &Value, args: &[Value]) -> Result<Value, Error> {
        self.apply_with(this, args).map(Applied::into_value)
    }
}

impl From<CurriedFunction> for Value {
    fn from(f: CurriedFunction) -> Self {
        f.to_value()
    }
}

impl fmt::Debug for CurriedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurriedFunction")
            .field("signature", &self.def.signature.to_string())
            .field("pending", &self.pending)
            .finish()
    }
}
