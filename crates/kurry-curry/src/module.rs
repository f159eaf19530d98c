//! Module factory
//!
//! A `Module` is a self-contained set of curried functions bound to one
//! set of options. Nothing is shared between modules.

use std::collections::BTreeMap;
use std::sync::Arc;

use kurry_types::{Environment, Error, Function, Signature, Type, Value};

use crate::config::Options;
use crate::curry::CurriedFunction;
use crate::prelude;

pub struct Module {
    options: Options,
    functions: BTreeMap<String, CurriedFunction>,
}

/// Create a module with the representative library registered.
pub fn create(options: Options) -> Module {
    let mut module = Module {
        options,
        functions: BTreeMap::new(),
    };
    prelude::register(&mut module);
    module
}

impl Module {
    /// Curry `implementation` over `params`. The parameter count is the arity.
    pub fn def<F>(
        &self,
        name: impl Into<String>,
        params: Vec<Type>,
        implementation: F,
    ) -> CurriedFunction
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        CurriedFunction::new(
            Signature::new(name, params),
            self.options.env.clone(),
            self.options.check_types,
            Arc::new(implementation),
        )
    }

    pub(crate) fn export(&mut self, function: CurriedFunction) {
        self.functions.insert(function.name().to_string(), function);
    }

    pub fn is(&self, ty: &Type, value: &Value) -> bool {
        kurry_types::is(&self.options.env, ty, value)
    }

    pub fn get(&self, name: &str) -> Option<&CurriedFunction> {
        self.functions.get(name)
    }

    /// Registered functions, by name
    pub fn functions(&self) -> impl Iterator<Item = &CurriedFunction> {
        self.functions.values()
    }

    /// A type representative for the environment type `name`: a unary
    /// function answering membership.
    pub fn type_rep(&self, name: &str) -> Option<Value> {
        let ty = self.options.env.lookup(name)?.clone();
        let rep = Function::native(name, 1, move |_, args| {
            Ok(Value::Boolean(args.first().is_some_and(|v| ty.test(v))))
        });
        Some(Value::Function(rep))
    }

    pub fn env(&self) -> &Environment {
        &self.options.env
    }

    pub fn check_types(&self) -> bool {
        self.options.check_types
    }
}
