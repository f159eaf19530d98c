//! Type environment
//!
//! An immutable description of the types a module knows about. It decides
//! how values are named in diagnostics and which kinds carry which
//! capabilities. Extending an environment returns a new one.

use std::sync::Arc;

use crate::builtins::BuiltinRegistry;
use crate::capability::{Capabilities, Concat, ToBoolean};
use crate::kind::Kind;
use crate::types::NullaryType;
use crate::value::Value;

#[derive(Clone)]
pub struct Environment {
    types: Arc<[NullaryType]>,
    capabilities: Arc<Capabilities>,
}

impl Environment {
    pub fn new(types: Vec<NullaryType>, capabilities: Capabilities) -> Self {
        Self {
            types: types.into(),
            capabilities: Arc::new(capabilities),
        }
    }

    pub fn types(&self) -> &[NullaryType] {
        &self.types
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn lookup(&self, name: &str) -> Option<&NullaryType> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// A copy of this environment that also knows `ty`
    pub fn with_type(&self, ty: NullaryType) -> Self {
        let mut types = self.types.to_vec();
        types.push(ty);
        Self {
            types: types.into(),
            capabilities: self.capabilities.clone(),
        }
    }

    pub fn with_boolean(&self, kind: Kind, to_boolean: ToBoolean) -> Self {
        let capabilities = (*self.capabilities).clone().with_boolean(kind, to_boolean);
        Self {
            types: self.types.clone(),
            capabilities: Arc::new(capabilities),
        }
    }

    pub fn with_semigroup(&self, kind: Kind, concat: Concat) -> Self {
        let capabilities = (*self.capabilities).clone().with_semigroup(kind, concat);
        Self {
            types: self.types.clone(),
            capabilities: Arc::new(capabilities),
        }
    }

    /// Names of the environment types `value` belongs to, in environment
    /// order. Falls back to the kind name when none match.
    pub fn classify(&self, value: &Value) -> Vec<String> {
        let names: Vec<String> = self
            .types
            .iter()
            .filter(|t| t.test(value))
            .map(|t| t.name().to_string())
            .collect();
        if names.is_empty() {
            vec![value.kind().name().to_string()]
        } else {
            names
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(BuiltinRegistry::new().default_env(), Capabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    #[test]
    fn test_classify_default() {
        let env = Environment::default();
        assert_eq!(env.classify(&Value::from(true)), vec!["Boolean"]);
        assert_eq!(env.classify(&Value::array(vec![])), vec!["Array"]);
        assert_eq!(env.classify(&crate::adt::just(Value::Null)), vec!["Maybe"]);
    }

    #[test]
    fn test_extension_is_persistent() {
        let env = Environment::default();
        let finite = builtins::finite_number().as_nullary().unwrap().clone();
        let extended = env.with_type(finite);
        assert_eq!(
            extended.classify(&Value::from(1)),
            vec!["Number", "FiniteNumber"]
        );
        assert_eq!(env.classify(&Value::from(1)), vec!["Number"]);
    }

    #[test]
    fn test_classify_falls_back_to_kind() {
        let env = Environment::new(Vec::new(), Capabilities::empty());
        assert_eq!(env.classify(&Value::Date(0.0)), vec!["Date"]);
    }
}
