//! Type constraints

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A named type with a structural membership test
#[derive(Clone)]
pub struct NullaryType {
    name: Arc<str>,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl NullaryType {
    pub fn new<F>(name: &str, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test(&self, value: &Value) -> bool {
        !value.is_placeholder() && (self.test)(value)
    }
}

impl fmt::Debug for NullaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NullaryType({})", self.name)
    }
}

impl PartialEq for NullaryType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Capabilities a type variable can require of its values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Has a notion of truth (`to_boolean`)
    BooleanLike,
    /// Supports `concat`
    Semigroup,
}

impl TypeClass {
    pub fn name(&self) -> &'static str {
        match self {
            TypeClass::BooleanLike => "BooleanLike",
            TypeClass::Semigroup => "Semigroup",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
struct VarInfo {
    name: String,
    classes: Vec<TypeClass>,
}

/// A type variable. Clones share identity; separately created variables
/// never unify with each other, whatever their names.
#[derive(Debug, Clone)]
pub struct TypeVar(Arc<VarInfo>);

impl TypeVar {
    pub fn new(name: &str) -> Self {
        Self::constrained(name, Vec::new())
    }

    pub fn constrained(name: &str, classes: Vec<TypeClass>) -> Self {
        TypeVar(Arc::new(VarInfo {
            name: name.to_string(),
            classes,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn classes(&self) -> &[TypeClass] {
        &self.0.classes
    }

    /// Whether both refer to the same variable
    pub fn same(&self, other: &TypeVar) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TypeVar {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

/// One parameter's requirement
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Nullary(NullaryType),
    /// Anything except `null` and `undefined`
    Accessible,
    /// Values standing in for a type: anything callable
    TypeRep,
    Var(TypeVar),
}

impl Type {
    pub fn nullary<F>(name: &str, test: F) -> Type
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Type::Nullary(NullaryType::new(name, test))
    }

    pub fn var(name: &str) -> Type {
        Type::Var(TypeVar::new(name))
    }

    pub fn constrained(name: &str, classes: Vec<TypeClass>) -> Type {
        Type::Var(TypeVar::constrained(name, classes))
    }

    pub fn as_nullary(&self) -> Option<&NullaryType> {
        match self {
            Type::Nullary(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_var(&self) -> Option<&TypeVar> {
        match self {
            Type::Var(v) => Some(v),
            _ => None,
        }
    }
}

impl From<NullaryType> for Type {
    fn from(t: NullaryType) -> Self {
        Type::Nullary(t)
    }
}

impl From<TypeVar> for Type {
    fn from(v: TypeVar) -> Self {
        Type::Var(v)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Nullary(t) => f.write_str(t.name()),
            Type::Accessible => f.write_str("Accessible"),
            Type::TypeRep => f.write_str("TypeRep"),
            Type::Var(v) => f.write_str(v.name()),
        }
    }
}
