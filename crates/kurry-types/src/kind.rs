//! Structural classification of values

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// The observed type of a value. Two values unify under a type variable
/// exactly when their kinds are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Undefined,
    Boolean,
    Number,
    String,
    Array,
    Function,
    Object,
    Date,
    RegExp,
    Error,
    /// User-defined algebraic type, by type identifier
    Tagged(Arc<str>),
    Placeholder,
}

impl Kind {
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Undefined => Kind::Undefined,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Function(_) => Kind::Function,
            Value::Date(_) => Kind::Date,
            Value::RegExp { .. } => Kind::RegExp,
            Value::Error { .. } => Kind::Error,
            Value::Tagged(t) => Kind::Tagged(t.type_name.clone()),
            Value::Placeholder => Kind::Placeholder,
        }
    }

    pub fn tagged(type_name: &str) -> Kind {
        Kind::Tagged(type_name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Kind::Null => "Null",
            Kind::Undefined => "Undefined",
            Kind::Boolean => "Boolean",
            Kind::Number => "Number",
            Kind::String => "String",
            Kind::Array => "Array",
            Kind::Function => "Function",
            Kind::Object => "Object",
            Kind::Date => "Date",
            Kind::RegExp => "RegExp",
            Kind::Error => "Error",
            Kind::Tagged(name) => name,
            Kind::Placeholder => "Placeholder",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
