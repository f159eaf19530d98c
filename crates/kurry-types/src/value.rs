//! Dynamic values

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::kind::Kind;

/// The placeholder: supplying it defers the argument at that position.
pub const __: Value = Value::Placeholder;

/// Anything that can be applied to a list of arguments.
pub trait Callable: Send + Sync {
    fn name(&self) -> &str;

    /// Number of arguments still expected
    fn arity(&self) -> usize;

    fn call_with(&self, this: &Value, args: &[Value]) -> Result<Value, Error>;
}

/// A shared reference to a callable. Identity is by reference.
#[derive(Clone)]
pub struct Function(Arc<dyn Callable>);

impl Function {
    pub fn new(callable: impl Callable + 'static) -> Self {
        Self(Arc::new(callable))
    }

    /// Wrap a closure as a function value.
    pub fn native<F>(name: impl Into<String>, arity: usize, f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    {
        Self::new(Native {
            name: name.into(),
            arity,
            f,
        })
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn arity(&self) -> usize {
        self.0.arity()
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        self.0.call_with(&Value::Undefined, args)
    }

    pub fn call_with(&self, this: &Value, args: &[Value]) -> Result<Value, Error> {
        self.0.call_with(this, args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name())
    }
}

struct Native<F> {
    name: String,
    arity: usize,
    f: F,
}

impl<F> Callable for Native<F>
where
    F: Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call_with(&self, this: &Value, args: &[Value]) -> Result<Value, Error> {
        (self.f)(this, args)
    }
}

/// A value of a user-defined algebraic type, e.g. `Just(42)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    /// Type identifier; values of one type share it
    pub type_name: Arc<str>,
    pub variant: Arc<str>,
    pub fields: Arc<[Value]>,
}

impl Tagged {
    pub fn new(type_name: &str, variant: &str, fields: Vec<Value>) -> Self {
        Self {
            type_name: type_name.into(),
            variant: variant.into(),
            fields: fields.into(),
        }
    }
}

/// Dynamic value
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Undefined,
    Boolean(bool),
    Number(f64),
    String(Arc<str>),
    Array(Arc<[Value]>),
    Object(Arc<BTreeMap<String, Value>>),
    Function(Function),
    /// Milliseconds since the epoch (NaN for an invalid date)
    Date(f64),
    RegExp {
        source: Arc<str>,
        flags: Arc<str>,
    },
    Error {
        name: Arc<str>,
        message: Arc<str>,
    },
    Tagged(Tagged),
    Placeholder,
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(s.as_ref().into())
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn regexp(source: &str, flags: &str) -> Self {
        Value::RegExp {
            source: source.into(),
            flags: flags.into(),
        }
    }

    pub fn error(name: &str, message: &str) -> Self {
        Value::Error {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> Kind {
        Kind::of(self)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Value::Placeholder)
    }

    /// `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_tagged(&self) -> Option<&Tagged> {
        match self {
            Value::Tagged(t) => Some(t),
            _ => None,
        }
    }

    /// Loose truthiness: `false`, `0`, `NaN`, `""`, `null` and `undefined` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null | Value::Undefined | Value::Placeholder => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Loose numeric conversion.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Boolean(b) => f64::from(u8::from(*b)),
            Value::Null => 0.0,
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Value::Date(ms) => *ms,
            _ => f64::NAN,
        }
    }

    /// Property access. `None` when the property does not exist.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.get(key).cloned(),
            Value::Array(items) => match key {
                "length" => Some(Value::Number(items.len() as f64)),
                _ => key.parse::<usize>().ok().and_then(|i| items.get(i).cloned()),
            },
            // Length and indices both count UTF-16 code units; a lone
            // surrogate half reads as U+FFFD.
            Value::String(s) => match key {
                "length" => Some(Value::Number(s.encode_utf16().count() as f64)),
                _ => key
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| s.encode_utf16().nth(i))
                    .map(|unit| Value::string(String::from_utf16_lossy(&[unit]))),
            },
            Value::Function(f) => match key {
                "name" => Some(Value::string(f.name())),
                "length" => Some(Value::Number(f.arity() as f64)),
                _ => None,
            },
            Value::RegExp { source, flags } => match key {
                "source" => Some(Value::String(source.clone())),
                "flags" => Some(Value::String(flags.clone())),
                _ => None,
            },
            Value::Error { name, message } => match key {
                "name" => Some(Value::String(name.clone())),
                "message" => Some(Value::String(message.clone())),
                _ => None,
            },
            Value::Tagged(t) => match key {
                "type" => Some(Value::String(t.type_name.clone())),
                "value" if t.fields.len() == 1 => Some(t.fields[0].clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null)
            | (Value::Undefined, Value::Undefined)
            | (Value::Placeholder, Value::Placeholder) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Date(a), Value::Date(b)) => a == b || (a.is_nan() && b.is_nan()),
            (
                Value::RegExp { source, flags },
                Value::RegExp {
                    source: s2,
                    flags: f2,
                },
            ) => source == s2 && flags == f2,
            (
                Value::Error { name, message },
                Value::Error {
                    name: n2,
                    message: m2,
                },
            ) => name == n2 && message == m2,
            (Value::Tagged(a), Value::Tagged(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Tagged> for Value {
    fn from(t: Tagged) -> Self {
        Value::Tagged(t)
    }
}
