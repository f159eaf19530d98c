//! Type-class capabilities, dispatched on a value's kind

use std::collections::HashMap;

use crate::adt::{self, EITHER, MAYBE};
use crate::kind::Kind;
use crate::types::TypeClass;
use crate::value::Value;

pub type ToBoolean = fn(&Value) -> bool;

/// Combines two values of the same kind; `None` if the contents cannot be combined.
pub type Concat = fn(&Capabilities, &Value, &Value) -> Option<Value>;

/// Dispatch tables for `BooleanLike` and `Semigroup`
#[derive(Clone)]
pub struct Capabilities {
    boolean: HashMap<Kind, ToBoolean>,
    semigroup: HashMap<Kind, Concat>,
}

impl Capabilities {
    pub fn empty() -> Self {
        Self {
            boolean: HashMap::new(),
            semigroup: HashMap::new(),
        }
    }

    pub fn with_boolean(mut self, kind: Kind, to_boolean: ToBoolean) -> Self {
        self.boolean.insert(kind, to_boolean);
        self
    }

    pub fn with_semigroup(mut self, kind: Kind, concat: Concat) -> Self {
        self.semigroup.insert(kind, concat);
        self
    }

    pub fn satisfies(&self, class: TypeClass, value: &Value) -> bool {
        let kind = value.kind();
        match class {
            TypeClass::BooleanLike => self.boolean.contains_key(&kind),
            TypeClass::Semigroup => self.semigroup.contains_key(&kind),
        }
    }

    pub fn to_boolean(&self, value: &Value) -> Option<bool> {
        self.boolean.get(&value.kind()).map(|f| f(value))
    }

    /// `None` unless both values have the same kind and that kind is a semigroup.
    pub fn concat(&self, a: &Value, b: &Value) -> Option<Value> {
        let kind = a.kind();
        if kind != b.kind() {
            return None;
        }
        let concat = self.semigroup.get(&kind)?;
        concat(self, a, b)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
            .with_boolean(Kind::Boolean, |v| v.as_bool().unwrap_or(false))
            .with_boolean(Kind::Array, |v| v.as_array().is_some_and(|xs| !xs.is_empty()))
            .with_boolean(Kind::tagged(MAYBE), adt::is_just)
            .with_boolean(Kind::tagged(EITHER), |v| {
                matches!(adt::from_either(v), Some(Ok(_)))
            })
            .with_semigroup(Kind::String, concat_strings)
            .with_semigroup(Kind::Array, concat_arrays)
            .with_semigroup(Kind::tagged(MAYBE), concat_maybes)
    }
}

fn concat_strings(_: &Capabilities, a: &Value, b: &Value) -> Option<Value> {
    Some(Value::from(format!("{}{}", a.as_str()?, b.as_str()?)))
}

fn concat_arrays(_: &Capabilities, a: &Value, b: &Value) -> Option<Value> {
    let items: Vec<Value> = a.as_array()?.iter().chain(b.as_array()?).cloned().collect();
    Some(Value::array(items))
}

fn concat_maybes(caps: &Capabilities, a: &Value, b: &Value) -> Option<Value> {
    match (adt::from_just(a), adt::from_just(b)) {
        (Some(x), Some(y)) => caps.concat(x, y).map(adt::just),
        (Some(_), None) => Some(a.clone()),
        (None, _) => Some(b.clone()),
    }
}
