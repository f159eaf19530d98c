//! Built-in type registry
//!
//! Defines the nullary types every environment knows about, plus the
//! numeric refinements (`ValidNumber`, `FiniteNumber`, `Integer`) used by
//! library signatures.

use std::collections::HashMap;

use crate::adt::{EITHER, MAYBE};
use crate::kind::Kind;
use crate::types::{NullaryType, Type};
use crate::value::Value;

/// Largest integer a double represents exactly
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

type Predicate = fn(&Value) -> bool;

const BUILTINS: &[(&str, Predicate)] = &[
    ("Any", is_any),
    ("Array", is_array),
    ("Boolean", is_boolean),
    ("Date", is_date),
    ("Error", is_error),
    ("Function", is_function),
    ("Null", is_null),
    ("Number", is_number),
    ("Object", is_object),
    ("RegExp", is_regexp),
    ("String", is_string),
    ("Undefined", is_undefined),
    ("ValidNumber", is_valid_number),
    ("FiniteNumber", is_finite_number),
    ("Integer", is_integer),
    ("Maybe", is_maybe),
    ("Either", is_either),
];

/// Types named in diagnostics by default, in display order
const DEFAULT_ENV: &[&str] = &[
    "Array",
    "Boolean",
    "Date",
    "Error",
    "Function",
    "Null",
    "Number",
    "Object",
    "RegExp",
    "String",
    "Undefined",
    "Maybe",
    "Either",
];

fn is_any(_: &Value) -> bool {
    true
}

fn is_array(v: &Value) -> bool {
    v.kind() == Kind::Array
}

fn is_boolean(v: &Value) -> bool {
    v.kind() == Kind::Boolean
}

fn is_date(v: &Value) -> bool {
    v.kind() == Kind::Date
}

fn is_error(v: &Value) -> bool {
    v.kind() == Kind::Error
}

fn is_function(v: &Value) -> bool {
    v.kind() == Kind::Function
}

fn is_null(v: &Value) -> bool {
    v.kind() == Kind::Null
}

fn is_number(v: &Value) -> bool {
    v.kind() == Kind::Number
}

fn is_object(v: &Value) -> bool {
    v.kind() == Kind::Object
}

fn is_regexp(v: &Value) -> bool {
    v.kind() == Kind::RegExp
}

fn is_string(v: &Value) -> bool {
    v.kind() == Kind::String
}

fn is_undefined(v: &Value) -> bool {
    v.kind() == Kind::Undefined
}

fn is_valid_number(v: &Value) -> bool {
    v.as_number().is_some_and(|n| !n.is_nan())
}

fn is_finite_number(v: &Value) -> bool {
    v.as_number().is_some_and(f64::is_finite)
}

fn is_integer(v: &Value) -> bool {
    v.as_number()
        .is_some_and(|n| n.is_finite() && n.trunc() == n && n.abs() <= MAX_SAFE_INTEGER)
}

fn is_maybe(v: &Value) -> bool {
    v.kind() == Kind::tagged(MAYBE)
}

fn is_either(v: &Value) -> bool {
    v.kind() == Kind::tagged(EITHER)
}

fn builtin(name: &str, test: Predicate) -> Type {
    Type::Nullary(NullaryType::new(name, test))
}

/// Registry of built-in nullary types, by name
pub struct BuiltinRegistry {
    types: HashMap<&'static str, NullaryType>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let types = BUILTINS
            .iter()
            .map(|&(name, test)| (name, NullaryType::new(name, test)))
            .collect();
        Self { types }
    }

    pub fn get(&self, name: &str) -> Option<&NullaryType> {
        self.types.get(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// The types an environment names by default
    pub fn default_env(&self) -> Vec<NullaryType> {
        DEFAULT_ENV
            .iter()
            .filter_map(|name| self.get(name).cloned())
            .collect()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub fn any() -> Type {
    builtin("Any", is_any)
}

pub fn array() -> Type {
    builtin("Array", is_array)
}

pub fn boolean() -> Type {
    builtin("Boolean", is_boolean)
}

pub fn date() -> Type {
    builtin("Date", is_date)
}

pub fn error() -> Type {
    builtin("Error", is_error)
}

pub fn function() -> Type {
    builtin("Function", is_function)
}

pub fn null() -> Type {
    builtin("Null", is_null)
}

pub fn number() -> Type {
    builtin("Number", is_number)
}

pub fn object() -> Type {
    builtin("Object", is_object)
}

pub fn regexp() -> Type {
    builtin("RegExp", is_regexp)
}

pub fn string() -> Type {
    builtin("String", is_string)
}

pub fn undefined() -> Type {
    builtin("Undefined", is_undefined)
}

pub fn valid_number() -> Type {
    builtin("ValidNumber", is_valid_number)
}

pub fn finite_number() -> Type {
    builtin("FiniteNumber", is_finite_number)
}

pub fn integer() -> Type {
    builtin("Integer", is_integer)
}

pub fn maybe() -> Type {
    builtin("Maybe", is_maybe)
}

pub fn either() -> Type {
    builtin("Either", is_either)
}
