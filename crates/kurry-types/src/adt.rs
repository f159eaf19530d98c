//! Maybe and Either values

use crate::value::{Tagged, Value};

pub const MAYBE: &str = "Maybe";
pub const EITHER: &str = "Either";

pub fn just(value: Value) -> Value {
    Tagged::new(MAYBE, "Just", vec![value]).into()
}

pub fn nothing() -> Value {
    Tagged::new(MAYBE, "Nothing", vec![]).into()
}

pub fn left(value: Value) -> Value {
    Tagged::new(EITHER, "Left", vec![value]).into()
}

pub fn right(value: Value) -> Value {
    Tagged::new(EITHER, "Right", vec![value]).into()
}

fn variant<'a>(value: &'a Value, type_name: &str) -> Option<(&'a str, Option<&'a Value>)> {
    let tagged = value.as_tagged()?;
    if &*tagged.type_name != type_name {
        return None;
    }
    Some((&tagged.variant, tagged.fields.first()))
}

/// The contents of a `Just`, `None` for `Nothing` or a non-Maybe value.
pub fn from_just(value: &Value) -> Option<&Value> {
    match variant(value, MAYBE)? {
        ("Just", inner) => inner,
        _ => None,
    }
}

pub fn is_just(value: &Value) -> bool {
    from_just(value).is_some()
}

pub fn is_nothing(value: &Value) -> bool {
    matches!(variant(value, MAYBE), Some(("Nothing", _)))
}

/// `Ok` with the contents of a `Right`, `Err` with the contents of a `Left`.
pub fn from_either(value: &Value) -> Option<Result<&Value, &Value>> {
    match variant(value, EITHER)? {
        ("Right", Some(inner)) => Some(Ok(inner)),
        ("Left", Some(inner)) => Some(Err(inner)),
        _ => None,
    }
}
