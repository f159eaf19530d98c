//! Printed representation of values, and conversion from JSON

use std::fmt;

use time::OffsetDateTime;

use crate::value::Value;

/// Shortest round-trip form, laid out the way JavaScript prints numbers:
/// plain decimals for exponents in `-7 < e < 21`, `1e+21` style otherwise.
/// `-0`, `NaN` and `Infinity` are spelled out.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if n == 0.0 {
        let s = if n.is_sign_negative() { "-0" } else { "0" };
        return s.to_string();
    }

    // `{:e}` yields the shortest digits as `d[.ddd]e<exp>`
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if point > 0 { '+' } else { '-' };
        let frac = if rest.is_empty() { String::new() } else { format!(".{}", rest) };
        format!("{}{}e{}{}", lead, frac, sign, (point - 1).abs())
    };
    if n < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Largest magnitude a date may hold, in milliseconds
const MAX_DATE_MS: f64 = 8.64e15;

/// `YYYY-MM-DDTHH:MM:SS.sssZ`; `None` when the calendar cannot represent it.
fn format_date(ms: f64) -> Option<String> {
    if !ms.is_finite() || ms.abs() > MAX_DATE_MS {
        return None;
    }
    let nanos = (ms.trunc() as i128).checked_mul(1_000_000)?;
    let at = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;
    let year = match at.year() {
        y @ 0..=9999 => format!("{:04}", y),
        y if y < 0 => format!("-{:06}", -y),
        y => format!("+{:06}", y),
    };
    Some(format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
        at.millisecond()
    ))
}

fn quote(s: &str) -> serde_json::Value {
    serde_json::Value::from(s)
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => write!(f, "{}", quote(s)),
            Value::Array(items) => {
                f.write_str("[")?;
                write_list(f, items)?;
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", quote(key), value)?;
                }
                f.write_str("}")
            }
            Value::Function(func) => write!(f, "[Function: {}]", func.name()),
            Value::Date(ms) => match format_date(*ms) {
                Some(iso) => write!(f, "new Date({})", quote(&iso)),
                None if ms.is_nan() => f.write_str("new Date(NaN)"),
                None => write!(f, "new Date({})", format_number(*ms)),
            },
            Value::RegExp { source, flags } => write!(f, "/{}/{}", source, flags),
            Value::Error { name, message } => write!(f, "new {}({})", name, quote(message)),
            Value::Tagged(t) => {
                write!(f, "{}(", t.variant)?;
                write_list(f, &t.fields)?;
                f.write_str(")")
            }
            Value::Placeholder => f.write_str("__"),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}
