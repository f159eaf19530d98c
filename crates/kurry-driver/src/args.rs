//! Argument parsing
//!
//! Each word is JSON, except `__` (the placeholder) and `@name`, which
//! names a module function or an environment type representative.

use kurry_curry::Module;
use kurry_types::{Value, __};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgError {
    #[error("argument {position}: {source}")]
    Json {
        position: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("argument {position}: no function or type named ‘{name}’")]
    UnknownName { position: usize, name: String },
}

/// Parse the word at 1-based `position`.
pub fn parse_arg(module: &Module, position: usize, word: &str) -> Result<Value, ArgError> {
    if word == "__" {
        return Ok(__);
    }
    if let Some(name) = word.strip_prefix('@') {
        return module
            .get(name)
            .map(|f| f.to_value())
            .or_else(|| module.type_rep(name))
            .ok_or_else(|| ArgError::UnknownName {
                position,
                name: name.to_string(),
            });
    }
    serde_json::from_str::<serde_json::Value>(word)
        .map(Value::from)
        .map_err(|source| ArgError::Json { position, source })
}

pub fn parse_args(module: &Module, words: &[String]) -> Result<Vec<Value>, ArgError> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| parse_arg(module, i + 1, word))
        .collect()
}
