//! Function signatures and their rendering in diagnostics

use std::fmt;

use crate::types::{Type, TypeVar};

/// `name :: T1 -> T2 -> R`
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    name: String,
    params: Vec<Type>,
    returns: Option<Type>,
}

impl Signature {
    pub fn new(name: impl Into<String>, params: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            params,
            returns: None,
        }
    }

    pub fn with_returns(mut self, returns: Type) -> Self {
        self.returns = Some(returns);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Type] {
        &self.params
    }

    pub fn returns(&self) -> Option<&Type> {
        self.returns.as_ref()
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Constrained type variables, each once, in order of appearance
    fn constrained_vars(&self) -> Vec<&TypeVar> {
        let mut vars: Vec<&TypeVar> = Vec::new();
        for ty in self.params.iter().chain(self.returns.iter()) {
            if let Type::Var(var) = ty {
                if !var.classes().is_empty() && !vars.iter().any(|v| v.same(var)) {
                    vars.push(var);
                }
            }
        }
        vars
    }

    pub fn render(&self) -> RenderedSignature {
        let mut text = format!("{} :: ", self.name);

        let constraints: Vec<String> = self
            .constrained_vars()
            .into_iter()
            .flat_map(|var| {
                var.classes()
                    .iter()
                    .map(move |class| format!("{} {}", class, var.name()))
            })
            .collect();
        match constraints.len() {
            0 => {}
            1 => text.push_str(&format!("{} => ", constraints[0])),
            _ => text.push_str(&format!("({}) => ", constraints.join(", "))),
        }

        let mut spans = Vec::with_capacity(self.params.len());
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                text.push_str(" -> ");
            }
            let shown = param.to_string();
            spans.push((text.chars().count(), shown.chars().count()));
            text.push_str(&shown);
        }
        match (&self.returns, self.params.is_empty()) {
            (Some(returns), true) => text.push_str(&returns.to_string()),
            (Some(returns), false) => text.push_str(&format!(" -> {}", returns)),
            (None, true) => text.push_str("()"),
            (None, false) => {}
        }

        RenderedSignature { text, spans }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().text)
    }
}

/// A rendered signature with the column span of each parameter
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSignature {
    pub text: String,
    spans: Vec<(usize, usize)>,
}

impl RenderedSignature {
    /// `(start column, width)` of parameter `index`
    pub fn span(&self, index: usize) -> Option<(usize, usize)> {
        self.spans.get(index).copied()
    }

    /// Marker and label lines for `(parameter index, label)` pairs given in
    /// column order. Each label ends in the same column as its marker.
    pub fn underline(&self, marks: &[(usize, usize)]) -> (String, String) {
        let mut marker = String::new();
        let mut labels = String::new();
        for &(index, label) in marks {
            let Some((start, width)) = self.span(index) else {
                continue;
            };
            pad_to(&mut marker, start);
            marker.push_str(&"^".repeat(width));

            let label = label.to_string();
            let column = (start + width).saturating_sub(label.len());
            pad_to(&mut labels, column);
            if !labels.is_empty() && !labels.ends_with(' ') {
                labels.push(' ');
            }
            labels.push_str(&label);
        }
        (marker, labels)
    }
}

fn pad_to(line: &mut String, column: usize) {
    let len = line.chars().count();
    if len < column {
        line.push_str(&" ".repeat(column - len));
    }
}
