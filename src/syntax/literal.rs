//! Literal argument classification and type compatibility.

use std::fmt;

use crate::types::{ParamType, TypeName};

/// Type of a literal argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    String,
    Boolean,
    Null,
    Integer,
    Float,
}

impl LiteralType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralType::String => "String",
            LiteralType::Boolean => "Boolean",
            LiteralType::Null => "Null",
            LiteralType::Integer => "Integer",
            LiteralType::Float => "Float",
        }
    }

    /// The parameter type name this literal matches exactly.
    fn type_name(&self) -> TypeName {
        match self {
            LiteralType::String => TypeName::String,
            LiteralType::Boolean => TypeName::Boolean,
            LiteralType::Null => TypeName::Null,
            LiteralType::Integer => TypeName::Integer,
            LiteralType::Float => TypeName::Float,
        }
    }

    fn is_number(&self) -> bool {
        matches!(self, LiteralType::Integer | LiteralType::Float)
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Classify trimmed argument text as a literal.
///
/// Returns `None` for identifiers, nested calls and every other expression;
/// those are never type-checked.
pub fn classify(text: &str) -> Option<LiteralType> {
    if text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'') {
        return Some(LiteralType::String);
    }

    match text {
        "true" | "false" => return Some(LiteralType::Boolean),
        "null" => return Some(LiteralType::Null),
        _ => {}
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if is_digits(unsigned) {
        return Some(LiteralType::Integer);
    }
    match unsigned.split_once('.') {
        Some((whole, fraction)) if is_digits(whole) && is_digits(fraction) => {
            Some(LiteralType::Float)
        }
        _ => None,
    }
}

/// Check whether a literal can be passed where `expected` is declared.
pub fn is_compatible(literal: LiteralType, expected: &ParamType) -> bool {
    match expected {
        ParamType::Any => true,
        ParamType::Union(members) => {
            members.contains(&literal.type_name())
                || (literal.is_number() && members.iter().any(TypeName::is_numeric))
                || (literal != LiteralType::String && members.contains(&TypeName::String))
        }
        ParamType::Exact(name) => {
            if *name == literal.type_name() {
                return true;
            }
            match name {
                TypeName::String => matches!(
                    literal,
                    LiteralType::Integer | LiteralType::Float | LiteralType::Boolean
                ),
                TypeName::Float => literal == LiteralType::Integer,
                TypeName::NumberLike => literal.is_number(),
                _ => false,
            }
        }
    }
}
