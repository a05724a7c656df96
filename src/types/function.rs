//! Function signature types for workflow expressions.
//!
//! `FunctionDef` is a row of the static signature table. The registry turns
//! each row into a `FunctionSignature`, parsing the textual parameter type
//! descriptors into `ParamType` values once, so compatibility checks never
//! have to re-split strings.

use std::fmt;

/// Raw definition of a workflow function, as written in the builtin table.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    /// Canonical display spelling (e.g. "addDays")
    pub name: &'static str,
    /// Minimum number of arguments
    pub min_args: usize,
    /// Maximum number of arguments, `None` when unbounded
    pub max_args: Option<usize>,
    /// Parameter type descriptors (e.g. "NumberLike | String")
    pub param_types: &'static [&'static str],
    /// Return type descriptor, used for display only
    pub return_type: &'static str,
    /// Description of what the function does
    pub description: &'static str,
}

/// Accepted argument counts for a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    /// Returns true if the function can take more than its required arguments.
    pub fn accepts_more(&self) -> bool {
        self.max.map_or(true, |max| max > self.min)
    }
}

/// A concrete type name appearing in a parameter descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    String,
    Boolean,
    Null,
    Integer,
    Float,
    Number,
    NumberLike,
    Object,
    Array,
    Collection,
    TimestampString,
    Base64String,
    DataUriString,
    UriString,
    XmlObject,
    XmlString,
    /// A name the analyser has no special knowledge of.
    Other(&'static str),
}

impl TypeName {
    fn parse(name: &'static str) -> Self {
        match name {
            "String" => TypeName::String,
            "Boolean" => TypeName::Boolean,
            "Null" => TypeName::Null,
            "Integer" => TypeName::Integer,
            "Float" => TypeName::Float,
            "Number" => TypeName::Number,
            "NumberLike" => TypeName::NumberLike,
            "Object" => TypeName::Object,
            "Array" => TypeName::Array,
            "Collection" => TypeName::Collection,
            "TimestampString" => TypeName::TimestampString,
            "Base64String" => TypeName::Base64String,
            "DataUriString" => TypeName::DataUriString,
            "UriString" => TypeName::UriString,
            "XmlObject" => TypeName::XmlObject,
            "XmlString" => TypeName::XmlString,
            other => TypeName::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::String => "String",
            TypeName::Boolean => "Boolean",
            TypeName::Null => "Null",
            TypeName::Integer => "Integer",
            TypeName::Float => "Float",
            TypeName::Number => "Number",
            TypeName::NumberLike => "NumberLike",
            TypeName::Object => "Object",
            TypeName::Array => "Array",
            TypeName::Collection => "Collection",
            TypeName::TimestampString => "TimestampString",
            TypeName::Base64String => "Base64String",
            TypeName::DataUriString => "DataUriString",
            TypeName::UriString => "UriString",
            TypeName::XmlObject => "XmlObject",
            TypeName::XmlString => "XmlString",
            TypeName::Other(name) => *name,
        }
    }

    /// Returns true for the numeric names that accept any number literal
    /// inside a union.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TypeName::NumberLike | TypeName::Number | TypeName::Integer | TypeName::Float
        )
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected type of a single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Wildcard: `Any` or `mixed`, compatible with everything.
    Any,
    /// A single concrete type name.
    Exact(TypeName),
    /// A `|`-separated set of acceptable names, in declaration order.
    Union(Vec<TypeName>),
}

impl ParamType {
    /// Parse a descriptor such as `"String"`, `"Any"` or `"NumberLike | String"`.
    ///
    /// A union containing a wildcard collapses to `ParamType::Any`.
    pub fn parse(descriptor: &'static str) -> Self {
        let mut names = Vec::new();
        for part in descriptor.split('|') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if is_wildcard(part) {
                return ParamType::Any;
            }
            names.push(TypeName::parse(part));
        }

        match names.len() {
            0 => ParamType::Any,
            1 => ParamType::Exact(names[0]),
            _ => ParamType::Union(names),
        }
    }
}

fn is_wildcard(name: &str) -> bool {
    name.eq_ignore_ascii_case("any") || name.eq_ignore_ascii_case("mixed")
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Any => f.write_str("Any"),
            ParamType::Exact(name) => write!(f, "{}", name),
            ParamType::Union(names) => {
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", name)?;
                }
                Ok(())
            }
        }
    }
}

/// A registered function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub arity: Arity,
    /// Declared parameter types. When shorter than the argument list, the
    /// last entry applies to every trailing argument.
    pub param_types: Vec<ParamType>,
    pub return_type: &'static str,
    pub description: &'static str,
}

impl FunctionSignature {
    pub fn from_def(def: &FunctionDef) -> Self {
        Self {
            name: def.name,
            arity: Arity {
                min: def.min_args,
                max: def.max_args,
            },
            param_types: def.param_types.iter().map(|&d| ParamType::parse(d)).collect(),
            return_type: def.return_type,
            description: def.description,
        }
    }

    /// Expected type for the argument at `index`, applying vararg semantics.
    pub fn expected_type(&self, index: usize) -> ParamType {
        self.param_types
            .get(index)
            .or_else(|| self.param_types.last())
            .cloned()
            .unwrap_or(ParamType::Any)
    }

    /// Plain signature label, e.g. `addDays(TimestampString, Integer, [String]) -> TimestampString`.
    ///
    /// Optional parameters are bracketed; an unbounded signature ends in `...`.
    pub fn label(&self) -> String {
        let shown = match self.arity.max {
            Some(max) => max,
            None => self.arity.min.max(self.param_types.len()),
        };

        let mut params: Vec<String> = (0..shown)
            .map(|i| {
                let ty = self.expected_type(i).to_string();
                if i < self.arity.min {
                    ty
                } else {
                    format!("[{}]", ty)
                }
            })
            .collect();
        if self.arity.max.is_none() {
            params.push("...".to_string());
        }

        format!("{}({}) -> {}", self.name, params.join(", "), self.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(min: usize, max: Option<usize>, param_types: &'static [&'static str]) -> FunctionSignature {
        FunctionSignature::from_def(&FunctionDef {
            name: "f",
            min_args: min,
            max_args: max,
            param_types,
            return_type: "Any",
            description: "",
        })
    }

    #[test]
    fn parses_exact_descriptor() {
        assert_eq!(ParamType::parse("String"), ParamType::Exact(TypeName::String));
        assert_eq!(
            ParamType::parse("TimestampString"),
            ParamType::Exact(TypeName::TimestampString)
        );
    }

    #[test]
    fn parses_union_descriptor() {
        assert_eq!(
            ParamType::parse("NumberLike | String"),
            ParamType::Union(vec![TypeName::NumberLike, TypeName::String])
        );
    }

    #[test]
    fn wildcard_anywhere_is_any() {
        assert_eq!(ParamType::parse("Any"), ParamType::Any);
        assert_eq!(ParamType::parse("mixed"), ParamType::Any);
        assert_eq!(ParamType::parse("Object | Array | Any"), ParamType::Any);
    }

    #[test]
    fn unknown_names_are_preserved() {
        assert_eq!(
            ParamType::parse("BinaryString"),
            ParamType::Exact(TypeName::Other("BinaryString"))
        );
        assert_eq!(ParamType::parse("BinaryString").to_string(), "BinaryString");
    }

    #[test]
    fn union_displays_with_separator() {
        assert_eq!(
            ParamType::parse("String|Array |Object").to_string(),
            "String | Array | Object"
        );
    }

    #[test]
    fn expected_type_uses_last_for_varargs() {
        let s = sig(2, None, &["Boolean"]);
        assert_eq!(s.expected_type(0), ParamType::Exact(TypeName::Boolean));
        assert_eq!(s.expected_type(5), ParamType::Exact(TypeName::Boolean));
    }

    #[test]
    fn expected_type_defaults_to_any() {
        let s = sig(0, Some(0), &[]);
        assert_eq!(s.expected_type(0), ParamType::Any);
    }

    #[test]
    fn label_marks_optional_and_variadic() {
        assert_eq!(
            sig(2, Some(3), &["TimestampString", "Integer", "String"]).label(),
            "f(TimestampString, Integer, [String]) -> Any"
        );
        assert_eq!(sig(2, None, &["String"]).label(), "f(String, String, ...) -> Any");
        assert_eq!(sig(0, Some(0), &[]).label(), "f() -> Any");
    }

    #[test]
    fn arity_accepts_more() {
        assert!(Arity { min: 1, max: None }.accepts_more());
        assert!(Arity { min: 1, max: Some(2) }.accepts_more());
        assert!(!Arity { min: 2, max: Some(2) }.accepts_more());
    }
}
