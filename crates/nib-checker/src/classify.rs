//! Method-name classification.
//!
//! A pure step run before any stateful processing: the name alone decides
//! which accessor role a method could play and which property it belongs to.

/// Accessor role suggested by a method name, with the derived property name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodKind {
    Getter(String),
    BooleanGetter(String),
    Setter(String),
    ChainSetter(String),
    Unsupported,
}

/// Longest prefix first.
const PREFIXES: [(&str, fn(String) -> MethodKind); 4] = [
    ("with", MethodKind::ChainSetter),
    ("get", MethodKind::Getter),
    ("set", MethodKind::Setter),
    ("is", MethodKind::BooleanGetter),
];

pub fn classify_method_name(name: &str) -> MethodKind {
    for (prefix, make) in PREFIXES {
        if let Some(property) = property_name(name, prefix) {
            return make(property);
        }
    }
    MethodKind::Unsupported
}

/// Property name of `name` under `prefix`: the character after the prefix
/// must exist and be upper-case; it is lower-cased and the rest kept as is
/// (`getURL` → `uRL`).
pub fn property_name(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_uppercase() {
        return None;
    }
    let mut property: String = first.to_lowercase().collect();
    property.push_str(chars.as_str());
    Some(property)
}

#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod tests;
