//! JSON input format: the declarations visible in one processing round.

use serde::{Deserialize, Serialize};

/// Kind of a declaration as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    #[default]
    Interface,
    Class,
    Enum,
    Annotation,
}

fn default_true() -> bool {
    true
}

fn default_void() -> String {
    "void".to_string()
}

/// One round of declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRound {
    #[serde(default)]
    pub declarations: Vec<DeclarationSource>,
    /// The host already failed in this round; it is skipped.
    #[serde(default)]
    pub error_raised: bool,
}

impl SourceRound {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationSource {
    /// Fully-qualified name, e.g. `org.nibeans.example.Car`.
    pub name: String,
    #[serde(default)]
    pub kind: DeclKind,
    /// Marked as a bean candidate.
    #[serde(default = "default_true")]
    pub bean: bool,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Directly extended interfaces, as type strings.
    #[serde(default)]
    pub bases: Vec<String>,
    /// Directly declared methods.
    #[serde(default)]
    pub methods: Vec<MethodSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSource {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default = "default_void")]
    pub returns: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
}
