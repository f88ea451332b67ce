//! Field descriptors served by the `/api/schema/kr` endpoint.

use serde::{Deserialize, Serialize};

/// One choice in a select control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// How a field is entered.
///
/// The backend emits `"select"` for option-constrained fields and
/// `"number"` for free numeric entry; any kind we do not recognise is
/// treated as free entry. `Input` serializes back to the wire's
/// `"number"` so descriptors round-trip losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Select,
    #[serde(rename = "number", other)]
    Input,
}

/// Schema-provided description of one form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl FieldDescriptor {
    /// Whether `raw` is an accepted value for this field.
    ///
    /// Free-entry fields accept anything non-empty; a select only accepts
    /// one of its option values. A select with no options accepts nothing.
    pub fn accepts(&self, raw: &str) -> bool {
        match self.kind {
            FieldKind::Input => true,
            FieldKind::Select => self.options.iter().any(|opt| opt.value == raw),
        }
    }

    /// Label for a stored option value, falling back to the value itself.
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label.as_str())
            .unwrap_or(value)
    }
}
