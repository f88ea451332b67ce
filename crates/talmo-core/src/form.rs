//! Form state: holds the loaded field list plus the values entered so far,
//! and turns them into a submission payload once every field is filled.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::field::{FieldDescriptor, FieldKind};

/// Why a payload could not be collected. Shown to the user verbatim;
/// submission never reaches the network when this fires.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("'{label}' is required but empty")]
    Missing { label: String },
    #[error("'{value}' is not an option for '{label}'")]
    NotAnOption { label: String, value: String },
    #[error("no field with id '{0}'")]
    UnknownField(String),
}

/// The loaded form: one control per field descriptor, in schema order.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FieldDescriptor>,
    values: HashMap<String, String>,
}

impl Form {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            values: HashMap::new(),
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Store a value for a field. The raw input is trimmed; storing an
    /// empty string clears the field.
    pub fn set_value(&mut self, id: &str, raw: &str) -> Result<(), ValidationError> {
        if !self.fields.iter().any(|f| f.id == id) {
            return Err(ValidationError::UnknownField(id.to_string()));
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.values.remove(id);
        } else {
            self.values.insert(id.to_string(), trimmed.to_string());
        }
        Ok(())
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Fields that have no stored value yet, in schema order.
    pub fn missing(&self) -> Vec<&FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| !self.values.contains_key(&f.id))
            .collect()
    }

    /// Collect the submission payload: trimmed values keyed by field id,
    /// exactly one entry per field.
    ///
    /// Fails on the first field (in schema order) that is empty, or whose
    /// stored value a select control would not accept.
    pub fn payload(&self) -> Result<BTreeMap<String, String>, ValidationError> {
        let mut payload = BTreeMap::new();
        for field in &self.fields {
            let value = self
                .values
                .get(&field.id)
                .ok_or_else(|| ValidationError::Missing {
                    label: field.label.clone(),
                })?;
            if field.kind == FieldKind::Select && !field.accepts(value) {
                return Err(ValidationError::NotAnOption {
                    label: field.label.clone(),
                    value: value.clone(),
                });
            }
            payload.insert(field.id.clone(), value.clone());
        }
        Ok(payload)
    }
}

/// Format a probability percentage for display: two decimals, `%` suffix.
pub fn format_probability(value: f64) -> String {
    format!("{value:.2}%")
}
