//! Per-index field configuration.
//!
//! A [`Schema`] maps field names to their analysis configuration so
//! field-driven analyze requests can resolve the right analyzer. Schemas are
//! serde-serializable; the CLI loads them from JSON files.
//!
//! # Examples
//!
//! ```
//! use lancea::schema::{FieldDefinition, Schema};
//!
//! let mut schema = Schema::new();
//! schema.add_field("title", FieldDefinition::with_analyzer("keyword")).unwrap();
//! schema.add_field("body", FieldDefinition::new()).unwrap();
//!
//! assert_eq!(schema.analyzer_name_for("title").unwrap(), "keyword");
//! // Fields without an explicit analyzer use the schema default.
//! assert_eq!(schema.analyzer_name_for("body").unwrap(), "standard");
//! assert!(schema.analyzer_name_for("missing").is_err());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LanceaError, Result};

fn default_analyzer_name() -> String {
    "standard".to_string()
}

/// Analysis configuration for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Analyzer name for this field; `None` falls back to the schema default.
    #[serde(default)]
    pub analyzer: Option<String>,
}

impl FieldDefinition {
    /// A field that uses the schema's default analyzer.
    pub fn new() -> Self {
        FieldDefinition { analyzer: None }
    }

    /// A field with an explicitly configured analyzer.
    pub fn with_analyzer<S: Into<String>>(name: S) -> Self {
        FieldDefinition {
            analyzer: Some(name.into()),
        }
    }
}

/// Field configuration for one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Map of field names to their definitions.
    #[serde(default)]
    fields: HashMap<String, FieldDefinition>,
    /// Analyzer name used by fields without an explicit one.
    #[serde(default = "default_analyzer_name")]
    default_analyzer: String,
}

impl Schema {
    /// Create an empty schema with `standard` as the default analyzer.
    pub fn new() -> Self {
        Schema {
            fields: HashMap::new(),
            default_analyzer: default_analyzer_name(),
        }
    }

    /// Create an empty schema with a custom default analyzer name.
    pub fn with_default_analyzer<S: Into<String>>(default_analyzer: S) -> Self {
        Schema {
            fields: HashMap::new(),
            default_analyzer: default_analyzer.into(),
        }
    }

    /// Add a field to the schema.
    pub fn add_field<S: Into<String>>(
        &mut self,
        name: S,
        definition: FieldDefinition,
    ) -> Result<()> {
        let name = name.into();

        if name.is_empty() {
            return Err(LanceaError::schema("Field name cannot be empty"));
        }
        if self.fields.contains_key(&name) {
            return Err(LanceaError::schema(format!(
                "Field '{name}' already exists"
            )));
        }

        self.fields.insert(name, definition);
        Ok(())
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Check if a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All field names, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of fields in the schema.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The default analyzer name.
    pub fn default_analyzer(&self) -> &str {
        &self.default_analyzer
    }

    /// The analyzer name configured for a field, or the schema default.
    ///
    /// Unknown fields fail with a not-found error.
    pub fn analyzer_name_for(&self, field: &str) -> Result<&str> {
        let definition = self
            .fields
            .get(field)
            .ok_or_else(|| LanceaError::not_found(format!("Field '{field}'")))?;

        Ok(definition
            .analyzer
            .as_deref()
            .unwrap_or(&self.default_analyzer))
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
