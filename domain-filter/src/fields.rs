use crate::errors::FilterError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata of a single model field, as reported by `fields_get`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(rename = "string", default)]
    pub label: String,
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub readonly: bool,
}

impl Field {
    pub fn new(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            label: String::new(),
            relation: None,
            required: false,
            readonly: false,
        }
    }
}

/// Ordered list of field descriptors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCollection {
    fields: Vec<Field>,
}

impl FieldCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from a `fields_get` response, an object keyed by
    /// field name. Entries keep the order of the response.
    pub fn from_fields_get(response: &Value) -> Result<Self, FilterError> {
        let map = response.as_object().ok_or_else(|| {
            FilterError::SerializationError("fields_get response is not an object".to_string())
        })?;

        let mut fields = Vec::with_capacity(map.len());
        for (name, attributes) in map {
            let mut field: Field = serde_json::from_value(attributes.clone()).map_err(|e| {
                FilterError::SerializationError(format!("field '{}': {}", name, e))
            })?;
            field.name = name.clone();
            fields.push(field);
        }
        tracing::debug!(count = fields.len(), "decoded field metadata");
        Ok(Self { fields })
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Stable ascending sort on `name`
    pub fn sort_by_name(&mut self) {
        self.fields.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

impl FromIterator<Field> for FieldCollection {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for FieldCollection {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
