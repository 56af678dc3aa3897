use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answer collected during the dialogue.
///
/// Untagged so records deserialize from plain JSON objects:
/// `{"project_name": "Atlas", "tech_stack": ["Rust"], "team_size": 4}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
    Record(Record),
}

impl FieldValue {
    /// Blank text, zero, empty lists and empty nested records count as unanswered.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Number(n) => *n != 0.0,
            FieldValue::List(items) => items.iter().any(|i| !i.trim().is_empty()),
            FieldValue::Record(r) => r.iter().any(|(_, v)| v.is_filled()),
        }
    }

    /// Any filled value as one line of prose: list items and nested fields are
    /// joined with ", ". `None` exactly when the value is not filled.
    pub fn phrase(&self) -> Option<String> {
        let phrase = match self {
            FieldValue::Text(_) | FieldValue::Number(_) => self.display().trim().to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            FieldValue::Record(r) => r
                .iter()
                .filter_map(|(_, v)| v.phrase())
                .collect::<Vec<_>>()
                .join(", "),
        };
        (self.is_filled() && !phrase.is_empty()).then_some(phrase)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Text view of any scalar or list value. Lists are joined with ", ".
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Record(_) => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<Record> for FieldValue {
    fn from(r: Record) -> Self {
        FieldValue::Record(r)
    }
}

/// Field name → answer. Shared by activity posts and profile sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

/// Facts collected about one student activity.
pub type ActivityRecord = Record;

/// Facts collected about one profile section.
pub type ProfileRecord = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// True when the field exists and holds a filled value.
    pub fn is_filled(&self, field: &str) -> bool {
        self.get(field).is_some_and(FieldValue::is_filled)
    }

    /// Filled text of a field, trimmed. Numbers are rendered as text.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            v @ (FieldValue::Text(_) | FieldValue::Number(_)) if v.is_filled() => {
                Some(v.display().trim().to_string())
            }
            _ => None,
        }
    }

    /// Filled value of a field in any shape, as one line of prose.
    pub fn phrase(&self, field: &str) -> Option<String> {
        self.get(field)?.phrase()
    }

    /// Filled list items of a field. A filled text value is treated as a one-item list.
    pub fn list(&self, field: &str) -> Vec<String> {
        match self.get(field) {
            Some(FieldValue::List(items)) => items
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .map(str::to_string)
                .collect(),
            Some(v @ FieldValue::Text(_)) if v.is_filled() => vec![v.display().trim().to_string()],
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_not_filled() {
        assert!(!FieldValue::from("   ").is_filled());
        assert!(!FieldValue::Number(0.0).is_filled());
        assert!(!FieldValue::List(vec![]).is_filled());
        assert!(!FieldValue::List(vec!["".to_string()]).is_filled());
        assert!(!FieldValue::Record(Record::new()).is_filled());
        assert!(!FieldValue::Record(Record::new().with("name", " ")).is_filled());
    }

    #[test]
    fn test_every_filled_value_has_a_phrase() {
        let values = [
            FieldValue::from("Atlas"),
            FieldValue::Number(4.0),
            FieldValue::from(vec!["", "Atlas", " Orbit "]),
            FieldValue::Record(Record::new().with("name", "Atlas").with("blank", "")),
            FieldValue::from("  "),
            FieldValue::from(vec![" "]),
            FieldValue::Record(Record::new()),
        ];
        for value in values {
            assert_eq!(value.is_filled(), value.phrase().is_some(), "{value:?}");
        }
    }

    #[test]
    fn test_phrase_joins_lists_and_nested_fields() {
        let record = Record::new()
            .with("project_name", vec!["Atlas", " ", "Orbit"])
            .with("team", Record::new().with("lead", "Ada").with("size", 3.0));
        assert_eq!(record.phrase("project_name").as_deref(), Some("Atlas, Orbit"));
        assert_eq!(record.phrase("team").as_deref(), Some("Ada, 3"));
        assert_eq!(record.phrase("missing"), None);
    }

    #[test]
    fn test_record_deserializes_from_plain_json() {
        let json = r#"{"project_name": "Atlas", "tech_stack": ["Rust", "Redis"], "team_size": 4}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.text("project_name").as_deref(), Some("Atlas"));
        assert_eq!(record.list("tech_stack"), vec!["Rust", "Redis"]);
        assert_eq!(record.text("team_size").as_deref(), Some("4"));
    }

    #[test]
    fn test_text_value_reads_as_single_item_list() {
        let record = Record::new().with("tech_stack", "Rust");
        assert_eq!(record.list("tech_stack"), vec!["Rust"]);
    }

    #[test]
    fn test_missing_field_is_not_filled() {
        let record = Record::new().with("role", "");
        assert!(record.contains("role"));
        assert!(!record.is_filled("role"));
        assert!(!record.is_filled("company"));
    }
}
