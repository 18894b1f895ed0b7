use crate::core::Slug;
use crate::core::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

static UNSET: Value = Value::None;

/// One building's attribute fields plus per-field verification counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    #[serde(flatten)]
    fields: IndexMap<Slug, Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    verified: IndexMap<Slug, u32>,
}

impl BuildingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_field(mut self, slug: impl Into<Slug>, value: impl Into<Value>) -> Self {
        self.set(slug, value);
        self
    }

    pub fn with_verified(mut self, slug: impl Into<Slug>, count: u32) -> Self {
        self.verified.insert(slug.into(), count);
        self
    }

    pub fn set(&mut self, slug: impl Into<Slug>, value: impl Into<Value>) {
        self.fields.insert(slug.into(), value.into());
    }

    pub fn value(&self, slug: &str) -> &Value {
        self.fields.get(slug).unwrap_or(&UNSET)
    }

    pub fn is_unset(&self, slug: &str) -> bool {
        self.value(slug).is_none()
    }

    pub fn verified_count(&self, slug: &str) -> u32 {
        self.verified.get(slug).copied().unwrap_or(0)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &Slug> {
        self.fields.keys()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserVerificationState {
    #[serde(flatten)]
    entries: IndexMap<Slug, Value>,
}

impl UserVerificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slug: impl Into<Slug>, value: impl Into<Value>) -> Self {
        self.record(slug, value);
        self
    }

    pub fn record(&mut self, slug: impl Into<Slug>, value: impl Into<Value>) {
        self.entries.insert(slug.into(), value.into());
    }

    pub fn has_verified(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn verified_as(&self, slug: &str) -> Option<&Value> {
        self.entries.get(slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    username: String,
}

impl UserAccount {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildingRecord, UserVerificationState};
    use crate::core::value::Value;

    #[test]
    fn missing_field_reads_as_unset() {
        let record = BuildingRecord::new().with_field("date_year", 1905);
        assert_eq!(record.value("date_year"), &Value::Number(1905));
        assert_eq!(record.value("facade_year"), &Value::None);
        assert!(record.is_unset("facade_year"));
        assert!(!record.is_unset("date_year"));
    }

    #[test]
    fn parses_record_json_with_verified_counts() {
        let record = BuildingRecord::from_json(
            r#"{
                "date_year": 1905,
                "date_source": null,
                "current_landuse_group": ["Retail", "Office"],
                "verified": { "date_year": 3 }
            }"#,
        )
        .expect("record should parse");

        assert_eq!(record.value("date_year"), &Value::Number(1905));
        assert!(record.is_unset("date_source"));
        assert_eq!(
            record.value("current_landuse_group"),
            &Value::List(vec!["Retail".to_string(), "Office".to_string()])
        );
        assert_eq!(record.verified_count("date_year"), 3);
        assert_eq!(record.verified_count("facade_year"), 0);
    }

    #[test]
    fn user_verification_tracks_presence_and_value() {
        let state = UserVerificationState::new().with("date_year", 1905);
        assert!(state.has_verified("date_year"));
        assert!(!state.has_verified("facade_year"));
        assert_eq!(state.verified_as("date_year"), Some(&Value::Number(1905)));
    }
}
