use serde::{Deserialize, Serialize};

/// A single building-record field value; `None` covers explicit `null` and
/// missing fields alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    None,
    Bool(bool),
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.is_empty(),
            Self::List(v) => v.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Display form of the value; multi-values join with `", "`.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Bool(v) => Some(v.to_string()),
            Self::Number(v) => Some(v.to_string()),
            Self::Text(v) => Some(v.clone()),
            Self::List(v) => Some(v.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn json_mapping_is_untagged() {
        let parsed: Value = serde_json::from_str("null").expect("null should parse");
        assert_eq!(parsed, Value::None);

        let parsed: Value = serde_json::from_str("1905").expect("number should parse");
        assert_eq!(parsed, Value::Number(1905));

        let parsed: Value =
            serde_json::from_str(r#"["a", "b"]"#).expect("list should parse");
        assert_eq!(
            parsed,
            Value::List(vec!["a".to_string(), "b".to_string()])
        );

        let out = serde_json::to_string(&Value::None).expect("serialize");
        assert_eq!(out, "null");
    }

    #[test]
    fn display_text_joins_lists() {
        let value = Value::List(vec!["Retail".to_string(), "Office".to_string()]);
        assert_eq!(value.display_text().as_deref(), Some("Retail, Office"));
        assert_eq!(Value::None.display_text(), None);
        assert_eq!(Value::Number(1905).display_text().as_deref(), Some("1905"));
    }

    #[test]
    fn emptiness_treats_none_and_blank_alike() {
        assert!(Value::None.is_empty());
        assert!(Value::Text(String::new()).is_empty());
        assert!(Value::List(Vec::new()).is_empty());
        assert!(!Value::Number(0).is_empty());
    }
}
