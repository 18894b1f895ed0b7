use crate::core::Slug;
use crate::core::record::BuildingRecord;

/// Finite set-membership visibility predicate over one governing field.
///
/// The dependent widget is hidden when the governing field's current value is
/// in `hidden_values` or is unset; null and missing are the same branch.
/// Rules are evaluated fresh against the record on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityRule {
    governing: Slug,
    hidden_values: Vec<String>,
}

impl VisibilityRule {
    pub fn unless_in<I, S>(governing: impl Into<Slug>, hidden_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            governing: governing.into(),
            hidden_values: hidden_values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn governing(&self) -> &str {
        &self.governing
    }

    pub fn is_visible(&self, record: &BuildingRecord) -> bool {
        let value = record.value(&self.governing);
        if value.is_none() {
            return false;
        }
        match value.as_text() {
            Some(text) => !self.hidden_values.iter().any(|hidden| hidden == text),
            None => true,
        }
    }
}
