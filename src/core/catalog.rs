use crate::core::Slug;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static per-field metadata; absent optional parts mean the widget renders
/// without that affordance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tooltip: None,
            example: None,
            items: Vec::new(),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    fields: IndexMap<Slug, FieldDescriptor>,
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(source).map_err(CatalogError::from)
    }

    pub fn insert(&mut self, slug: impl Into<Slug>, descriptor: FieldDescriptor) {
        self.fields.insert(slug.into(), descriptor);
    }

    pub fn with(mut self, slug: impl Into<Slug>, descriptor: FieldDescriptor) -> Self {
        self.insert(slug, descriptor);
        self
    }

    pub fn get(&self, slug: &str) -> Option<&FieldDescriptor> {
        self.fields.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.fields.contains_key(slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Slug, &FieldDescriptor)> {
        self.fields.iter()
    }

    /// The fields covered by the built-in age and land-use sections.
    pub fn building_attributes() -> Self {
        Self::new()
            .with(
                "date_year",
                FieldDescriptor::new("Year built (best estimate)")
                    .with_tooltip("The year the building was constructed, as accurately as possible"),
            )
            .with(
                "facade_year",
                FieldDescriptor::new("Facade year")
                    .with_tooltip("Best estimate for the year the current facade was constructed"),
            )
            .with(
                "date_source",
                FieldDescriptor::new("Source of building age data")
                    .with_tooltip("Source for the main start date")
                    .with_example("Survey of fabric")
                    .with_items([
                        "Expert knowledge of building",
                        "Expert estimate from image",
                        "Survey of fabric",
                        "Archival research",
                        "Statutory list description",
                        "Historical map",
                        "Other printed source",
                        "Inferred from streetscape",
                    ]),
            )
            .with(
                "date_link",
                FieldDescriptor::new("Source links")
                    .with_tooltip("URL(s) for the source of building age data"),
            )
            .with(
                "is_domestic",
                FieldDescriptor::new("Is the building a home/domestic building?")
                    .with_tooltip("Note: Homes used as offices are still domestic"),
            )
            .with(
                "is_domestic_source",
                FieldDescriptor::new("Source of domestic/non-domestic data")
                    .with_tooltip("Source for the domestic status of the building"),
            )
            .with(
                "is_domestic_link",
                FieldDescriptor::new("Please provide a link to the data source")
                    .with_tooltip("Coming Soon"),
            )
            .with(
                "current_landuse_group",
                FieldDescriptor::new("Current land use(s)")
                    .with_tooltip("Land use groups as classified by the National Land Use Database"),
            )
            .with(
                "current_landuse_source",
                FieldDescriptor::new("Source of current land use")
                    .with_tooltip("Source for the current land use")
                    .with_example("Expert/personal knowledge of building")
                    .with_items([
                        "Expert/personal knowledge of building",
                        "Online streetview image",
                        "Open planning authority dataset",
                        "Open property tax dataset",
                        "Open housing dataset",
                        "Open address dataset",
                        "Other open data",
                    ]),
            )
            .with(
                "current_landuse_link",
                FieldDescriptor::new("Source links")
                    .with_tooltip("URL(s) for the source of current land use"),
            )
            .with(
                "current_landuse_order",
                FieldDescriptor::new("Current land use (order)")
                    .with_tooltip("Land use order, automatically derived from the land use groups"),
            )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    message: String,
}

impl CatalogError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::new(err.to_string())
    }
}
