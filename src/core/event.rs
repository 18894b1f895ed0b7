use crate::core::Slug;
use crate::core::value::Value;

/// Everything a section can send upward; forwarded unchanged apart from the
/// slug routing.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Change { slug: Slug, value: Value },
    Verify { slug: Slug, value: Value },
    MapColourScale { scale: Slug },
}

impl FieldEvent {
    pub fn change(slug: impl Into<Slug>, value: impl Into<Value>) -> Self {
        Self::Change {
            slug: slug.into(),
            value: value.into(),
        }
    }

    pub fn verify(slug: impl Into<Slug>, value: impl Into<Value>) -> Self {
        Self::Verify {
            slug: slug.into(),
            value: value.into(),
        }
    }

    pub fn map_colour_scale(scale: impl Into<Slug>) -> Self {
        Self::MapColourScale {
            scale: scale.into(),
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            Self::Change { slug, .. } | Self::Verify { slug, .. } => slug,
            Self::MapColourScale { scale } => scale,
        }
    }
}
