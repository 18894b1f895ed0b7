use serde::{Deserialize, Serialize};

/// Interaction state of a whole form section; controls editability of every
/// widget at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    View,
    Edit,
    Copy,
}

impl RenderMode {
    pub fn is_view(self) -> bool {
        matches!(self, Self::View)
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit)
    }

    pub fn is_copy(self) -> bool {
        matches!(self, Self::Copy)
    }
}
