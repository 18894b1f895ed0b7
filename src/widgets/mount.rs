use crate::core::Slug;
use crate::core::mode::RenderMode;
use crate::core::value::Value;
use crate::widgets::verification::VerificationControl;

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    /// Three date parts: best estimate plus upper/lower bounds.
    YearRange {
        year: Value,
        upper: Value,
        lower: Value,
    },
    Numeric {
        value: Value,
        min: i64,
        max: i64,
        step: i64,
    },
    Select {
        value: Value,
        options: Vec<String>,
    },
    MultiEntry {
        values: Value,
        flags: MultiEntryFlags,
    },
    Text {
        value: Value,
    },
    Logical {
        value: Value,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiEntryFlags {
    pub editable_entries: bool,
    pub confirm_on_enter: bool,
    pub copyable: bool,
    pub autofill: bool,
    pub show_all_options_on_empty: bool,
    pub is_url: bool,
}

/// One widget-mount descriptor: which widget, bound to which field, with
/// what props.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetMount {
    pub slug: Slug,
    pub title: String,
    pub kind: WidgetKind,
    pub mode: RenderMode,
    pub tooltip: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub verification: Option<VerificationControl>,
}

impl WidgetMount {
    pub fn new(slug: impl Into<Slug>, title: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            kind,
            mode: RenderMode::View,
            tooltip: None,
            placeholder: None,
            disabled: false,
            verification: None,
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_verification(mut self, verification: VerificationControl) -> Self {
        self.verification = Some(verification);
        self
    }

    /// Permanently disabled mount for a server-derived value; never carries
    /// a verification control.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self.verification = None;
        self
    }
}
