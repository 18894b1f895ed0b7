pub mod age;
pub mod land_use;

use crate::core::catalog::FieldCatalog;
use crate::core::clock::Clock;
use crate::core::mode::RenderMode;
use crate::core::record::{BuildingRecord, UserAccount, UserVerificationState};
use crate::widgets::mount::{WidgetKind, WidgetMount};
use crate::widgets::node::Node;
use crate::widgets::verification::VerificationControl;
use std::sync::LazyLock;

static NO_VERIFICATIONS: LazyLock<UserVerificationState> =
    LazyLock::new(UserVerificationState::new);

/// Read-only inputs for one render pass.
pub struct SectionContext<'a> {
    pub building: &'a BuildingRecord,
    pub mode: RenderMode,
    pub user: Option<&'a UserAccount>,
    pub user_verified: &'a UserVerificationState,
    /// True while the record has uncommitted edits; disables verification.
    pub edited: bool,
    /// Colour scale the external map view is currently showing, if any.
    pub map_colour_scale: Option<&'a str>,
    pub catalog: &'a FieldCatalog,
    pub clock: &'a dyn Clock,
}

impl<'a> SectionContext<'a> {
    pub fn new(
        building: &'a BuildingRecord,
        catalog: &'a FieldCatalog,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            building,
            mode: RenderMode::View,
            user: None,
            user_verified: &NO_VERIFICATIONS,
            edited: false,
            map_colour_scale: None,
            catalog,
            clock,
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_user(mut self, user: &'a UserAccount) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_user_verified(mut self, user_verified: &'a UserVerificationState) -> Self {
        self.user_verified = user_verified;
        self
    }

    pub fn with_edited(mut self, edited: bool) -> Self {
        self.edited = edited;
        self
    }

    pub fn with_map_colour_scale(mut self, scale: &'a str) -> Self {
        self.map_colour_scale = Some(scale);
        self
    }

    /// Mount descriptor for `slug`, titled and annotated from the catalog;
    /// a missing descriptor degrades to the slug as title.
    pub fn mount(&self, slug: &str, kind: WidgetKind) -> WidgetMount {
        let descriptor = self.catalog.get(slug);
        let title = descriptor
            .map(|d| d.title.clone())
            .unwrap_or_else(|| slug.to_string());

        let mut mount = WidgetMount::new(slug, title, kind).with_mode(self.mode);
        if let Some(tooltip) = descriptor.and_then(|d| d.tooltip.clone()) {
            mount = mount.with_tooltip(tooltip);
        }
        if let Some(example) = descriptor.and_then(|d| d.example.clone()) {
            mount = mount.with_placeholder(example);
        }
        mount
    }

    pub fn options(&self, slug: &str) -> Vec<String> {
        self.catalog
            .get(slug)
            .map(|d| d.items.clone())
            .unwrap_or_default()
    }

    pub fn verification(&self, slug: &str) -> VerificationControl {
        VerificationControl::for_field(self, slug)
    }
}

/// A field-group renderer: a pure function from the section context to an
/// ordered widget tree.
pub trait FieldGroup {
    fn title(&self) -> &str;

    fn render(&self, ctx: &SectionContext<'_>) -> Vec<Node>;
}
