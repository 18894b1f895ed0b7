pub mod core;
pub mod sections;
pub mod widgets;

pub use crate::core::Slug;
pub use crate::core::catalog::{CatalogError, FieldCatalog, FieldDescriptor};
pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::controller::EditController;
pub use crate::core::event::FieldEvent;
pub use crate::core::mode::RenderMode;
pub use crate::core::record::{BuildingRecord, UserAccount, UserVerificationState};
pub use crate::core::value::Value;
pub use crate::core::visibility::VisibilityRule;

pub use crate::sections::age::AgeSection;
pub use crate::sections::land_use::LandUseSection;
pub use crate::sections::{FieldGroup, SectionContext};

pub use crate::widgets::mount::{MultiEntryFlags, WidgetKind, WidgetMount};
pub use crate::widgets::node::{InfoTone, Node};
pub use crate::widgets::verification::VerificationControl;
