pub mod catalog;
pub mod clock;
pub mod controller;
pub mod event;
pub mod mode;
pub mod record;
pub mod value;
pub mod visibility;

/// Stable string key identifying one record field.
pub type Slug = String;
