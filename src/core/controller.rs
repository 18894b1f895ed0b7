use crate::core::Slug;
use crate::core::event::FieldEvent;
use crate::core::mode::RenderMode;
use crate::core::record::BuildingRecord;
use crate::core::value::Value;
use indexmap::{IndexMap, IndexSet};

/// Copy/edit state around a section render: the committed base record, the
/// current mode, a local edit buffer and the copy selection.
pub struct EditController {
    base: BuildingRecord,
    mode: RenderMode,
    buffer: IndexMap<Slug, Value>,
    copy_selection: IndexSet<Slug>,
}

impl EditController {
    pub fn new(base: BuildingRecord) -> Self {
        Self {
            base,
            mode: RenderMode::View,
            buffer: IndexMap::new(),
            copy_selection: IndexSet::new(),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn enter_edit(&mut self) {
        self.mode = RenderMode::Edit;
    }

    pub fn enter_copy(&mut self) {
        self.mode = RenderMode::Copy;
    }

    /// Return to view mode, keeping buffer and copy selection intact.
    pub fn view(&mut self) {
        self.mode = RenderMode::View;
    }

    /// Base record with the edit buffer overlaid.
    pub fn record(&self) -> BuildingRecord {
        let mut record = self.base.clone();
        for (slug, value) in &self.buffer {
            record.set(slug.clone(), value.clone());
        }
        record
    }

    /// Dirty flag; disables verification while an edit is in progress.
    pub fn edited(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// `Change` is buffered and consumed; anything else is handed back for
    /// the caller to forward.
    pub fn apply(&mut self, event: FieldEvent) -> Option<FieldEvent> {
        match event {
            FieldEvent::Change { slug, value } => {
                if self.base.value(&slug) == &value {
                    self.buffer.shift_remove(&slug);
                } else {
                    self.buffer.insert(slug, value);
                }
                None
            }
            other => Some(other),
        }
    }

    /// Fold the buffer into the base record, returning the changes in buffer
    /// order.
    pub fn commit(&mut self) -> Vec<(Slug, Value)> {
        let changes: Vec<(Slug, Value)> = self.buffer.drain(..).collect();
        for (slug, value) in &changes {
            self.base.set(slug.clone(), value.clone());
        }
        changes
    }

    /// Drop the buffer and return to view mode.
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.copy_selection.clear();
        self.mode = RenderMode::View;
    }

    pub fn toggle_copy(&mut self, slug: impl Into<Slug>) {
        let slug = slug.into();
        if !self.copy_selection.shift_remove(&slug) {
            self.copy_selection.insert(slug);
        }
    }

    pub fn copy_selected(&self, slug: &str) -> bool {
        self.copy_selection.contains(slug)
    }

    pub fn copied_values(&self) -> Vec<(Slug, Value)> {
        let record = self.record();
        self.copy_selection
            .iter()
            .map(|slug| (slug.clone(), record.value(slug).clone()))
            .collect()
    }
}
