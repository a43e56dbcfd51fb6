//! Host-side model of a transliterating text field.
//!
//! `TextField` holds the value of one input widget. The host forwards every
//! change event to [`TextField::handle_change`], displays the returned text,
//! and applies the returned [`CursorRestore`] once its own render pass has
//! finished. Edits to one field are serialised through `&mut self`; any number
//! of fields can share one table.

mod restore;
mod response;

#[cfg(test)]
mod tests;

use nepali_core::{convert_with, MappingTable};
use tracing::{debug, debug_span};

pub use restore::{CursorRestore, CursorSink};
pub use response::FieldResponse;

pub struct TextField<'t> {
    table: &'t MappingTable,
    text: String,
    /// Character offset into `text`.
    cursor: usize,
    /// Incremented whenever `text` is replaced.
    revision: u64,
}

impl TextField<'static> {
    /// A field backed by the process-wide table.
    pub fn global() -> Self {
        Self::new(MappingTable::global())
    }
}

impl<'t> TextField<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self {
            table,
            text: String::new(),
            cursor: 0,
            revision: 0,
        }
    }

    /// A field with an initial value, taken as-is and cursor at the end.
    pub fn with_value(table: &'t MappingTable, value: &str) -> Self {
        let mut field = Self::new(table);
        field.text = value.to_string();
        field.cursor = value.chars().count();
        field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Process a change event carrying the widget's raw value and caret.
    pub fn handle_change(&mut self, raw: &str, cursor: usize) -> FieldResponse {
        let _span = debug_span!("handle_change").entered();

        let conversion = convert_with(self.table, raw, cursor);
        let changed = conversion.replacements > 0;
        if changed {
            debug!(
                replacements = conversion.replacements,
                cursor = conversion.cursor,
                "field converted"
            );
        }

        self.text = conversion.text;
        self.cursor = conversion.cursor;
        self.revision += 1;

        FieldResponse {
            text: self.text.clone(),
            changed,
            restore: CursorRestore::new(self.cursor),
        }
    }

    /// Adopt a value pushed by the host (not typed by the user). The value is
    /// not converted. Returns whether the field changed.
    pub fn sync_value(&mut self, value: &str) -> bool {
        if value == self.text {
            return false;
        }
        self.text = value.to_string();
        self.cursor = self.cursor.min(self.text.chars().count());
        self.revision += 1;
        true
    }
}
