//! Host boundary for the Nepali transliteration engine.
//!
//! The UniFFI layer in [`api`] is what native hosts bind against. The pure
//! engine lives in `nepali_core`; the text-field model in `nepali_session`.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use nepali_core::{convert, Conversion, MappingTable, TableError};
pub use nepali_session::{CursorRestore, CursorSink, FieldResponse, TextField};
pub use trace_init::init_tracing;
