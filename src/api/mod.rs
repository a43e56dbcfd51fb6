//! UniFFI export layer — type-safe bindings for native hosts.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod field;
mod types;


pub use field::NpTextField;
pub use types::{NpConversion, NpError, NpFieldUpdate};

use std::path::Path;

use nepali_core::table::{default_toml, MappingTable};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert `buffer` and map `cursor` into the result.
#[uniffi::export]
fn transliterate(buffer: String, cursor: u32) -> NpConversion {
    nepali_core::convert(&buffer, cursor as usize).into()
}

/// Install a custom mapping table. Must run before the first conversion.
#[uniffi::export]
fn table_load_config(path: String) -> Result<(), NpError> {
    let content = std::fs::read_to_string(&path).map_err(|e| NpError::Io {
        msg: format!("{path}: {e}"),
    })?;
    if let Err(e) = MappingTable::init_custom(content) {
        warn!(path = %path, error = %e, "custom table rejected");
        return Err(NpError::InvalidData { msg: e.to_string() });
    }
    debug!(path = %path, entries = MappingTable::global().len(), "custom table installed");
    Ok(())
}

#[uniffi::export]
fn table_default_config() -> String {
    default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
