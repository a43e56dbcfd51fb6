use serde::Deserialize;

use super::MappingTable;

#[derive(Deserialize)]
struct TableConfig {
    mappings: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mapping table is empty")]
    Empty,
    #[error("empty key at entry {index}")]
    EmptyKey { index: usize },
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("key {key:?} contains {ch:?}; keys must be printable ASCII")]
    InvalidKeyChar { key: String, ch: char },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("value for key {0:?} contains ASCII text that could be converted again")]
    AsciiInValue(String),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text of the form `mappings = [["key", "value"], ...]` into a
/// validated table. Entry order in the file is preserved.
pub fn parse_table_toml(toml_str: &str) -> Result<MappingTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    MappingTable::build(config.mappings)
}
