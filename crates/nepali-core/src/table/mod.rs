//! Romanized-to-Devanagari substitution table.
//!
//! The table is built once, validated up front, and never mutated. Conversion
//! walks it in [`MappingTable::sorted_entries`] order: longest key first, ties
//! in insertion order, so a key that is a prefix of a longer one can never
//! shadow it.

mod config;

pub use config::{parse_table_toml, TableError};

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_table.toml");

static INSTANCE: OnceLock<MappingTable> = OnceLock::new();

/// Returns the embedded default table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub key: String,
    pub value: String,
    /// Length of `key` in characters.
    key_len: usize,
}

impl MappingEntry {
    pub fn key_len(&self) -> usize {
        self.key_len
    }
}

#[derive(Debug)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    /// Indices into `entries`, longest key first.
    sorted: Vec<usize>,
    index: HashMap<String, usize>,
    key_starts: HashSet<char>,
    max_key_len: usize,
}

impl MappingTable {
    /// Validate `entries` and build the table. Fails on the first bad entry;
    /// duplicates are rejected rather than merged.
    pub fn build<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = MappingTable {
            entries: Vec::new(),
            sorted: Vec::new(),
            index: HashMap::new(),
            key_starts: HashSet::new(),
            max_key_len: 0,
        };

        for (i, (key, value)) in entries.into_iter().enumerate() {
            let key: String = key.into();
            let value: String = value.into();
            validate_entry(i, &key, &value)?;
            if table.index.contains_key(&key) {
                return Err(TableError::DuplicateKey(key));
            }

            let key_len = key.chars().count();
            if let Some(first) = key.chars().next() {
                table.key_starts.insert(first);
            }
            table.max_key_len = table.max_key_len.max(key_len);
            table.index.insert(key.clone(), table.entries.len());
            table.entries.push(MappingEntry {
                key,
                value,
                key_len,
            });
        }

        if table.entries.is_empty() {
            return Err(TableError::Empty);
        }

        // sort_by_key is stable, so equal lengths keep insertion order.
        let mut sorted: Vec<usize> = (0..table.entries.len()).collect();
        sorted.sort_by_key(|&i| std::cmp::Reverse(table.entries[i].key_len));
        table.sorted = sorted;

        Ok(table)
    }

    /// Install a custom table TOML as the process-wide table. Fails with
    /// [`TableError::AlreadyInitialized`] once `global()` or a previous
    /// `init_custom` has fixed the table.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        install(&INSTANCE, &toml_content)
    }

    /// Get or initialize the process-wide table.
    pub fn global() -> &'static MappingTable {
        get_or_default(&INSTANCE)
    }

    /// Keys in conversion order.
    pub fn sorted_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.sorted_entries().map(|e| e.key.as_str())
    }

    /// Entries in conversion order.
    pub fn sorted_entries(&self) -> impl Iterator<Item = &MappingEntry> + '_ {
        self.sorted.iter().map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in characters of the longest key.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Whether any key begins with `ch`.
    pub fn can_start_key(&self, ch: char) -> bool {
        self.key_starts.contains(&ch)
    }
}

fn install(cell: &OnceLock<MappingTable>, toml_content: &str) -> Result<(), TableError> {
    // Validate before claiming the cell.
    let table = parse_table_toml(toml_content)?;
    cell.set(table).map_err(|_| TableError::AlreadyInitialized)
}

fn get_or_default(cell: &OnceLock<MappingTable>) -> &MappingTable {
    cell.get_or_init(|| {
        // build.rs applies the same checks as validate_entry to the default.
        parse_table_toml(DEFAULT_TOML).expect("default mapping table TOML must be valid")
    })
}

/// Keys are printable ASCII so they never contain a word-boundary character;
/// values carry no ASCII so converted output can never form a key again.
fn validate_entry(index: usize, key: &str, value: &str) -> Result<(), TableError> {
    if key.is_empty() {
        return Err(TableError::EmptyKey { index });
    }
    if let Some(ch) = key.chars().find(|c| !c.is_ascii_graphic()) {
        return Err(TableError::InvalidKeyChar {
            key: key.to_string(),
            ch,
        });
    }
    if value.is_empty() {
        return Err(TableError::EmptyValue(key.to_string()));
    }
    if value.chars().any(|c| c.is_ascii_graphic()) {
        return Err(TableError::AsciiInValue(key.to_string()));
    }
    Ok(())
}
