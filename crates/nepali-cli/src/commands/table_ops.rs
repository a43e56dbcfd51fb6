use std::fs;

use nepali_core::table::{default_toml, parse_table_toml, MappingTable};

pub fn table_export() {
    print!("{}", default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} mappings, longest key {} chars",
        table.len(),
        table.max_key_len()
    );
}

/// Install `file` as the process-wide table. Must run before any conversion.
pub fn load_table(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(MappingTable::init_custom(content), "Error loading {file}: {}");
}

pub fn keys_cmd(limit: Option<usize>) {
    let table = MappingTable::global();
    let limit = limit.unwrap_or(table.len());
    for entry in table.sorted_entries().take(limit) {
        println!("{:<8}{}", entry.key, entry.value);
    }
}
