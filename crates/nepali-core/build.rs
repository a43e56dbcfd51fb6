use std::collections::HashSet;

fn main() {
    // Validate the embedded mapping table at compile time so the lazily built
    // global table cannot fail at runtime.
    validate_table(
        "src/table/default_table.toml",
        include_str!("src/table/default_table.toml"),
    );
}

fn validate_table(path: &str, content: &str) {
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    let Some(mappings) = value.get("mappings").and_then(|m| m.as_array()) else {
        panic!("{path} has no `mappings` array");
    };
    if mappings.is_empty() {
        panic!("{path}: `mappings` is empty");
    }

    let mut seen = HashSet::new();
    for (i, pair) in mappings.iter().enumerate() {
        let (key, value) = match pair.as_array().map(|p| p.as_slice()) {
            Some([toml::Value::String(k), toml::Value::String(v)]) => (k, v),
            _ => panic!("{path}: mappings[{i}] must be a [key, value] string pair"),
        };
        if key.is_empty() || value.is_empty() {
            panic!("{path}: mappings[{i}] has an empty key or value");
        }
        if let Some(ch) = key.chars().find(|c| !c.is_ascii_graphic()) {
            panic!("{path}: key {key:?} contains {ch:?}; keys must be printable ASCII");
        }
        if value.chars().any(|c| c.is_ascii_graphic()) {
            panic!("{path}: value for key {key:?} contains ASCII text");
        }
        if !seen.insert(key.clone()) {
            panic!("{path}: duplicate key {key:?}");
        }
    }
}
