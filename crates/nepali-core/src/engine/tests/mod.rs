mod properties;

use crate::table::MappingTable;

/// Small table with a prefix chain: "ka" < "kaa", plus an unrelated "aa".
pub(super) fn test_table() -> MappingTable {
    MappingTable::build([
        ("ka", "क"),
        ("aa", "आ"),
        ("kaa", "का"),
        ("kha", "ख"),
        ("H", "्"),
        (".", "।"),
    ])
    .unwrap()
}
