pub mod engine;
pub mod table;
pub mod unicode;

pub use engine::{convert, convert_with, Conversion};
pub use table::{MappingEntry, MappingTable, TableError};
