use crate::CursorRestore;

/// Outcome of one change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResponse {
    /// Value the widget should display.
    pub text: String,
    /// True when at least one token was converted, i.e. `text` differs from
    /// the raw value the widget reported.
    pub changed: bool,
    pub restore: CursorRestore,
}
