use nepali_core::Conversion;
use nepali_session::FieldResponse;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum NpError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// Offsets are in Unicode scalar values. For Devanagari and ASCII text this
/// equals the UTF-16 offsets most UI toolkits report.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NpConversion {
    pub text: String,
    pub cursor: u32,
}

impl From<Conversion> for NpConversion {
    fn from(c: Conversion) -> Self {
        Self {
            text: c.text,
            cursor: to_u32(c.cursor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NpFieldUpdate {
    pub text: String,
    /// Caret to restore once the host has rendered `text`.
    pub cursor: u32,
    pub changed: bool,
}

impl From<FieldResponse> for NpFieldUpdate {
    fn from(r: FieldResponse) -> Self {
        Self {
            cursor: to_u32(r.restore.offset()),
            text: r.text,
            changed: r.changed,
        }
    }
}

pub(super) fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
