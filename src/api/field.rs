use std::sync::{Arc, Mutex, MutexGuard};

use nepali_session::TextField;
use tracing::debug_span;

use super::types::{to_u32, NpFieldUpdate};

/// One input widget. Calls on the same field are serialised by the lock.
#[derive(uniffi::Object)]
pub struct NpTextField {
    field: Mutex<TextField<'static>>,
}

impl NpTextField {
    fn lock(&self) -> MutexGuard<'_, TextField<'static>> {
        // A panic mid-edit leaves the field's last committed value intact.
        self.field.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl NpTextField {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            field: Mutex::new(TextField::global()),
        })
    }

    pub fn handle_change(&self, raw: String, cursor: u32) -> NpFieldUpdate {
        let _span = debug_span!("field_change", len = raw.len(), cursor).entered();
        self.lock().handle_change(&raw, cursor as usize).into()
    }

    pub fn sync_value(&self, value: String) -> bool {
        self.lock().sync_value(&value)
    }

    pub fn text(&self) -> String {
        self.lock().text().to_string()
    }

    pub fn cursor(&self) -> u32 {
        to_u32(self.lock().cursor())
    }
}
