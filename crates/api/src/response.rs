//! Shared response types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` success body, used by operations whose only
/// result is an acknowledgement (register, password change).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
