//! Response DTOs for the web API.

use serde::Serialize;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Valentine status response.
#[derive(Debug, Serialize)]
pub struct ValentineStatusResponse {
    /// The message text.
    pub message: String,
    /// Whether the popup is active.
    pub is_active: bool,
}
