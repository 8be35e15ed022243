use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Query parameters for the QR rendering endpoints
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct QrQuery {
    /// Text to encode
    #[validate(length(min = 1, max = 1000, message = "data must be 1-1000 characters"))]
    pub data: String,

    /// Edge length in pixels (default: 256)
    #[validate(range(min = 64, max = 1024, message = "size must be between 64 and 1024"))]
    pub size: Option<u32>,
}
