use serde::{Deserialize, Serialize};

// Error envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Request payload for guest creation. Fields are optional at the protocol
// level so a missing key maps to the canonical 400 message instead of a
// deserializer reject.
#[derive(Debug, Deserialize)]
pub struct CreateGuestRequest {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub code: Option<String>,
}
