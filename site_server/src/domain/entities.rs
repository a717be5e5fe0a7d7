use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Guest document as held by the content store. Fields the store never set
// stay absent in API responses instead of serializing as null.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Guest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companions: Option<u32>,
    #[serde(
        rename = "companionsConfirmed",
        skip_serializing_if = "Option::is_none"
    )]
    pub companions_confirmed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    #[serde(rename = "confirmAt", skip_serializing_if = "Option::is_none")]
    pub confirm_at: Option<DateTime<Utc>>,
}

// Projection returned by the guest listing: identity and contact data only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GuestSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// Field set for guest creation. All three fields are required; the store
// assigns the document id.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewGuest {
    pub nombre: String,
    pub correo: String,
    pub code: String,
}

// Typed partial update for an existing guest. Only present fields are
// written. `confirmAt` is deliberately not part of this set: the update use
// case stamps it server-side on every write, so a client-supplied value
// never reaches the store.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GuestPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companions: Option<u32>,
    #[serde(
        rename = "companionsConfirmed",
        skip_serializing_if = "Option::is_none"
    )]
    pub companions_confirmed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
}
