use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Guest record as served by the site API. Serde stays in this layer so the
// port can hand the workflow ready-to-use records.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Guest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    // A guest is not allotted any companions unless told otherwise: absent
    // or non-numeric counts read as none.
    #[serde(default, deserialize_with = "lenient_count")]
    pub companions: Option<u32>,
    #[serde(
        default,
        rename = "companionsConfirmed",
        deserialize_with = "lenient_count"
    )]
    pub companions_confirmed: Option<u32>,
    #[serde(default)]
    pub confirm: Option<bool>,
}

// Payload submitted when the guest confirms attendance.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ConfirmRequest {
    pub confirm: bool,
    #[serde(rename = "companionsConfirmed")]
    pub companions_confirmed: u32,
}

// The workflow depends on this trait, not the concrete API client.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    // None means the id has no published match.
    async fn fetch_guest(&self, id: &str) -> Result<Option<Guest>, String>;

    async fn confirm_guest(&self, id: &str, request: ConfirmRequest) -> Result<Guest, String>;
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|value| value.as_u64())
        .and_then(|count| u32::try_from(count).ok()))
}
