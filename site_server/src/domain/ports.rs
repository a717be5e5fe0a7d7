use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::entities::{Guest, GuestPatch, GuestSummary, NewGuest};

// Port for the external content store. Read operations must only ever
// surface published documents; the draft partition stays invisible.
#[async_trait]
pub trait ContentStore: Send + Sync {
    // Fetch one published guest by document id.
    async fn get_published_guest(&self, id: &str) -> Result<Option<Guest>, String>;

    // List published guests, newest first.
    async fn list_published_guests(&self) -> Result<Vec<GuestSummary>, String>;

    // Create a published guest document; the store assigns the id.
    async fn create_guest(&self, guest: NewGuest) -> Result<Guest, String>;

    // Merge the patch fields into an existing guest, stamping `confirmAt`
    // with the supplied server time, and return the updated document.
    async fn patch_guest(
        &self,
        id: &str,
        patch: GuestPatch,
        confirm_at: DateTime<Utc>,
    ) -> Result<Guest, String>;

    // Fetch every published content document with image references resolved
    // to direct asset URLs.
    async fn fetch_published_content(&self) -> Result<Vec<Value>, String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
