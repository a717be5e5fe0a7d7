use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;

use crate::domain::entities::{Guest, GuestPatch, GuestSummary, NewGuest};
use crate::domain::ports::ContentStore;

// GROQ queries sent to the store. Every public read excludes the draft
// partition, so unpublished edits can never leak through the API.

const CONTENT_QUERY: &str = r#"*[
  _type == "content" &&
  !(_id in path("drafts.**"))
]{
  ...,
  hero{
    ...,
    "imageUrl": image.asset->url
  },
  images{
    ...,
    "storyUrl": story.asset->url,
    "honeymoonBoxUrl": honeymoonBox.asset->url,
    "thanksUrl": thanks.asset->url
  }
}"#;

const GUESTS_QUERY: &str = r#"*[
  _type == "guests" &&
  !(_id in path("drafts.**"))
]{
  _id,
  nombre,
  correo,
  code
} | order(_createdAt desc)"#;

const GUEST_BY_ID_QUERY: &str = r#"*[
  _type == "guests" &&
  !(_id in path("drafts.**")) &&
  _id == $id
][0]{
  _id,
  nombre,
  correo,
  code,
  companions,
  companionsConfirmed,
  confirm
}"#;

// Connection settings for the store, read once at startup.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub api_host: String,
    // Write token; reads against a public dataset work without one.
    pub token: Option<String>,
}

impl StoreConfig {
    pub fn base_url(&self) -> String {
        format!(
            "https://{}.{}/v{}/data",
            self.project_id, self.api_host, self.api_version
        )
    }
}

#[derive(Debug)]
pub enum StoreClientError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
    EmptyMutationResult,
}

impl fmt::Display for StoreClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreClientError::Transport(err) => write!(f, "store transport error: {err}"),
            StoreClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "store upstream error {status}: {message}")
                } else {
                    write!(f, "store upstream error {status}")
                }
            }
            StoreClientError::Decode(err) => write!(f, "store response decode error: {err}"),
            StoreClientError::EmptyMutationResult => {
                write!(f, "store mutation returned no documents")
            }
        }
    }
}

impl std::error::Error for StoreClientError {}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct MutateResponse {
    results: Vec<MutationResult>,
}

#[derive(Deserialize)]
struct MutationResult {
    document: Value,
}

// Thin wrapper around reqwest for the Sanity-style document store.
#[derive(Clone)]
pub struct SanityClient {
    http: Client,
    config: StoreConfig,
}

impl SanityClient {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn has_write_token(&self) -> bool {
        self.config.token.is_some()
    }

    // Run a GROQ query with bound parameters ($name=<json value>).
    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<T, StoreClientError> {
        let url = format!("{}/query/{}", self.config.base_url(), self.config.dataset);
        let mut request = self.http.get(url).query(&[("query", query)]);
        for (name, value) in params {
            request = request.query(&[(format!("${name}"), value.to_string())]);
        }
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let res = request.send().await.map_err(StoreClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = res.text().await.ok();
            return Err(StoreClientError::Upstream { status, message });
        }

        let payload = res
            .json::<QueryResponse<T>>()
            .await
            .map_err(StoreClientError::Decode)?;
        Ok(payload.result)
    }

    // Submit a mutation batch and return the first resulting document.
    async fn mutate(&self, mutations: Value) -> Result<Value, StoreClientError> {
        let url = format!("{}/mutate/{}", self.config.base_url(), self.config.dataset);
        let mut request = self
            .http
            .post(url)
            .query(&[("returnDocuments", "true")])
            .json(&json!({ "mutations": mutations }));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let res = request.send().await.map_err(StoreClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = res.text().await.ok();
            return Err(StoreClientError::Upstream { status, message });
        }

        let payload = res
            .json::<MutateResponse>()
            .await
            .map_err(StoreClientError::Decode)?;
        payload
            .results
            .into_iter()
            .next()
            .map(|result| result.document)
            .ok_or(StoreClientError::EmptyMutationResult)
    }
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn get_published_guest(&self, id: &str) -> Result<Option<Guest>, String> {
        self.query::<Option<Guest>>(GUEST_BY_ID_QUERY, &[("id", Value::String(id.to_string()))])
            .await
            .map_err(|err| err.to_string())
    }

    async fn list_published_guests(&self) -> Result<Vec<GuestSummary>, String> {
        self.query::<Vec<GuestSummary>>(GUESTS_QUERY, &[])
            .await
            .map_err(|err| err.to_string())
    }

    async fn create_guest(&self, guest: NewGuest) -> Result<Guest, String> {
        let document = self
            .mutate(json!([{
                "create": {
                    "_type": "guests",
                    "nombre": guest.nombre,
                    "correo": guest.correo,
                    "code": guest.code,
                }
            }]))
            .await
            .map_err(|err| err.to_string())?;

        serde_json::from_value(document).map_err(|err| err.to_string())
    }

    async fn patch_guest(
        &self,
        id: &str,
        patch: GuestPatch,
        confirm_at: DateTime<Utc>,
    ) -> Result<Guest, String> {
        let mut set = serde_json::to_value(&patch).map_err(|err| err.to_string())?;
        // confirmAt is stamped on every update, overwriting anything the
        // caller may have sent.
        if let Value::Object(fields) = &mut set {
            fields.insert("confirmAt".to_string(), json!(confirm_at.to_rfc3339()));
        }

        let document = self
            .mutate(json!([{
                "patch": {
                    "id": id,
                    "set": set,
                }
            }]))
            .await
            .map_err(|err| err.to_string())?;

        serde_json::from_value(document).map_err(|err| err.to_string())
    }

    async fn fetch_published_content(&self) -> Result<Vec<Value>, String> {
        self.query::<Vec<Value>>(CONTENT_QUERY, &[])
            .await
            .map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAFT_FILTER: &str = r#"!(_id in path("drafts.**"))"#;

    #[test]
    fn when_building_public_queries_then_each_excludes_the_draft_partition() {
        assert!(CONTENT_QUERY.contains(DRAFT_FILTER));
        assert!(GUESTS_QUERY.contains(DRAFT_FILTER));
        assert!(GUEST_BY_ID_QUERY.contains(DRAFT_FILTER));
    }

    #[test]
    fn when_looking_up_a_guest_then_the_query_binds_the_id_parameter() {
        assert!(GUEST_BY_ID_QUERY.contains("_id == $id"));
        // Single-document selection; the API never pages guests.
        assert!(GUEST_BY_ID_QUERY.contains("][0]"));
    }

    #[test]
    fn when_listing_guests_then_the_query_orders_newest_first() {
        assert!(GUESTS_QUERY.contains("order(_createdAt desc)"));
    }

    #[test]
    fn when_fetching_content_then_image_references_resolve_to_urls() {
        assert!(CONTENT_QUERY.contains(r#""imageUrl": image.asset->url"#));
        assert!(CONTENT_QUERY.contains(r#""storyUrl": story.asset->url"#));
        assert!(CONTENT_QUERY.contains(r#""honeymoonBoxUrl": honeymoonBox.asset->url"#));
        assert!(CONTENT_QUERY.contains(r#""thanksUrl": thanks.asset->url"#));
    }

    #[test]
    fn when_building_the_base_url_then_project_and_version_are_included() {
        let config = StoreConfig {
            project_id: "oi5cpb04".to_string(),
            dataset: "production".to_string(),
            api_version: "2025-11-22".to_string(),
            api_host: "api.sanity.io".to_string(),
            token: None,
        };

        assert_eq!(
            config.base_url(),
            "https://oi5cpb04.api.sanity.io/v2025-11-22/data"
        );
    }
}
