use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;

use crate::domain::guests::{ConfirmRequest, Guest, GuestDirectory};

// Thin wrapper around reqwest for the site API guest endpoints.
#[derive(Clone)]
pub struct GuestApiClient {
    http: Client,
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: String,
}

#[derive(Debug)]
pub enum ApiClientError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::Transport(err) => write!(f, "site api transport error: {err}"),
            ApiClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "site api upstream error {status}: {message}")
                } else {
                    write!(f, "site api upstream error {status}")
                }
            }
            ApiClientError::Decode(err) => write!(f, "site api response decode error: {err}"),
        }
    }
}

impl std::error::Error for ApiClientError {}

impl GuestApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl GuestDirectory for GuestApiClient {
    async fn fetch_guest(&self, id: &str) -> Result<Option<Guest>, String> {
        let url = format!("{}/api/guests/{}", self.base_url, id);
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ApiClientError::Transport(err).to_string())?;
        let status = res.status();

        // A 404 is the not-found signal, not a transport failure.
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = res
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.error);
            return Err(ApiClientError::Upstream { status, message }.to_string());
        }

        res.json::<Guest>()
            .await
            .map(Some)
            .map_err(|err| ApiClientError::Decode(err).to_string())
    }

    async fn confirm_guest(&self, id: &str, request: ConfirmRequest) -> Result<Guest, String> {
        let url = format!("{}/api/guests/{}", self.base_url, id);
        let res = self
            .http
            .put(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ApiClientError::Transport(err).to_string())?;
        let status = res.status();

        if !status.is_success() {
            let message = res
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.error);
            return Err(ApiClientError::Upstream { status, message }.to_string());
        }

        res.json::<Guest>()
            .await
            .map_err(|err| ApiClientError::Decode(err).to_string())
    }
}
