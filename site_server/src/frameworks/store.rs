use crate::interface_adapters::clients::{SanityClient, StoreConfig};

// Build the store client from environment configuration. Only the project
// id is mandatory; the rest falls back to the deployed defaults.
pub fn store_from_env() -> Result<SanityClient, String> {
    let project_id = std::env::var("SANITY_PROJECT_ID")
        .map_err(|_| "SANITY_PROJECT_ID must be set".to_string())?;
    let dataset = std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".to_string());
    let api_version =
        std::env::var("SANITY_API_VERSION").unwrap_or_else(|_| "2025-11-22".to_string());
    let api_host = std::env::var("SANITY_API_HOST").unwrap_or_else(|_| "api.sanity.io".to_string());
    let token = std::env::var("SANITY_API_WRITE_TOKEN").ok();

    Ok(SanityClient::new(StoreConfig {
        project_id,
        dataset,
        api_version,
        api_host,
        token,
    }))
}
