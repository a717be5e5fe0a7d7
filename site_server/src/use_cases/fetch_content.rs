use serde_json::Value;

use crate::domain::errors::ApiError;
use crate::domain::ports::ContentStore;

// Content aggregation use case: exactly one published content document is
// expected. More than one is unexpected and the first result wins silently;
// zero documents yields `null`, which the page layer treats as "not ready".
pub struct FetchContentUseCase<'a> {
    pub store: &'a dyn ContentStore,
}

impl<'a> FetchContentUseCase<'a> {
    pub async fn execute(&self) -> Result<Value, ApiError> {
        let mut documents = self
            .store
            .fetch_published_content()
            .await
            .map_err(|_| ApiError::StoreFailure)?;

        if documents.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(documents.remove(0))
        }
    }
}
