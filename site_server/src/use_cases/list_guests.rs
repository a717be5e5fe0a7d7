use crate::domain::entities::GuestSummary;
use crate::domain::errors::ApiError;
use crate::domain::ports::ContentStore;

// Guest listing use case: published guests only, newest first. Ordering is
// delegated to the store query.
pub struct ListGuestsUseCase<'a> {
    pub store: &'a dyn ContentStore,
}

impl<'a> ListGuestsUseCase<'a> {
    pub async fn execute(&self) -> Result<Vec<GuestSummary>, ApiError> {
        self.store
            .list_published_guests()
            .await
            .map_err(|_| ApiError::StoreFailure)
    }
}
