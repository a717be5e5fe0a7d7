use crate::domain::entities::Guest;
use crate::domain::errors::ApiError;
use crate::domain::ports::ContentStore;

// Guest lookup use case: resolves an invitation id to a published record.
// Drafts never match because the store port only surfaces published
// documents.
pub struct LookupGuestUseCase<'a> {
    pub store: &'a dyn ContentStore,
}

impl<'a> LookupGuestUseCase<'a> {
    pub async fn execute(&self, id: &str) -> Result<Guest, ApiError> {
        let guest = self
            .store
            .get_published_guest(id)
            .await
            .map_err(|_| ApiError::StoreFailure)?;

        guest.ok_or(ApiError::GuestNotFound)
    }
}
