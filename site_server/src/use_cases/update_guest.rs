use crate::domain::entities::{Guest, GuestPatch};
use crate::domain::errors::ApiError;
use crate::domain::ports::{Clock, ContentStore};

// Guest update use case: merges a typed partial field set into an existing
// record. The confirmation timestamp is stamped here from the injected
// clock on every write; this is the sole source of truth for `confirmAt`.
//
// The patch is otherwise applied verbatim: there is no ceiling check of
// `companionsConfirmed` against the stored allotment and no rejection of a
// second confirmation. Both are observed behavior of the system; the only
// idempotency protection lives in the visiting client.
pub struct UpdateGuestUseCase<'a> {
    pub store: &'a dyn ContentStore,
    pub clock: &'a dyn Clock,
}

impl<'a> UpdateGuestUseCase<'a> {
    pub async fn execute(&self, id: &str, patch: GuestPatch) -> Result<Guest, ApiError> {
        let confirm_at = self.clock.now();

        self.store
            .patch_guest(id, patch, confirm_at)
            .await
            .map_err(|_| ApiError::StoreFailure)
    }
}
