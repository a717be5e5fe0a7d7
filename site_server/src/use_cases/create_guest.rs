use crate::domain::entities::{Guest, NewGuest};
use crate::domain::errors::ApiError;
use crate::domain::ports::ContentStore;

// Guest creation use case. All three identity fields are required; nothing
// is written when any of them is missing or blank.
pub struct CreateGuestUseCase<'a> {
    pub store: &'a dyn ContentStore,
}

impl<'a> CreateGuestUseCase<'a> {
    pub async fn execute(
        &self,
        nombre: Option<String>,
        correo: Option<String>,
        code: Option<String>,
    ) -> Result<Guest, ApiError> {
        let nombre = required_field(nombre)?;
        let correo = required_field(correo)?;
        let code = required_field(code)?;

        self.store
            .create_guest(NewGuest {
                nombre,
                correo,
                code,
            })
            .await
            .map_err(|_| ApiError::StoreFailure)
    }
}

fn required_field(value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::MissingFields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailureFlags, RecordingStore};

    #[tokio::test]
    async fn when_all_fields_are_present_then_guest_is_created() {
        let store = RecordingStore::new();
        let use_case = CreateGuestUseCase { store: &store };

        let guest = use_case
            .execute(
                Some("Ana".to_string()),
                Some("a@x.com".to_string()),
                Some("ANA1".to_string()),
            )
            .await
            .expect("expected creation to succeed");

        assert_eq!(guest.nombre, "Ana");
        assert_eq!(guest.correo.as_deref(), Some("a@x.com"));
        assert_eq!(guest.code.as_deref(), Some("ANA1"));
        // A new guest starts without a confirmation.
        assert_eq!(guest.confirm, None);
        assert_eq!(store.created_guests().len(), 1);
    }

    #[tokio::test]
    async fn when_correo_is_missing_then_nothing_is_written() {
        let store = RecordingStore::new();
        let use_case = CreateGuestUseCase { store: &store };

        let result = use_case
            .execute(Some("Ana".to_string()), None, Some("ANA1".to_string()))
            .await;

        assert!(matches!(result, Err(ApiError::MissingFields)));
        assert!(store.created_guests().is_empty());
    }

    #[tokio::test]
    async fn when_a_field_is_blank_then_returns_missing_fields() {
        let store = RecordingStore::new();
        let use_case = CreateGuestUseCase { store: &store };

        let result = use_case
            .execute(
                Some("  ".to_string()),
                Some("a@x.com".to_string()),
                Some("ANA1".to_string()),
            )
            .await;

        assert!(matches!(result, Err(ApiError::MissingFields)));
        assert!(store.created_guests().is_empty());
    }

    #[tokio::test]
    async fn when_store_create_fails_then_returns_store_failure() {
        let store = RecordingStore::new().with_failures(FailureFlags {
            create: true,
            ..FailureFlags::default()
        });
        let use_case = CreateGuestUseCase { store: &store };

        let result = use_case
            .execute(
                Some("Ana".to_string()),
                Some("a@x.com".to_string()),
                Some("ANA1".to_string()),
            )
            .await;

        assert!(matches!(result, Err(ApiError::StoreFailure)));
    }

    #[tokio::test]
    async fn when_guest_is_created_then_lookup_by_the_new_id_round_trips() {
        let store = RecordingStore::new();
        let use_case = CreateGuestUseCase { store: &store };

        let created = use_case
            .execute(
                Some("Ana".to_string()),
                Some("a@x.com".to_string()),
                Some("ANA1".to_string()),
            )
            .await
            .expect("expected creation to succeed");

        let lookup = crate::use_cases::lookup_guest::LookupGuestUseCase { store: &store };
        let fetched = lookup
            .execute(&created.id)
            .await
            .expect("expected created guest to be found");

        assert_eq!(fetched.nombre, "Ana");
        assert_eq!(fetched.confirm, None);
    }
}
