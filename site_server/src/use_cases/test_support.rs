use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::domain::entities::{Guest, GuestPatch, GuestSummary, NewGuest};
use crate::domain::ports::{Clock, ContentStore};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_noon() -> Self {
        FixedClock(Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub list: bool,
    pub create: bool,
    pub patch: bool,
    pub content: bool,
}

// Recorded arguments of a patch_guest call.
#[derive(Clone, Debug)]
pub(crate) struct RecordedPatch {
    pub id: String,
    pub patch: GuestPatch,
    pub confirm_at: DateTime<Utc>,
}

// In-memory store fake. Drafts share the document table under ids with the
// "drafts." prefix; read operations skip them, matching the port contract
// that only published documents are visible.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    guests: Arc<Mutex<Vec<Guest>>>,
    content: Arc<Mutex<Vec<Value>>>,
    created: Arc<Mutex<Vec<NewGuest>>>,
    patched: Arc<Mutex<Vec<RecordedPatch>>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            guests: Arc::new(Mutex::new(Vec::new())),
            content: Arc::new(Mutex::new(Vec::new())),
            created: Arc::new(Mutex::new(Vec::new())),
            patched: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_guest(&self, guest: Guest) {
        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        guard.push(guest);
    }

    pub(crate) fn insert_test_draft(&self, mut guest: Guest) {
        if !guest.id.starts_with("drafts.") {
            guest.id = format!("drafts.{}", guest.id);
        }
        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        guard.push(guest);
    }

    pub(crate) fn insert_test_content(&self, document: Value) {
        let mut guard = self.content.lock().expect("content mutex poisoned");
        guard.push(document);
    }

    pub(crate) fn created_guests(&self) -> Vec<NewGuest> {
        let guard = self.created.lock().expect("created mutex poisoned");
        guard.clone()
    }

    pub(crate) fn recorded_patches(&self) -> Vec<RecordedPatch> {
        let guard = self.patched.lock().expect("patched mutex poisoned");
        guard.clone()
    }

    pub(crate) fn guest_fixture(id: &str) -> Guest {
        Guest {
            id: id.to_string(),
            nombre: "Ana".to_string(),
            correo: Some("a@x.com".to_string()),
            code: Some("ANA1".to_string()),
            companions: Some(2),
            companions_confirmed: None,
            confirm: None,
            confirm_at: None,
        }
    }
}

#[async_trait]
impl ContentStore for RecordingStore {
    async fn get_published_guest(&self, id: &str) -> Result<Option<Guest>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.guests.lock().expect("guests mutex poisoned");
        Ok(guard
            .iter()
            .find(|guest| guest.id == id && !guest.id.starts_with("drafts."))
            .cloned())
    }

    async fn list_published_guests(&self) -> Result<Vec<GuestSummary>, String> {
        if self.failures.list {
            return Err("list failed".to_string());
        }

        let guard = self.guests.lock().expect("guests mutex poisoned");
        // Newest first, matching the store-side ordering.
        Ok(guard
            .iter()
            .rev()
            .filter(|guest| !guest.id.starts_with("drafts."))
            .map(|guest| GuestSummary {
                id: guest.id.clone(),
                nombre: guest.nombre.clone(),
                correo: guest.correo.clone(),
                code: guest.code.clone(),
            })
            .collect())
    }

    async fn create_guest(&self, guest: NewGuest) -> Result<Guest, String> {
        if self.failures.create {
            return Err("create failed".to_string());
        }

        let mut created = self.created.lock().expect("created mutex poisoned");
        created.push(guest.clone());

        let record = Guest {
            id: format!("guest-{}", created.len()),
            nombre: guest.nombre,
            correo: Some(guest.correo),
            code: Some(guest.code),
            companions: None,
            companions_confirmed: None,
            confirm: None,
            confirm_at: None,
        };
        let mut guests = self.guests.lock().expect("guests mutex poisoned");
        guests.push(record.clone());
        Ok(record)
    }

    async fn patch_guest(
        &self,
        id: &str,
        patch: GuestPatch,
        confirm_at: DateTime<Utc>,
    ) -> Result<Guest, String> {
        if self.failures.patch {
            return Err("patch failed".to_string());
        }

        let mut recorded = self.patched.lock().expect("patched mutex poisoned");
        recorded.push(RecordedPatch {
            id: id.to_string(),
            patch: patch.clone(),
            confirm_at,
        });

        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        let guest = guard
            .iter_mut()
            .find(|guest| guest.id == id)
            .ok_or_else(|| "document not found".to_string())?;

        if let Some(nombre) = patch.nombre {
            guest.nombre = nombre;
        }
        if let Some(correo) = patch.correo {
            guest.correo = Some(correo);
        }
        if let Some(code) = patch.code {
            guest.code = Some(code);
        }
        if let Some(companions) = patch.companions {
            guest.companions = Some(companions);
        }
        if let Some(confirmed) = patch.companions_confirmed {
            guest.companions_confirmed = Some(confirmed);
        }
        if let Some(confirm) = patch.confirm {
            guest.confirm = Some(confirm);
        }
        guest.confirm_at = Some(confirm_at);
        Ok(guest.clone())
    }

    async fn fetch_published_content(&self) -> Result<Vec<Value>, String> {
        if self.failures.content {
            return Err("content query failed".to_string());
        }

        let guard = self.content.lock().expect("content mutex poisoned");
        Ok(guard.clone())
    }
}
