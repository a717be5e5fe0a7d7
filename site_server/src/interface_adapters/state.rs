use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::ports::{Clock, ContentStore};

// Application state built once at startup and shared by every handler. The
// store client holds the only process-wide configuration.
#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> so tests can inject in-memory fakes (dependency injection).
    pub store: Arc<dyn ContentStore>,
    pub clock: Arc<dyn Clock>,
}

// System clock adapter used by the update path.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
