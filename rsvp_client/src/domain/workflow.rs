use url::Url;

use crate::domain::guests::{ConfirmRequest, Guest, GuestDirectory};
use crate::domain::validation::clamp_companions;

// User-facing copy (single locale, Spanish).
pub const MSG_MISSING_CODE: &str = "Agrega ?guest= en el URL para confirmar.";
pub const MSG_LOADING: &str = "Cargando datos del invitado...";
pub const MSG_NOT_FOUND: &str = "Invitado no encontrado";
pub const MSG_LOOKUP_ERROR: &str = "Error obteniendo invitado";
pub const MSG_CONFIRMED: &str = "Asistencia confirmada 🎉";
pub const MSG_SUBMIT_ERROR: &str = "Error al confirmar";
pub const MSG_ALREADY_CONFIRMED: &str = "Ya confirmaste tu asistencia";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RsvpState {
    // Terminal: the page URL carries no invitation parameter.
    NoCodeProvided,
    Loading,
    // Terminal display-only states; no retry is offered.
    GuestNotFound,
    LookupError,
    Unconfirmed,
    Submitting,
    Confirmed,
    SubmitError,
}

// The confirmation workflow, one instance per page load. Holds a transient
// copy of the guest record; nothing is cached across reloads.
pub struct RsvpWorkflow<D> {
    directory: D,
    state: RsvpState,
    guest: Option<Guest>,
    companions_input: u32,
    status: Option<&'static str>,
    on_confirmed: Option<Box<dyn FnOnce() + Send>>,
}

impl<D> RsvpWorkflow<D>
where
    D: GuestDirectory,
{
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            state: RsvpState::NoCodeProvided,
            guest: None,
            companions_input: 0,
            status: None,
            on_confirmed: None,
        }
    }

    // Completion hook, fired exactly once on a successful confirmation.
    pub fn on_confirmed(&mut self, callback: impl FnOnce() + Send + 'static) {
        self.on_confirmed = Some(Box::new(callback));
    }

    // Entry point: parse the invitation parameter from the page URL once.
    // Without it the workflow stays in NoCodeProvided and never issues a
    // lookup.
    pub async fn start(&mut self, page_url: &str) {
        let Some(id) = invitation_id(page_url) else {
            self.state = RsvpState::NoCodeProvided;
            self.status = Some(MSG_MISSING_CODE);
            return;
        };

        self.state = RsvpState::Loading;
        self.status = Some(MSG_LOADING);

        match self.directory.fetch_guest(&id).await {
            Ok(Some(guest)) => {
                // Default assumption: every allotted companion attends; the
                // guest edits downward when fewer are coming.
                self.companions_input = guest.companions.unwrap_or(0);
                self.guest = Some(guest);
                self.state = RsvpState::Unconfirmed;
                self.status = None;
            }
            Ok(None) => {
                self.state = RsvpState::GuestNotFound;
                self.status = Some(MSG_NOT_FOUND);
            }
            Err(err) => {
                tracing::error!(error = %err, "guest lookup failed");
                self.state = RsvpState::LookupError;
                self.status = Some(MSG_LOOKUP_ERROR);
            }
        }
    }

    // Companion-count edit. Every edit re-clamps against the allotment held
    // in the guest record; edits are ignored while a submission is
    // outstanding.
    pub fn edit_companions(&mut self, raw: &str) {
        if self.guest.is_none() || self.state == RsvpState::Submitting {
            return;
        }

        self.companions_input = clamp_companions(raw, self.allotted_companions());
    }

    // Submit the confirmation. Short-circuits without a network write when
    // the record already shows confirmed; this is the only idempotency
    // protection in the system.
    pub async fn confirm(&mut self) {
        let Some(guest) = &self.guest else {
            return;
        };

        if guest.confirm == Some(true) {
            self.status = Some(MSG_ALREADY_CONFIRMED);
            return;
        }
        if self.state == RsvpState::Submitting {
            return;
        }

        self.state = RsvpState::Submitting;
        let id = guest.id.clone();
        let request = ConfirmRequest {
            confirm: true,
            companions_confirmed: self.companions_input,
        };

        match self.directory.confirm_guest(&id, request.clone()).await {
            Ok(_) => {
                if let Some(guest) = &mut self.guest {
                    guest.confirm = Some(true);
                    guest.companions_confirmed = Some(request.companions_confirmed);
                }
                self.state = RsvpState::Confirmed;
                self.status = Some(MSG_CONFIRMED);
                if let Some(callback) = self.on_confirmed.take() {
                    callback();
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "confirmation failed");
                // The record stays untouched so the guard does not block a
                // retry.
                self.state = RsvpState::SubmitError;
                self.status = Some(MSG_SUBMIT_ERROR);
            }
        }
    }

    pub fn state(&self) -> RsvpState {
        self.state
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    pub fn guest(&self) -> Option<&Guest> {
        self.guest.as_ref()
    }

    pub fn companions_input(&self) -> u32 {
        self.companions_input
    }

    pub fn allotted_companions(&self) -> u32 {
        self.guest
            .as_ref()
            .and_then(|guest| guest.companions)
            .unwrap_or(0)
    }

    pub fn greeting(&self) -> Option<String> {
        self.guest.as_ref().map(|guest| {
            format!(
                "Hola, {}. Usa el botón para confirmar tu asistencia.",
                guest.nombre
            )
        })
    }
}

// `guest` is the current parameter; `code` is kept for old invitations.
fn invitation_id(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url).ok()?;
    let mut guest_param = None;
    let mut code_param = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "guest" => guest_param = Some(value.into_owned()),
            "code" => code_param = Some(value.into_owned()),
            _ => {}
        }
    }

    guest_param.or(code_param).filter(|id| !id.is_empty())
}
