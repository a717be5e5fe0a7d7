use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::domain::entities::{Guest, GuestPatch, GuestSummary};
use crate::domain::errors::ApiError;
use crate::interface_adapters::protocol::{CreateGuestRequest, ErrorResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::create_guest::CreateGuestUseCase;
use crate::use_cases::fetch_content::FetchContentUseCase;
use crate::use_cases::list_guests::ListGuestsUseCase;
use crate::use_cases::lookup_guest::LookupGuestUseCase;
use crate::use_cases::update_guest::UpdateGuestUseCase;

// Handler for the aggregated content document.
#[tracing::instrument(name = "get_content", skip_all)]
pub async fn get_content(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = FetchContentUseCase {
        store: state.store.as_ref(),
    };

    let content = use_case.execute().await.map_err(|err| {
        tracing::error!(error = ?err, "GET /api/content error");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching content")
    })?;

    Ok(Json(content))
}

// Handler for the published guest listing.
#[tracing::instrument(name = "list_guests", skip_all)]
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<Vec<GuestSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ListGuestsUseCase {
        store: state.store.as_ref(),
    };

    let guests = use_case.execute().await.map_err(|err| {
        tracing::error!(error = ?err, "GET /api/guests error");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching guests")
    })?;

    Ok(Json(guests))
}

// Handler for guest creation. An unparseable body answers with the same
// envelope as a store failure, not with the default extractor rejection.
#[tracing::instrument(name = "create_guest", skip_all)]
pub async fn create_guest(
    State(state): State<AppState>,
    payload: Result<Json<CreateGuestRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Guest>), (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "POST /api/guests body error");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error creating guest")
    })?;

    let use_case = CreateGuestUseCase {
        store: state.store.as_ref(),
    };

    let guest = use_case
        .execute(payload.nombre, payload.correo, payload.code)
        .await
        .map_err(|err| match err {
            ApiError::MissingFields => error_response(
                StatusCode::BAD_REQUEST,
                "nombre, correo y code son requeridos",
            ),
            _ => {
                tracing::error!(error = ?err, "POST /api/guests error");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error creating guest")
            }
        })?;

    Ok((StatusCode::CREATED, Json(guest)))
}

// Handler for the guest lookup by invitation id.
#[tracing::instrument(name = "get_guest", skip_all, fields(guest_id = %id))]
pub async fn get_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Guest>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = LookupGuestUseCase {
        store: state.store.as_ref(),
    };

    let guest = use_case.execute(&id).await.map_err(|err| match err {
        ApiError::GuestNotFound => error_response(StatusCode::NOT_FOUND, "Guest not found"),
        _ => {
            tracing::error!(error = ?err, "GET /api/guests/{id} error");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching guest")
        }
    })?;

    Ok(Json(guest))
}

// Handler for the guest partial update. The confirmation timestamp is
// injected by the use case; everything else in the patch is applied as sent.
#[tracing::instrument(name = "update_guest", skip_all, fields(guest_id = %id))]
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    patch: Result<Json<GuestPatch>, JsonRejection>,
) -> Result<Json<Guest>, (StatusCode, Json<ErrorResponse>)> {
    let Json(patch) = patch.map_err(|rejection| {
        tracing::error!(error = %rejection, "PUT /api/guests/{id} body error");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error updating guest")
    })?;

    let use_case = UpdateGuestUseCase {
        store: state.store.as_ref(),
        clock: state.clock.as_ref(),
    };

    let guest = use_case.execute(&id, patch).await.map_err(|err| {
        tracing::error!(error = ?err, "PUT /api/guests/{id} error");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error updating guest")
    })?;

    Ok(Json(guest))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
