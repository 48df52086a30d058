//! Dog handlers.

use axum::Json;
use axum::extract::State;

use crate::error::HttpError;
use crate::state::AppState;
use shelter_core::DogRecord;

/// List all dogs.
///
/// Always a JSON array; an empty shelter yields `[]` with status 200.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DogRecord>>, HttpError> {
    Ok(Json(state.core.dogs().list_records().await?))
}
