//! Handlers for the dog listing and detail endpoints.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tailspin_core::breeds::parse_breed_filter;
use tailspin_core::error::CoreError;
use tailspin_core::types::DbId;
use tailspin_db::models::dog::DogDetail;
use tailspin_db::repositories::DogRepo;

use crate::error::{AppError, AppResult};
use crate::query::DogListParams;
use crate::state::AppState;

/// GET /api/dogs
///
/// List dogs as `{id, name, breed}`, optionally restricted to the breeds
/// named in `?breeds=`. A query string that does not deserialize is treated
/// as no filter.
pub async fn list_dogs(
    State(state): State<AppState>,
    params: Result<Query<DogListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring malformed dog list query");
            DogListParams::default()
        }
    };

    let breeds = parse_breed_filter(params.breeds.as_deref());
    let dogs = DogRepo::list(&state.pool, &breeds).await?;

    tracing::debug!(filter = ?breeds, count = dogs.len(), "Listed dogs");

    Ok(Json(dogs))
}

/// GET /api/dogs/{id}
///
/// Full detail record for one dog, with `status` rendered as its label.
/// An id that is not an integer is treated as a miss (404).
pub async fn get_dog(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Dog id is not an integer");
        AppError::UnmatchedPath("Dog")
    })?;

    let row = DogRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Dog", id }))?;

    let dog = DogDetail::try_from(row)?;

    Ok(Json(dog))
}
