/// User endpoint handlers
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::AppState;
use crate::error::UserError;
use crate::models::{NewUser, UserUpdate};

/// POST /users
///
/// Creates a user from the JSON body. The service stamps `created` and the
/// store assigns the id; the full record comes back with 201.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<impl IntoResponse, UserError> {
    let Json(new_user) = payload.map_err(bad_body)?;
    let user = state.users.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /user/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, UserError> {
    let user = state.users.get_user(id).await?;
    Ok(Json(user))
}

/// PATCH /user/:id
///
/// Partial update: absent body fields are left unchanged. Returns the
/// updated record.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, UserError> {
    let Json(changes) = payload.map_err(bad_body)?;
    let user = state.users.update_user(id, changes).await?;
    Ok(Json(user))
}

// A body that fails to decode is the caller's problem, always a 400
fn bad_body(rejection: JsonRejection) -> UserError {
    UserError::Validation(rejection.body_text())
}
