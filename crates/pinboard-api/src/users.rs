use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::PathRejection},
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};
use tracing::debug;

use pinboard_types::api::{CreateUserParams, CreateUserRequest};
use pinboard_types::models::User;

use crate::error::{ApiError, parse_json};
use crate::state::AppState;

/// POST /users — JSON body, or query-string parameters when the body is empty.
pub async fn create_user(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = if body.is_empty() {
        from_query(&uri)?
    } else {
        parse_json::<CreateUserRequest>(&body)?
    };

    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest("Missing required fields"));
    }

    let id = state
        .with_db("Failed to insert data", move |s| {
            let stored = s.password_policy.prepare(&req.password)?;
            s.db.create_user(req.id, &req.name, &req.email, &stored)
        })
        .await?;

    debug!("Created user {}", id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", id))],
        "User created successfully!",
    ))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path.map_err(|_| ApiError::BadRequest("Invalid user ID"))?;

    let row = state
        .with_db("Failed to query user", move |s| s.db.get_user(id))
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(User {
        id: row.id,
        name: row.name,
        email: row.email,
        password: row.password,
    }))
}

fn from_query(uri: &Uri) -> Result<CreateUserRequest, ApiError> {
    let Query(params) = Query::<CreateUserParams>::try_from_uri(uri)
        .map_err(|_| ApiError::BadRequest("Invalid request parameters"))?;

    let id = params
        .id
        .map(|raw| raw.parse::<i64>())
        .transpose()
        .map_err(|_| ApiError::BadRequest("Invalid user ID"))?;

    Ok(CreateUserRequest {
        id,
        name: params.name.unwrap_or_default(),
        email: params.email.unwrap_or_default(),
        password: params.password.unwrap_or_default(),
    })
}
