use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use pinboard_db::models::PostRow;
use pinboard_types::api::CreatePostRequest;
use pinboard_types::models::Post;

use crate::error::{ApiError, parse_json};
use crate::state::AppState;

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = parse_json::<CreatePostRequest>(&body)?;

    // Ownership is enforced by the foreign key, not checked here.
    let id = state
        .with_db("Failed to insert data", move |s| {
            s.db.create_post(req.user_id, &req.caption, &req.image_url, &req.posted_timestamp)
        })
        .await?;

    debug!("Created post {}", id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/posts/{}", id))],
        "Post created successfully!",
    ))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Post>, ApiError> {
    let Path(id) = path.map_err(|_| ApiError::BadRequest("Invalid post ID"))?;

    let row = state
        .with_db("Failed to query post", move |s| s.db.get_post(id))
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;

    Ok(Json(to_post(row)))
}

/// GET /posts/users/{id} — unordered; an empty list is still a 200.
pub async fn list_posts_by_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let Path(user_id) = path.map_err(|_| ApiError::BadRequest("Invalid user ID"))?;

    let rows = state
        .with_db("Failed to query posts", move |s| s.db.get_posts_by_user(user_id))
        .await?;

    Ok(Json(rows.into_iter().map(to_post).collect()))
}

fn to_post(row: PostRow) -> Post {
    Post {
        id: row.id,
        user_id: row.user_id,
        caption: row.caption,
        image_url: row.image_url,
        posted_timestamp: row.posted_timestamp,
    }
}
