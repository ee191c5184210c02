use serde::Deserialize;

// -- Users --

/// JSON body for `POST /users`.
///
/// Missing string fields decode as empty and are rejected by the handler,
/// so "absent" and "blank" produce the same 400.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Optional client-chosen primary key.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Query-string form of `POST /users`, used when the request has no body.
///
/// `id` stays a string here so a non-numeric value can be told apart from a
/// missing one.
#[derive(Debug, Deserialize)]
pub struct CreateUserParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// -- Posts --

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: i64,
    pub caption: String,
    pub image_url: String,
    pub posted_timestamp: String,
}
