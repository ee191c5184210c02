use serde::Serialize;

/// A user as returned by `GET /users/{id}`.
///
/// `password` holds whatever the server stored: an Argon2 PHC string under
/// the hashed policy, the raw input under the plaintext policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A post as returned by `GET /posts/{id}` and `GET /posts/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub caption: String,
    pub image_url: String,
    /// Client-supplied, echoed back as stored.
    pub posted_timestamp: String,
}
