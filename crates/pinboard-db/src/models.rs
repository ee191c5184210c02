/// Database row types — these map directly to SQLite rows.
/// Distinct from pinboard-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct PostRow {
    pub id: i64,
    pub user_id: i64,
    pub caption: String,
    pub image_url: String,
    pub posted_timestamp: String,
}
