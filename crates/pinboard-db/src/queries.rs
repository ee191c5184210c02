use crate::models::{PostRow, UserRow};
use crate::Database;
use anyhow::Result;
use rusqlite::{Connection, Row};

impl Database {
    // -- Users --

    /// Insert a user and return its id. With `id = None` the engine assigns
    /// the next free key; a client-supplied id that already exists fails
    /// with a constraint error.
    pub fn create_user(
        &self,
        id: Option<i64>,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, name, email, password) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, name, email, password],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_user(&self, id: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_id(conn, id))
    }

    // -- Posts --

    /// Insert a post and return its id. The owning user is not checked
    /// here; the foreign key rejects unknown ids.
    pub fn create_post(
        &self,
        user_id: i64,
        caption: &str,
        image_url: &str,
        posted_timestamp: &str,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO posts (user_id, caption, image_url, posted_timestamp) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![user_id, caption, image_url, posted_timestamp],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_post(&self, id: i64) -> Result<Option<PostRow>> {
        self.with_conn(|conn| query_post_by_id(conn, id))
    }

    /// All posts owned by `user_id`, in whatever order SQLite yields them.
    pub fn get_posts_by_user(&self, user_id: i64) -> Result<Vec<PostRow>> {
        self.with_conn(|conn| query_posts_by_user(conn, user_id))
    }
}

fn query_user_by_id(conn: &Connection, id: i64) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare("SELECT id, name, email, password FROM users WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_post_by_id(conn: &Connection, id: i64) -> Result<Option<PostRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, caption, image_url, posted_timestamp FROM posts WHERE id = ?1",
    )?;

    let row = stmt.query_row([id], post_from_row).optional()?;

    Ok(row)
}

fn query_posts_by_user(conn: &Connection, user_id: i64) -> Result<Vec<PostRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, caption, image_url, posted_timestamp FROM posts WHERE user_id = ?1",
    )?;

    let rows = stmt
        .query_map([user_id], post_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<PostRow> {
    Ok(PostRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        caption: row.get(2)?,
        image_url: row.get(3)?,
        posted_timestamp: row.get(4)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_with_user() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let id = db.create_user(None, "Ann", "a@x.com", "pw").unwrap();
        (db, id)
    }

    #[test]
    fn generated_user_ids_start_at_one() {
        let (db, id) = db_with_user();
        assert_eq!(id, 1);
        assert_eq!(db.create_user(None, "Bob", "b@x.com", "pw").unwrap(), 2);
    }

    #[test]
    fn client_supplied_user_id_is_kept() {
        let db = Database::open_in_memory().unwrap();
        let id = db.create_user(Some(42), "Ann", "a@x.com", "pw").unwrap();
        assert_eq!(id, 42);

        let user = db.get_user(42).unwrap().unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn duplicate_user_id_is_an_error() {
        let db = Database::open_in_memory().unwrap();
        db.create_user(Some(7), "Ann", "a@x.com", "pw").unwrap();
        assert!(db.create_user(Some(7), "Bob", "b@x.com", "pw").is_err());
    }

    #[test]
    fn email_is_not_unique() {
        let db = Database::open_in_memory().unwrap();
        db.create_user(None, "Ann", "same@x.com", "pw").unwrap();
        assert!(db.create_user(None, "Bob", "same@x.com", "pw").is_ok());
    }

    #[test]
    fn missing_rows_are_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_user(9999).unwrap().is_none());
        assert!(db.get_post(9999).unwrap().is_none());
    }

    #[test]
    fn post_for_unknown_user_is_rejected_without_a_row() {
        let db = Database::open_in_memory().unwrap();
        let res = db.create_post(5, "hi", "http://x/i.png", "2024-01-01T00:00:00Z");
        assert!(res.is_err());

        let count: i64 = db
            .with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM posts", [], |r| r.get(0))?))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn post_round_trips_as_stored() {
        let (db, user_id) = db_with_user();
        let id = db
            .create_post(user_id, "hi", "http://x/i.png", "2024-01-01T00:00:00Z")
            .unwrap();

        let post = db.get_post(id).unwrap().unwrap();
        assert_eq!(post.user_id, user_id);
        assert_eq!(post.caption, "hi");
        assert_eq!(post.image_url, "http://x/i.png");
        assert_eq!(post.posted_timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn posts_by_user_filters_on_owner() {
        let (db, ann) = db_with_user();
        let bob = db.create_user(None, "Bob", "b@x.com", "pw").unwrap();
        for caption in ["one", "two", "three"] {
            db.create_post(ann, caption, "http://x/i.png", "2024-01-01 10:00:00").unwrap();
        }
        db.create_post(bob, "other", "http://x/j.png", "2024-01-02 10:00:00").unwrap();

        let posts = db.get_posts_by_user(ann).unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.user_id == ann));

        assert!(db.get_posts_by_user(999).unwrap().is_empty());
    }
}
