use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Idempotent schema setup, run once before the listener binds.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            password    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS posts (
            id                  INTEGER PRIMARY KEY,
            user_id             INTEGER NOT NULL REFERENCES users(id),
            caption             TEXT NOT NULL,
            image_url           TEXT NOT NULL,
            posted_timestamp    TEXT NOT NULL
                CHECK (
                    posted_timestamp GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]*'
                    AND datetime(posted_timestamp) IS NOT NULL
                )
        );

        CREATE INDEX IF NOT EXISTS idx_posts_user
            ON posts(user_id);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
