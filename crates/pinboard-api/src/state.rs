use std::sync::Arc;

use pinboard_db::Database;

use crate::error::ApiError;
use crate::password::PasswordPolicy;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub password_policy: PasswordPolicy,
}

impl AppStateInner {
    pub fn new(db: Database, password_policy: PasswordPolicy) -> AppState {
        Arc::new(Self { db, password_policy })
    }

    /// Run a blocking database call off the async runtime. Any failure,
    /// including a panicked worker, becomes a 500 carrying `context`.
    pub async fn with_db<F, T>(self: &Arc<Self>, context: &'static str, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&AppStateInner) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let state = self.clone();
        tokio::task::spawn_blocking(move || f(&state))
            .await
            .map_err(|e| ApiError::Internal(context, e.into()))?
            .map_err(|e| ApiError::Internal(context, e))
    }
}
