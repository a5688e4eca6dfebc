use std::{
    path::PathBuf,
    str::FromStr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use issuetrack_user::{FormData, PasswordVerifier, SessionContext, User, UserStore};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use tokio::time::Instant;

#[allow(dead_code)]
pub const PASSWORD: &str = "my_password";

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    lookups: usize,
    creations: usize,
    refuse_creation: bool,
    fail_lookup: bool,
}

/// In-memory user store storing passwords as `plain:<password>`.
#[derive(Clone, Default)]
pub struct MemoryUserStore(Arc<Mutex<StoreState>>);

#[allow(dead_code)]
impl MemoryUserStore {
    pub fn with_user(name: &str) -> (Self, User) {
        let store = Self::default();
        let user = User {
            id: format!("{name}-id"),
            email: format!("{name}@issuetrack.localhost"),
            password: format!("plain:{PASSWORD}"),
        };
        store.0.lock().unwrap().users.push(user.clone());

        (store, user)
    }

    pub fn refusing_creation() -> Self {
        let store = Self::default();
        store.0.lock().unwrap().refuse_creation = true;
        store
    }

    pub fn failing_lookup() -> Self {
        let store = Self::default();
        store.0.lock().unwrap().fail_lookup = true;
        store
    }

    pub fn lookups(&self) -> usize {
        self.0.lock().unwrap().lookups
    }

    pub fn creations(&self) -> usize {
        self.0.lock().unwrap().creations
    }

    pub fn users(&self) -> Vec<User> {
        self.0.lock().unwrap().users.clone()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let mut state = self.0.lock().unwrap();
        state.lookups += 1;

        if state.fail_lookup {
            anyhow::bail!("database is locked");
        }

        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, email: &str, password: &str) -> anyhow::Result<Option<User>> {
        let mut state = self.0.lock().unwrap();
        state.creations += 1;

        if state.refuse_creation {
            return Ok(None);
        }

        let user = User {
            id: format!("user-{}", state.users.len() + 1),
            email: email.to_owned(),
            password: format!("plain:{password}"),
        };
        state.users.push(user.clone());

        Ok(Some(user))
    }
}

/// Matches the `plain:` digests produced by [`MemoryUserStore`].
#[derive(Clone, Default)]
pub struct PlainVerifier;

#[async_trait]
impl PasswordVerifier for PlainVerifier {
    async fn verify_password(&self, password: &str, digest: &str) -> anyhow::Result<bool> {
        Ok(digest.strip_prefix("plain:") == Some(password))
    }
}

/// Session handle recording every call made on it.
#[derive(Default)]
pub struct RecordingSession {
    pub created: Vec<String>,
    pub deleted: Vec<Instant>,
    pub fail_create: bool,
    pub fail_delete: bool,
}

#[allow(dead_code)]
impl RecordingSession {
    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Default::default()
        }
    }

    pub fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl SessionContext for RecordingSession {
    async fn create_session(&mut self, user_id: &str) -> anyhow::Result<()> {
        if self.fail_create {
            anyhow::bail!("session store unavailable");
        }

        self.created.push(user_id.to_owned());

        Ok(())
    }

    async fn delete_session(&mut self) -> anyhow::Result<()> {
        self.deleted.push(Instant::now());

        if self.fail_delete {
            anyhow::bail!("session store unavailable");
        }

        Ok(())
    }
}

#[allow(dead_code)]
pub fn sign_in_form(email: &str, password: &str) -> FormData {
    [("email", email), ("password", password)]
        .into_iter()
        .collect()
}

#[allow(dead_code)]
pub fn sign_up_form(email: &str, password: &str, confirm_password: &str) -> FormData {
    [
        ("email", email),
        ("password", password),
        ("confirmPassword", confirm_password),
    ]
    .into_iter()
    .collect()
}

#[allow(dead_code)]
pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    issuetrack_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}
