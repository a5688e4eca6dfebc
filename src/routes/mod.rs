use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use issuetrack_user::{Command, password::Argon2Verifier, repository::SqliteUserStore};
use sqlx::SqlitePool;

mod health;
mod issues;
mod signin;
mod signout;
mod signup;

pub type UserCommand = Command<SqliteUserStore, Argon2Verifier>;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: UserCommand,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, pool: SqlitePool) -> Self {
        let user_command = Command::new(SqliteUserStore::new(pool.clone()), Argon2Verifier)
            .with_sign_out_delay(std::time::Duration::from_millis(
                config.auth.sign_out_delay_ms,
            ));

        Self {
            config,
            user_command,
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/signin", get(signin::page).post(signin::action))
        .route("/signup", get(signup::page).post(signup::action))
        .route("/signout", post(signout::action))
        .route("/issues", get(issues::page))
        .with_state(app_state)
}
