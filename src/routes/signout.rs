use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;

use crate::{auth::CookieSession, routes::AppState};

pub async fn action(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let mut session = CookieSession::new(jar, state.config.jwt.clone());
    let redirect = state.user_command.sign_out(&mut session).await;

    (session.into_jar(), Redirect::to(redirect.route))
}
