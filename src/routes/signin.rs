use std::collections::HashMap;

use axum::{Form, Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use issuetrack_user::{ActionResponse, FormData};

use crate::{auth::CookieSession, routes::AppState, template::render};

#[derive(askama::Template)]
#[template(path = "signin.html")]
pub struct SignInTemplate;

pub async fn page() -> impl IntoResponse {
    render(SignInTemplate)
}

pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut session = CookieSession::new(jar, state.config.jwt.clone());
    let result = state
        .user_command
        .sign_in(&FormData::from(input), &mut session)
        .await;

    (session.into_jar(), Json(ActionResponse::from(result)))
}
