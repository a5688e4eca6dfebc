use std::collections::HashMap;

use axum::{Form, Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use issuetrack_user::{ActionResponse, FormData};

use crate::{auth::CookieSession, routes::AppState, template::render};

#[derive(askama::Template)]
#[template(path = "signup.html")]
pub struct SignUpTemplate;

pub async fn page() -> impl IntoResponse {
    render(SignUpTemplate)
}

pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut session = CookieSession::new(jar, state.config.jwt.clone());
    let result = state
        .user_command
        .sign_up(&FormData::from(input), &mut session)
        .await;

    (session.into_jar(), Json(ActionResponse::from(result)))
}
