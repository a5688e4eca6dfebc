use axum::response::IntoResponse;

use crate::{auth::AuthUser, template::render};

#[derive(askama::Template)]
#[template(path = "issues/index.html")]
pub struct IssuesTemplate {
    pub user_id: String,
}

pub async fn page(user: AuthUser) -> impl IntoResponse {
    render(IssuesTemplate { user_id: user.id })
}
