#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use issuetrack::{
    AppState, Config,
    config::{AuthConfig, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig},
};
use issuetrack_user::ActionResponse;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "issuetrack".to_owned(),
            audience: "issuetrack".to_owned(),
            expiration_days: 7,
        },
        auth: AuthConfig {
            sign_out_delay_ms: 0,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn create_test_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.child("issuetrack.db").to_str().unwrap());
    let config = test_config(url);

    let pool = issuetrack::db::create_pool(&config.database.url, 1)
        .await
        .unwrap();
    issuetrack::db::migrate(&pool).await.unwrap();

    let state = AppState::new(config, pool);

    TestApp {
        router: issuetrack::router(state.clone()),
        state,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Register through the HTTP surface and return the `auth_token=...` pair.
    pub async fn sign_up(&self, email: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/signup",
                &[
                    ("email", email),
                    ("password", password),
                    ("confirmPassword", password),
                ],
            )
            .await;

        auth_cookie(&response).unwrap()
    }
}

/// `auth_token=<value>` from the first matching `Set-Cookie` header.
pub fn auth_cookie(response: &Response<Body>) -> Option<String> {
    set_cookie(response).and_then(|c| c.split(';').next().map(str::to_owned))
}

pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("auth_token="))
        .map(str::to_owned)
}

pub async fn json_body(response: Response<Body>) -> ActionResponse {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&body).unwrap()
}

pub async fn text_body(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}
