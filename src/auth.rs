use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use issuetrack_user::{SIGN_IN_ROUTE, SessionContext};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::JwtConfig, routes::AppState};

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    pub sub: String,
}

pub fn generate_token(config: &JwtConfig, sub: String) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn decode_token(config: &JwtConfig, token: &str) -> anyhow::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

pub fn build_cookie<'a>(config: &JwtConfig, sub: String) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, sub)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

/// Session held in the `auth_token` cookie of the current request.
///
/// Changes land in the wrapped jar, which the handler returns with its response.
pub struct CookieSession {
    jar: CookieJar,
    jwt: JwtConfig,
}

impl CookieSession {
    pub fn new(jar: CookieJar, jwt: JwtConfig) -> Self {
        Self { jar, jwt }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

#[async_trait]
impl SessionContext for CookieSession {
    async fn create_session(&mut self, user_id: &str) -> anyhow::Result<()> {
        let cookie = build_cookie(&self.jwt, user_id.to_owned())?;
        self.jar = std::mem::take(&mut self.jar).add(cookie);

        Ok(())
    }

    async fn delete_session(&mut self) -> anyhow::Result<()> {
        self.jar = std::mem::take(&mut self.jar).remove(Cookie::build(AUTH_COOKIE_NAME).path("/"));

        Ok(())
    }
}

/// Id of the signed in user, taken from a valid `auth_token` cookie.
pub struct AuthUser {
    pub id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to(SIGN_IN_ROUTE))?;

        let token = jar
            .get(AUTH_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned())
            .ok_or(Redirect::to(SIGN_IN_ROUTE))?;

        let claims = decode_token(&state.config.jwt, &token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            Redirect::to(SIGN_IN_ROUTE)
        })?;

        Ok(AuthUser { id: claims.sub })
    }
}
