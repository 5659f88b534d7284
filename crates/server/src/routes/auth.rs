use std::sync::Arc;

use axum::{extract::{rejection::JsonRejection, Request, State}, http::header, middleware::Next, response::Response, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use tracing::warn;

use common::types::MessageResponse;
use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::AuthService;
use service::directory::repo::seaorm::SeaOrmStudentRepository;
use service::directory::DirectoryService;

use crate::errors::JsonApiError;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
    pub directory: Arc<DirectoryService<SeaOrmStudentRepository>>,
    /// Guard `/students` with [`require_bearer_token`].
    pub require_auth: bool,
}

#[derive(Serialize)]
pub struct LoginOutput { pub token: String }

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 200, description = "Registered", body = crate::openapi::MessageDoc), (status = 400, description = "Email already registered or malformed body", body = crate::openapi::MessageDoc)))]
pub async fn register(
    State(state): State<ServerState>,
    input: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(input) = input?;
    state.auth.register(input).await?;
    Ok(Json(MessageResponse::new("User registered successfully")))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in; also sets the auth_token cookie", body = crate::openapi::LoginResponse), (status = 401, description = "Invalid username or password", body = crate::openapi::MessageDoc)))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    input: Result<Json<LoginInput>, JsonRejection>,
) -> Result<(CookieJar, Json<LoginOutput>), JsonApiError> {
    let Json(input) = input?;
    let session = state.auth.login(input).await?;
    let mut cookie = Cookie::new(AUTH_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    Ok((jar.add(cookie), Json(LoginOutput { token: session.token })))
}

/// Accepts `Authorization: Bearer <token>` or the `auth_token` cookie.
/// Verified claims are attached to the request extensions.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();

    // 读取 Authorization 头；缺失时回退到 auth_token Cookie
    let token = match req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(h) => match h.strip_prefix("Bearer ") {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => {
                warn!(path = %path, "invalid Authorization format (expect Bearer)");
                return Err(JsonApiError::unauthorized("Unauthorized"));
            }
        },
        None => match jar.get(AUTH_COOKIE).map(|c| c.value().to_string()) {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!(path = %path, "missing Authorization header and auth_token cookie");
                return Err(JsonApiError::unauthorized("Unauthorized"));
            }
        },
    };

    match state.auth.verify_token(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %path, err = %e, "token validation failed");
            Err(JsonApiError::unauthorized("Unauthorized"))
        }
    }
}
