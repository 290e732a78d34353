use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{Form, FromRequest, Json, Request, State},
    http::header,
    response::IntoResponse,
};

use crate::{
    config::DemoCredentials,
    db::DbPool,
    error::AppError,
    models::user::{AuthResponse, LoginPayload, MeResponse, PublicUser},
};

// Token fijo: aquí no hay firma ni expiración
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Cuerpo del login en JSON o `application/x-www-form-urlencoded`.
/// Un cuerpo ausente o ilegible se responde como credenciales inválidas.
pub struct LoginBody(pub LoginPayload);

#[async_trait]
impl<S> FromRequest<S> for LoginBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |ct| ct.starts_with("application/x-www-form-urlencoded"));

        let payload = if is_form {
            Form::<LoginPayload>::from_request(req, state)
                .await
                .map(|Form(payload)| payload)
                .map_err(|e| e.body_text())
        } else {
            Json::<LoginPayload>::from_request(req, state)
                .await
                .map(|Json(payload)| payload)
                .map_err(|e| e.body_text())
        };

        let payload = payload.unwrap_or_else(|e| {
            tracing::debug!("Cuerpo de login ilegible: {}", e);
            LoginPayload::default()
        });
        Ok(LoginBody(payload))
    }
}

// POST /api/auth/login (login de demostración, comparación literal)
pub async fn login_handler(
    State(pool): State<DbPool>,
    State(demo): State<DemoCredentials>,
    LoginBody(payload): LoginBody,
) -> Result<impl IntoResponse, AppError> {
    let matches = payload.email.as_deref() == Some(demo.email.as_str())
        && payload.password.as_deref() == Some(demo.password.as_str());
    if !matches {
        tracing::warn!("Login fallido para {:?}", payload.email);
        return Err(AppError::InvalidCredentials);
    }

    let user = pool
        .find_user_by_email(&demo.email)
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token: MOCK_TOKEN.to_string(),
        user: PublicUser::from(user),
    }))
}

// GET /api/auth/me - siempre el admin de demostración
pub async fn me_handler(
    State(pool): State<DbPool>,
    State(demo): State<DemoCredentials>,
) -> Result<impl IntoResponse, AppError> {
    let user = pool
        .find_user_by_email(&demo.email)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse {
        user: PublicUser::from(user),
    }))
}
