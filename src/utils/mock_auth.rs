use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::{db::DbPool, models::user::Claims};

// Autenticación simulada: no mira ningún header, adjunta siempre al admin del seed.
// Si el seed no trae ningún admin, las rutas de administración quedan cerradas.
pub async fn mock_auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let admin = pool
        .users()
        .iter()
        .find(|u| u.role == "admin")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Adjuntamos claims para que los handlers sepan quién es el usuario
    request.extensions_mut().insert(Claims {
        user_id: admin.id.clone(),
        role: admin.role.clone(),
    });
    Ok(next.run(request).await)
}
