use axum::{extract::State, response::IntoResponse, Extension, Json};

use crate::{db::DbPool, models::user::Claims};

// GET /api/admin/stats (detrás del middleware de auth simulado)
pub async fn stats_handler(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    tracing::debug!("Estadísticas pedidas por {} ({})", claims.user_id, claims.role);
    Json(pool.stats().await)
}
