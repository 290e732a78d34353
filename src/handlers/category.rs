use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{db::DbPool, error::AppError};

// GET /api/categories - solo las activas, en el orden del seed
pub async fn list_categories_handler(State(pool): State<DbPool>) -> impl IntoResponse {
    Json(pool.active_categories())
}

// GET /api/categories/:slug
pub async fn get_category_handler(
    Path(slug): Path<String>,
    State(pool): State<DbPool>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(pool.find_active_category(&slug)?))
}
