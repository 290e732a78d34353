use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::DbPool,
    error::AppError,
    models::news::{LikeResponse, NewsFilter},
    utils::params::{non_empty, parse_flag, parse_limit, QueryParams},
};

// GET /api/news (Soporta ?category=<id>&breaking=true&page=2&limit=5)
// El query string llega como pares sueltos: una clave rara no tumba a las demás
pub async fn list_news_handler(
    Query(params): Query<Vec<(String, String)>>,
    State(pool): State<DbPool>,
) -> impl IntoResponse {
    let params = QueryParams::from(params);

    let filter = NewsFilter {
        category: non_empty(params.first("category")),
        breaking: parse_flag(params.first("breaking")),
    };
    let pagination = params.pagination();
    tracing::debug!(?filter, ?pagination, "listando noticias");

    let page = pool.list_news(&filter, pagination).await;
    (StatusCode::OK, Json(page))
}

// GET /api/news/breaking - máximo 5, las más recientes
pub async fn breaking_news_handler(State(pool): State<DbPool>) -> impl IntoResponse {
    Json(pool.breaking_news().await)
}

// GET /api/news/latest?limit=10
pub async fn latest_news_handler(
    Query(params): Query<Vec<(String, String)>>,
    State(pool): State<DbPool>,
) -> impl IntoResponse {
    let limit = parse_limit(QueryParams::from(params).first("limit"));
    Json(pool.latest_news(limit).await)
}

// GET /api/news/category/:slug
pub async fn category_news_handler(
    Path(slug): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    State(pool): State<DbPool>,
) -> Result<impl IntoResponse, AppError> {
    let pagination = QueryParams::from(params).pagination();

    match pool.news_by_category(&slug, pagination).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            tracing::debug!("Categoría no encontrada: {}", slug);
            Err(e)
        }
    }
}

// GET /api/news/search/:query - búsqueda por subcadena en inglés y tamil
pub async fn search_news_handler(
    Path(term): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    State(pool): State<DbPool>,
) -> impl IntoResponse {
    let pagination = QueryParams::from(params).pagination();
    Json(pool.search_news(&term, pagination).await)
}

// GET /api/news/:id - Leer una noticia individual (suma una vista en cada lectura)
pub async fn get_news_handler(
    Path(id): Path<String>,
    State(pool): State<DbPool>,
) -> Result<impl IntoResponse, AppError> {
    let article = pool.increment_views(&id).await?;
    Ok(Json(article))
}

// POST /api/news/:id/like - sin control de likes repetidos
pub async fn like_news_handler(
    Path(id): Path<String>,
    State(pool): State<DbPool>,
) -> Result<impl IntoResponse, AppError> {
    let likes = pool.increment_likes(&id).await?;
    tracing::info!("Like en noticia {} (total {})", id, likes);

    Ok(Json(LikeResponse {
        message: "News liked successfully".to_string(),
        likes,
    }))
}
