use std::path::Path;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    config::DemoCredentials,
    db::DbPool,
    handlers::{admin, auth, category, news},
    utils::mock_auth::mock_auth_middleware,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub demo: DemoCredentials,
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for DemoCredentials {
    fn from_ref(state: &AppState) -> Self {
        state.demo.clone()
    }
}

pub fn create_routes(state: AppState, public_dir: &Path) -> Router {
    // 1. Rutas Públicas (Todo el mundo)
    let public_routes = Router::new()
        .route("/api/categories", get(category::list_categories_handler))
        .route("/api/categories/:slug", get(category::get_category_handler))
        .route("/api/news", get(news::list_news_handler))
        .route("/api/news/breaking", get(news::breaking_news_handler))
        .route("/api/news/latest", get(news::latest_news_handler))
        .route("/api/news/category/:slug", get(news::category_news_handler))
        .route("/api/news/search/:query", get(news::search_news_handler))
        .route("/api/news/:id", get(news::get_news_handler))
        .route("/api/news/:id/like", post(news::like_news_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/me", get(auth::me_handler));

    // 2. Rutas de ADMIN - pasan por la autenticación simulada
    let admin_routes = Router::new()
        .route("/api/admin/stats", get(admin::stats_handler))
        .route_layer(middleware::from_fn_with_state(
            state.pool.clone(),
            mock_auth_middleware,
        ));

    // 3. Todo lo demás: archivos estáticos, y si no existen, la SPA
    let spa = ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    // Fusionamos todo
    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .fallback_service(spa)
        .with_state(state)
}
