//! API de demostración para un portal de noticias bilingüe (inglés / tamil).
//!
//! Categorías y noticias viven en memoria, cargadas desde un seed al arrancar.
//!
//! - **`db`**: el store en memoria y el pipeline de listados (`db::query`).
//! - **`handlers`** / **`routes`**: la capa HTTP sobre axum.
//! - **`config`**, **`error`**, **`utils`**: configuración por entorno, errores y
//!   normalización de parámetros.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;

use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{config::Config, db::DbPool, routes::AppState};

/// Router completo con CORS, trazas y cabeceras de seguridad.
pub fn build_app(pool: DbPool, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        pool,
        demo: config.demo.clone(),
    };

    routes::create_routes(state, &config.public_dir)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
}
