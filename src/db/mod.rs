pub mod query;
pub mod seed;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    error::AppError,
    models::{
        category::Category,
        news::{CategoryNewsPage, NewsArticle, NewsFilter, NewsPage, Pagination, SearchPage},
        stats::{AdminStats, Stats},
        user::User,
    },
};
use seed::{SeedData, SeedError};

const DASHBOARD_SIZE: usize = 5;

// Los handlers reciben un handle compartido al store, igual que antes con el pool
pub type DbPool = Arc<NewsStore>;

/// Construye el store desde el seed configurado (o el incluido en el binario).
pub fn init_db(config: &Config) -> Result<DbPool, SeedError> {
    let seed = match &config.seed_file {
        Some(path) => seed::from_file(path)?,
        None => seed::embedded()?,
    };
    Ok(Arc::new(NewsStore::new(seed)))
}

/// Almacén en memoria. Categorías y usuarios son de solo lectura; las
/// noticias van bajo un `RwLock` porque vistas y likes las mutan.
///
/// `increment_views` e `increment_likes` son los únicos puntos de mutación.
/// Cada uno toma el lock de escritura, así que dos incrementos concurrentes
/// sobre la misma noticia nunca pierden una actualización.
#[derive(Debug)]
pub struct NewsStore {
    categories: Vec<Category>,
    users: Vec<User>,
    news: RwLock<Vec<NewsArticle>>,
}

impl NewsStore {
    pub fn new(seed: SeedData) -> Self {
        Self {
            categories: seed.categories,
            users: seed.users,
            news: RwLock::new(seed.news),
        }
    }

    pub fn active_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect()
    }

    /// Búsqueda exacta (sensible a mayúsculas) entre las categorías activas.
    pub fn find_active_category(&self, slug: &str) -> Result<Category, AppError> {
        self.categories
            .iter()
            .find(|c| c.is_active && c.slug == slug)
            .cloned()
            .ok_or_else(AppError::category_not_found)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub async fn list_news(&self, filter: &NewsFilter, pagination: Pagination) -> NewsPage {
        let news = self.news.read().await;
        query::list(&news, filter, pagination)
    }

    pub async fn breaking_news(&self) -> Vec<NewsArticle> {
        let news = self.news.read().await;
        query::breaking(&news)
    }

    pub async fn latest_news(&self, limit: usize) -> Vec<NewsArticle> {
        let news = self.news.read().await;
        query::latest(&news, limit)
    }

    /// Resuelve el slug antes de tocar las noticias.
    pub async fn news_by_category(
        &self,
        slug: &str,
        pagination: Pagination,
    ) -> Result<CategoryNewsPage, AppError> {
        let category = self.find_active_category(slug)?;
        let news = self.news.read().await;
        let page = query::by_category(&news, &category.id, pagination);
        Ok(CategoryNewsPage { page, category })
    }

    pub async fn search_news(&self, term: &str, pagination: Pagination) -> SearchPage {
        let news = self.news.read().await;
        SearchPage {
            page: query::search(&news, term, pagination),
            query: term.to_string(),
        }
    }

    /// Lectura con efecto: cada llamada suma exactamente una vista.
    /// Las noticias no publicadas se tratan como inexistentes.
    pub async fn increment_views(&self, id: &str) -> Result<NewsArticle, AppError> {
        let mut news = self.news.write().await;
        let item = news
            .iter_mut()
            .find(|item| item.id == id && item.is_published)
            .ok_or_else(AppError::news_not_found)?;
        item.views += 1;
        tracing::debug!("Vista en noticia {} (total {})", id, item.views);
        Ok(item.clone())
    }

    /// Suma un like por llamada, sin deduplicar por usuario. Vale también
    /// para noticias no publicadas.
    pub async fn increment_likes(&self, id: &str) -> Result<u64, AppError> {
        let mut news = self.news.write().await;
        let item = news
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(AppError::news_not_found)?;
        item.likes += 1;
        tracing::debug!("Like en noticia {} (total {})", id, item.likes);
        Ok(item.likes)
    }

    pub async fn stats(&self) -> AdminStats {
        let news = self.news.read().await;

        let published_news = news.iter().filter(|n| n.is_published).count();
        let stats = Stats {
            total_news: news.len(),
            published_news,
            draft_news: news.len() - published_news,
            breaking_news: news
                .iter()
                .filter(|n| n.is_breaking && n.is_published)
                .count(),
            total_categories: self.categories.len(),
            total_users: self.users.len(),
        };

        // Ordenamos una copia: el orden del seed no se toca
        let mut popular: Vec<&NewsArticle> = news.iter().collect();
        popular.sort_by(|a, b| b.views.cmp(&a.views));

        AdminStats {
            stats,
            recent_news: news.iter().take(DASHBOARD_SIZE).cloned().collect(),
            popular_news: popular.into_iter().take(DASHBOARD_SIZE).cloned().collect(),
        }
    }
}
