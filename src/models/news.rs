use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryRef};

// 1. Una noticia tal como vive en memoria y como se envía al frontend
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub title_tamil: String,
    pub content: String,
    pub content_tamil: String,
    pub summary: Option<String>,
    pub summary_tamil: Option<String>,
    pub category: CategoryRef,
    pub author: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub priority: i32,
    pub published_at: DateTime<Utc>,
    pub is_published: bool,
    pub is_breaking: bool,
    pub views: u64,
    pub likes: u64,
}

// 2. Parámetros ya normalizados de un listado
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilter {
    pub category: Option<String>,
    pub breaking: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_LIMIT: usize = 10;
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

// 3. Respuestas paginadas
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub news: Vec<NewsArticle>,
    pub total_pages: usize,
    pub current_page: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryNewsPage {
    #[serde(flatten)]
    pub page: NewsPage,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    #[serde(flatten)]
    pub page: NewsPage,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub message: String,
    pub likes: u64,
}
