use std::{collections::HashSet, fs, path::Path};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    category::{Category, CategoryRef},
    news::NewsArticle,
    user::User,
};

// Datos de demostración incluidos en el binario
const EMBEDDED_SEED: &str = include_str!("seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("No se pudo leer el seed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed mal formado: {0}")]
    Json(#[from] serde_json::Error),

    #[error("La noticia {news_id} apunta a una categoría inexistente: {category_id}")]
    UnknownCategory { news_id: String, category_id: String },

    #[error("Identificador duplicado en el seed: {0}")]
    DuplicateId(String),

    #[error("Slug duplicado entre categorías activas: {0}")]
    DuplicateSlug(String),
}

/// Colecciones iniciales, ya validadas y con la categoría copiada en cada noticia.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub news: Vec<NewsArticle>,
}

#[derive(Debug, Deserialize)]
struct RawSeed {
    categories: Vec<Category>,
    #[serde(default)]
    users: Vec<User>,
    news: Vec<RawArticle>,
}

// En el JSON la noticia solo trae el id de su categoría
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    title_tamil: String,
    content: String,
    content_tamil: String,
    summary: Option<String>,
    summary_tamil: Option<String>,
    category_id: String,
    author: String,
    image: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    priority: i32,
    published_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    is_published: bool,
    #[serde(default)]
    is_breaking: bool,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    likes: u64,
}

fn default_true() -> bool {
    true
}

pub fn embedded() -> Result<SeedData, SeedError> {
    parse(EMBEDDED_SEED)
}

pub fn from_file(path: &Path) -> Result<SeedData, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&raw)
}

pub fn parse(raw: &str) -> Result<SeedData, SeedError> {
    let seed: RawSeed = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for id in seed.categories.iter().map(|c| &c.id) {
        if !seen.insert(id.clone()) {
            return Err(SeedError::DuplicateId(id.clone()));
        }
    }

    let mut slugs = HashSet::new();
    for category in seed.categories.iter().filter(|c| c.is_active) {
        if !slugs.insert(category.slug.clone()) {
            return Err(SeedError::DuplicateSlug(category.slug.clone()));
        }
    }

    let mut news = Vec::with_capacity(seed.news.len());
    let mut news_ids = HashSet::new();
    for raw in seed.news {
        if !news_ids.insert(raw.id.clone()) {
            return Err(SeedError::DuplicateId(raw.id));
        }

        let category = seed
            .categories
            .iter()
            .find(|c| c.id == raw.category_id)
            .ok_or_else(|| SeedError::UnknownCategory {
                news_id: raw.id.clone(),
                category_id: raw.category_id.clone(),
            })?;

        news.push(NewsArticle {
            id: raw.id,
            title: raw.title,
            title_tamil: raw.title_tamil,
            content: raw.content,
            content_tamil: raw.content_tamil,
            summary: raw.summary,
            summary_tamil: raw.summary_tamil,
            category: CategoryRef::from(category),
            author: raw.author,
            image: raw.image,
            tags: raw.tags,
            priority: raw.priority,
            published_at: raw.published_at,
            is_published: raw.is_published,
            is_breaking: raw.is_breaking,
            views: raw.views,
            likes: raw.likes,
        });
    }

    Ok(SeedData {
        categories: seed.categories,
        users: seed.users,
        news,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_is_valid() {
        let seed = embedded().unwrap();
        assert!(seed.categories.len() >= 6);
        assert!(!seed.news.is_empty());
        assert_eq!(seed.users.len(), 1);
        assert!(seed.news.iter().any(|n| !n.is_published));
        assert!(seed.news.iter().any(|n| n.is_breaking && n.is_published));
    }

    #[test]
    fn articles_carry_their_category_inline() {
        let seed = embedded().unwrap();
        for item in &seed.news {
            let category = seed
                .categories
                .iter()
                .find(|c| c.id == item.category.id)
                .unwrap();
            assert_eq!(item.category.slug, category.slug);
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let raw = r#"{
            "categories": [],
            "news": [{
                "_id": "n1", "title": "t", "titleTamil": "t", "content": "c",
                "contentTamil": "c", "categoryId": "missing", "author": "a",
                "publishedAt": "2024-01-01T00:00:00Z"
            }]
        }"#;
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, SeedError::UnknownCategory { .. }));
    }

    #[test]
    fn rejects_duplicate_active_slug() {
        let raw = r##"{
            "categories": [
                {"_id": "1", "name": "A", "nameTamil": "A", "slug": "a", "color": "#fff", "icon": "x", "isActive": true, "order": 1},
                {"_id": "2", "name": "B", "nameTamil": "B", "slug": "a", "color": "#fff", "icon": "x", "isActive": true, "order": 2}
            ],
            "news": []
        }"##;
        assert!(matches!(parse(raw).unwrap_err(), SeedError::DuplicateSlug(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse("{").unwrap_err(), SeedError::Json(_)));
    }
}
