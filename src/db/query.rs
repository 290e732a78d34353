//! Pipeline de listados: visibilidad → filtros → orden → paginación.
//!
//! Funciones puras sobre un slice; el store solo les presta las noticias
//! bajo su lock de lectura.

use std::cmp::Ordering;

use crate::models::news::{NewsArticle, NewsFilter, NewsPage, Pagination};

pub const BREAKING_SHORTLIST: usize = 5;

// Prioridad descendente; a igual prioridad, la más reciente primero
fn by_priority_then_date(a: &NewsArticle, b: &NewsArticle) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.published_at.cmp(&a.published_at))
}

fn by_date(a: &NewsArticle, b: &NewsArticle) -> Ordering {
    b.published_at.cmp(&a.published_at)
}

fn published(news: &[NewsArticle]) -> impl Iterator<Item = &NewsArticle> {
    news.iter().filter(|item| item.is_published)
}

/// Corta `sorted` según la página pedida. Pasarse del final no es error.
pub fn paginate(sorted: Vec<&NewsArticle>, pagination: Pagination) -> NewsPage {
    let Pagination { page, limit } = pagination;
    let limit = limit.max(1);
    let total = sorted.len();
    let start = page.saturating_sub(1).saturating_mul(limit);

    let news = sorted
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    NewsPage {
        news,
        total_pages: total.div_ceil(limit),
        current_page: page,
        total,
    }
}

pub fn list(news: &[NewsArticle], filter: &NewsFilter, pagination: Pagination) -> NewsPage {
    let mut matches: Vec<&NewsArticle> = published(news)
        .filter(|item| {
            filter
                .category
                .as_deref()
                .map_or(true, |id| item.category.id == id)
        })
        .filter(|item| !filter.breaking || item.is_breaking)
        .collect();

    matches.sort_by(|a, b| by_priority_then_date(a, b));
    paginate(matches, pagination)
}

pub fn breaking(news: &[NewsArticle]) -> Vec<NewsArticle> {
    let mut matches: Vec<&NewsArticle> = published(news).filter(|item| item.is_breaking).collect();
    matches.sort_by(|a, b| by_date(a, b));
    matches.into_iter().take(BREAKING_SHORTLIST).cloned().collect()
}

pub fn latest(news: &[NewsArticle], limit: usize) -> Vec<NewsArticle> {
    let mut matches: Vec<&NewsArticle> = published(news).collect();
    matches.sort_by(|a, b| by_date(a, b));
    matches.into_iter().take(limit).cloned().collect()
}

/// Listado de una categoría ya resuelta. Solo ordena por fecha.
pub fn by_category(news: &[NewsArticle], category_id: &str, pagination: Pagination) -> NewsPage {
    let mut matches: Vec<&NewsArticle> = published(news)
        .filter(|item| item.category.id == category_id)
        .collect();
    matches.sort_by(|a, b| by_date(a, b));
    paginate(matches, pagination)
}

fn matches_term(item: &NewsArticle, term: &str) -> bool {
    [
        &item.title,
        &item.title_tamil,
        &item.content,
        &item.content_tamil,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

/// Búsqueda por subcadena sin distinguir mayúsculas en los cuatro textos.
pub fn search(news: &[NewsArticle], term: &str, pagination: Pagination) -> NewsPage {
    let term = term.to_lowercase();
    let mut matches: Vec<&NewsArticle> = published(news)
        .filter(|item| matches_term(item, &term))
        .collect();
    matches.sort_by(|a, b| by_date(a, b));
    paginate(matches, pagination)
}
