use serde::Serialize;

use super::news::NewsArticle;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_news: usize,
    pub published_news: usize,
    pub draft_news: usize,
    pub breaking_news: usize,
    pub total_categories: usize,
    pub total_users: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub stats: Stats,
    pub recent_news: Vec<NewsArticle>,
    pub popular_news: Vec<NewsArticle>,
}
