pub mod category;
pub mod news;
pub mod stats;
pub mod user;
