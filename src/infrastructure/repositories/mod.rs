// src/infrastructure/repositories/mod.rs
mod error;
mod memory_article;
mod postgres_article;

pub use error::map_sqlx;
pub use memory_article::MemoryArticleRepository;
pub use postgres_article::PostgresArticleRepository;
