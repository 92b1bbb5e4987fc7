//! Repository implementations.
//!
//! - [`InMemoryShortUrlRepository`] - process-local short URL store

mod memory_short_url_repository;

pub use memory_short_url_repository::InMemoryShortUrlRepository;
