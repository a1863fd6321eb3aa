//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 movie list endpoints and the
//! types those endpoints return.

mod client;
mod models;

pub use client::TmdbClient;
pub use models::{Category, CategoryKey, Movie, MoviePage};
