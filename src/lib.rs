//! Relational schema and typed access surface for a movie-catalog content
//! domain: film works, genres, people, and the junction tables wiring them
//! together under the `content` database schema.

pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
