//! Entity definitions for the movie-catalog content domain.
//!
//! All tables live in the `content` schema; connections are pointed at it via
//! the schema search path (see [`crate::db`]), so table names stay unqualified
//! here and the same entities drive the SQLite test backend.

pub mod film_work;
pub mod genre;
pub mod genre_film_work;
pub mod person;
pub mod person_film_work;
