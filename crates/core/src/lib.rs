//! Domain types and pure validation rules for the movie catalog.
//!
//! Nothing in this crate performs I/O; the store adapter (`marquee-db`) and
//! the HTTP layer (`marquee-api`) both build on it.

pub mod error;
pub mod movie;
pub mod pagination;
pub mod types;
