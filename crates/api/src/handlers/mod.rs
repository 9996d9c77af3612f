//! Request handlers.
//!
//! Each submodule provides async read handlers for one resource. Handlers
//! delegate to the repositories in `tailspin_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod breeds;
pub mod dogs;
pub mod sitemap;
