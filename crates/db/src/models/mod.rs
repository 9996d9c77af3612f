//! Row structs and their JSON projections.
//!
//! Each submodule contains `FromRow` structs matching a query's column list
//! and, where the wire shape differs from the row, the `Serialize` struct the
//! API returns.

pub mod dog;
