//! Domain types for the Tailspin Shelter adoption listing.
//!
//! Pure logic only (no database, no HTTP): ids and timestamps, the dog
//! status and gender enums, breed filter parsing and the breed list
//! sentinels.

pub mod breeds;
pub mod dog;
pub mod error;
pub mod types;
