//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod breed_repo;
pub mod dog_repo;

pub use breed_repo::BreedRepo;
pub use dog_repo::DogRepo;
