//! Breed name handling shared by the listing endpoints.
//!
//! - [`parse_breed_filter`] turns the raw `?breeds=` value into the set of
//!   names a dog's breed must be a member of.
//! - [`with_sentinels`] appends the fixed catch-all entries the client
//!   offers alongside the stored breeds.

/// Catch-all breed entries appended after the stored breed names, in order.
pub const SENTINEL_BREEDS: [&str; 2] = ["Mixed Breed", "Unknown"];

/// Parse a comma-separated breed list.
///
/// Entries are trimmed and empty entries dropped. An empty result means
/// "no filter", which is also what a missing parameter means. Duplicates are
/// removed; first occurrence wins.
pub fn parse_breed_filter(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Append [`SENTINEL_BREEDS`] to an already sorted list of stored names.
///
/// A sentinel that is already stored is not repeated.
pub fn with_sentinels(mut names: Vec<String>) -> Vec<String> {
    for sentinel in SENTINEL_BREEDS {
        if !names.iter().any(|n| n == sentinel) {
            names.push(sentinel.to_string());
        }
    }
    names
}
