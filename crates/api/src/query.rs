//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/dogs` (`?breeds=Beagle,Pug`).
///
/// The raw value is handed to `tailspin_core::breeds::parse_breed_filter`.
#[derive(Debug, Default, Deserialize)]
pub struct DogListParams {
    pub breeds: Option<String>,
}
