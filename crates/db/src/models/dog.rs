//! Dog models: the listing projection and the detail record.

use serde::Serialize;
use sqlx::FromRow;
use tailspin_core::dog::{AdoptionStatus, Gender};
use tailspin_core::error::CoreError;
use tailspin_core::types::DbId;

/// One entry of `GET /api/dogs`: a dog joined to its breed name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DogSummary {
    pub id: DbId,
    pub name: String,
    pub breed: String,
}

/// Raw detail row with status and gender still as stored codes.
#[derive(Debug, Clone, FromRow)]
pub struct DogDetailRow {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub description: String,
    pub gender: String,
    pub status: String,
}

/// Body of `GET /api/dogs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogDetail {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub description: String,
    pub gender: Gender,
    pub status: AdoptionStatus,
}

impl TryFrom<DogDetailRow> for DogDetail {
    type Error = CoreError;

    /// Fails only if the `CHECK` constraints on `dogs` were bypassed.
    fn try_from(row: DogDetailRow) -> Result<Self, Self::Error> {
        let gender = Gender::from_str(&row.gender).ok_or_else(|| {
            CoreError::Internal(format!("dog {} has unknown gender '{}'", row.id, row.gender))
        })?;
        let status = AdoptionStatus::from_str(&row.status).ok_or_else(|| {
            CoreError::Internal(format!("dog {} has unknown status '{}'", row.id, row.status))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            breed: row.breed,
            age: row.age,
            description: row.description,
            gender,
            status,
        })
    }
}
