//! Repository for the `dogs` table joined to `breeds`.

use sqlx::PgPool;
use tailspin_core::types::DbId;

use crate::models::dog::{DogDetailRow, DogSummary};

/// Column list for `DogSummary` queries.
const SUMMARY_COLUMNS: &str = "d.id, d.name, b.name AS breed";

/// Column list for `DogDetailRow` queries.
const DETAIL_COLUMNS: &str = "\
    d.id, d.name, b.name AS breed, d.age, d.description, d.gender, d.status";

/// Read access to dogs.
pub struct DogRepo;

impl DogRepo {
    /// List dogs with their breed name, ordered by id.
    ///
    /// An empty `breeds` slice returns every dog. Otherwise only dogs whose
    /// breed name equals one of the entries are returned; the names are bound
    /// as a single `TEXT[]` parameter.
    pub async fn list(pool: &PgPool, breeds: &[String]) -> Result<Vec<DogSummary>, sqlx::Error> {
        if breeds.is_empty() {
            let query = format!(
                "SELECT {SUMMARY_COLUMNS} FROM dogs d \
                 JOIN breeds b ON d.breed_id = b.id \
                 ORDER BY d.id"
            );
            sqlx::query_as::<_, DogSummary>(&query)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {SUMMARY_COLUMNS} FROM dogs d \
                 JOIN breeds b ON d.breed_id = b.id \
                 WHERE b.name = ANY($1) \
                 ORDER BY d.id"
            );
            sqlx::query_as::<_, DogSummary>(&query)
                .bind(breeds)
                .fetch_all(pool)
                .await
        }
    }

    /// Find one dog with its breed name. Returns `None` if no such id exists.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<DogDetailRow>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM dogs d \
             JOIN breeds b ON d.breed_id = b.id \
             WHERE d.id = $1"
        );
        sqlx::query_as::<_, DogDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All dog ids, ascending.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM dogs ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
