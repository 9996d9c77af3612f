//! Repository for the `breeds` table.

use sqlx::PgPool;

/// Read access to breed reference data.
pub struct BreedRepo;

impl BreedRepo {
    /// Every breed name, ascending in byte order (uppercase before
    /// lowercase) regardless of the database's default collation.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(r#"SELECT name FROM breeds ORDER BY name COLLATE "C""#)
            .fetch_all(pool)
            .await
    }
}
