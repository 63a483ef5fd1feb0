pub mod customer_repo;
pub mod models;
pub mod order_repo;
pub mod product_repo;

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<DieselError> for DomainError {
    fn from(e: DieselError) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Deleting a row still referenced by an order trips a foreign key; report
/// that as a conflict rather than a storage fault.
fn delete_error(entity: &str, e: DieselError) -> DomainError {
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DomainError::Conflict(format!("{entity} is referenced by existing orders."))
        }
        other => other.into(),
    }
}

#[cfg(test)]
#[path = "../../tests/support/postgres.rs"]
mod postgres;

#[cfg(test)]
pub(crate) mod testing {
    use diesel_migrations::MigrationHarness;
    use testcontainers::{ContainerAsync, GenericImage};

    use super::postgres::start_postgres;
    use crate::db::{create_pool, DbPool};

    /// Starts a throwaway Postgres and returns a migrated pool.
    pub async fn setup_db() -> (ContainerAsync<GenericImage>, DbPool) {
        let (container, url) = start_postgres().await;
        let pool = create_pool(&url, 4).expect("Failed to create pool");
        {
            let mut conn = pool.get().expect("Failed to get connection");
            conn.run_pending_migrations(crate::MIGRATIONS)
                .expect("Failed to run migrations");
        }
        (container, pool)
    }
}
