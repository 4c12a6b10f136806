use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AdvocateReader, AdvocateWriter};

/// Diesel implementation of the advocate repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AdvocateReader for DieselRepository {
    fn list_advocates(&self) -> RepositoryResult<Vec<Advocate>> {
        use crate::models::advocate::Advocate as DbAdvocate;
        use crate::schema::advocates;

        let mut conn = self.pool.get()?;
        let rows = advocates::table
            .order(advocates::id.asc())
            .load::<DbAdvocate>(&mut conn)?;

        rows.into_iter()
            .map(|row| {
                row.try_into().map_err(|e: serde_json::Error| {
                    RepositoryError::ValidationError(format!("Invalid specialties column: {e}"))
                })
            })
            .collect()
    }
}

impl AdvocateWriter for DieselRepository {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;
        use crate::schema::advocates;

        let mut conn = self.pool.get()?;
        let insertables = new_advocates
            .iter()
            .map(|a| {
                a.try_into().map_err(|e: serde_json::Error| {
                    RepositoryError::ValidationError(format!("Invalid specialties value: {e}"))
                })
            })
            .collect::<RepositoryResult<Vec<DbNewAdvocate>>>()?;

        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
