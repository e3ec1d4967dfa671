//! PostgreSQL-backed `AcronymRepository` using Diesel.
//!
//! Category links live in `acronym_category_pivot`; the pair
//! `(acronym_id, category_id)` is unique, so attaching twice is a no-op.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AcronymRepository, AcronymRepositoryError};
use crate::domain::{Acronym, AcronymId, Category, CategoryId, NewAcronym};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AcronymRow, AcronymUpdate, CategoryRow, NewAcronymRow, NewPivotRow};
use super::pool::{DbPool, PoolError};
use super::schema::{acronym_category_pivot, acronyms, categories};

#[derive(Clone)]
pub struct DieselAcronymRepository {
    pool: DbPool,
}

impl DieselAcronymRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> AcronymRepositoryError {
    map_pool_error(error, AcronymRepositoryError::connection)
}

fn diesel_error(
    operation: &'static str,
) -> impl FnOnce(diesel::result::Error) -> AcronymRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            AcronymRepositoryError::query,
            AcronymRepositoryError::connection,
        )
    }
}

#[async_trait]
impl AcronymRepository for DieselAcronymRepository {
    async fn list_all(&self) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<AcronymRow> = acronyms::table
            .select(AcronymRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error("list acronyms"))?;
        Ok(rows.into_iter().map(Acronym::from).collect())
    }

    async fn find_by_id(&self, id: &AcronymId) -> Result<Option<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<AcronymRow> = acronyms::table
            .find(*id.as_uuid())
            .select(AcronymRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error("find acronym"))?;
        Ok(row.map(Acronym::from))
    }

    async fn search(&self, term: &str) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<AcronymRow> = acronyms::table
            .filter(acronyms::short.eq(term).or(acronyms::long.eq(term)))
            .select(AcronymRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error("search acronyms"))?;
        Ok(rows.into_iter().map(Acronym::from).collect())
    }

    async fn insert(&self, acronym: &NewAcronym) -> Result<Acronym, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let new_row = NewAcronymRow {
            short: &acronym.content.short,
            long: &acronym.content.long,
            user_id: *acronym.user_id.as_uuid(),
        };
        let row: AcronymRow = diesel::insert_into(acronyms::table)
            .values(&new_row)
            .returning(AcronymRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error("insert acronym"))?;
        Ok(row.into())
    }

    async fn update(&self, acronym: &Acronym) -> Result<bool, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let changes = AcronymUpdate {
            short: acronym.short(),
            long: acronym.long(),
            user_id: *acronym.user_id().as_uuid(),
        };
        let affected = diesel::update(acronyms::table.find(*acronym.id().as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(diesel_error("update acronym"))?;
        Ok(affected > 0)
    }

    async fn delete(&self, id: &AcronymId) -> Result<bool, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let affected = diesel::delete(acronyms::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error("delete acronym"))?;
        Ok(affected > 0)
    }

    async fn categories_for(
        &self,
        id: &AcronymId,
    ) -> Result<Vec<Category>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<CategoryRow> = acronym_category_pivot::table
            .inner_join(categories::table)
            .filter(acronym_category_pivot::acronym_id.eq(*id.as_uuid()))
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error("load acronym categories"))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn attach_category(
        &self,
        acronym_id: &AcronymId,
        category_id: &CategoryId,
    ) -> Result<(), AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let link = NewPivotRow {
            acronym_id: *acronym_id.as_uuid(),
            category_id: *category_id.as_uuid(),
        };
        diesel::insert_into(acronym_category_pivot::table)
            .values(&link)
            .on_conflict((
                acronym_category_pivot::acronym_id,
                acronym_category_pivot::category_id,
            ))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(diesel_error("attach category"))?;
        Ok(())
    }
}
