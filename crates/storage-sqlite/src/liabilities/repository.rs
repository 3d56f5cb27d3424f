use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use fintrack_core::liabilities::{Liability, LiabilityRepositoryTrait, NewLiability};
use fintrack_core::{Error, Result};
use uuid::Uuid;

use super::model::{LiabilityChangesDB, LiabilityDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::liabilities;

pub struct LiabilityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LiabilityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LiabilityRepository { pool, writer }
    }
}

#[async_trait]
impl LiabilityRepositoryTrait for LiabilityRepository {
    fn list(&self) -> Result<Vec<Liability>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = liabilities::table
            .order(liabilities::created_at.asc())
            .select(LiabilityDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Liability::from).collect())
    }

    fn get_by_id(&self, liability_id: &str) -> Result<Option<Liability>> {
        let mut conn = get_connection(&self.pool)?;
        let row = liabilities::table
            .find(liability_id)
            .select(LiabilityDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Liability::from))
    }

    async fn create(&self, new_liability: NewLiability) -> Result<Liability> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Liability> {
                let row = LiabilityDB::new(
                    Uuid::new_v4().to_string(),
                    new_liability,
                    Utc::now().naive_utc(),
                );
                let saved = diesel::insert_into(liabilities::table)
                    .values(&row)
                    .returning(LiabilityDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Liability::from(saved))
            })
            .await
    }

    async fn update(&self, liability_id: &str, changes: NewLiability) -> Result<Liability> {
        let liability_id = liability_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Liability> {
                let changes = LiabilityChangesDB::new(changes, Utc::now().naive_utc());
                diesel::update(liabilities::table.find(liability_id.as_str()))
                    .set(&changes)
                    .returning(LiabilityDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .into_core()?
                    .map(Liability::from)
                    .ok_or_else(|| Error::not_found("Liability", liability_id))
            })
            .await
    }

    async fn delete(&self, liability_id: &str) -> Result<usize> {
        let liability_id = liability_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(liabilities::table.find(liability_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
