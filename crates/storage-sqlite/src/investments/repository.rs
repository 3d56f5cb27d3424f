use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use fintrack_core::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use fintrack_core::Result;
use log::debug;
use uuid::Uuid;

use super::model::InvestmentDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::investments;

pub struct InvestmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        InvestmentRepository { pool, writer }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn list(&self) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = investments::table
            .order(investments::created_at.asc())
            .select(InvestmentDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Investment::from).collect())
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Option<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let row = investments::table
            .find(investment_id)
            .select(InvestmentDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Investment::from))
    }

    fn find_by_external_id_and_provider(
        &self,
        external_id: &str,
        provider_broker: &str,
    ) -> Result<Option<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let row = investments::table
            .filter(investments::external_id.eq(external_id))
            .filter(investments::provider_broker.eq(provider_broker))
            .select(InvestmentDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Investment::from))
    }

    /// Inserts when the id is absent or unknown, otherwise updates in place.
    async fn save(&self, investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let now = Utc::now().naive_utc();
                let existing = match investment.id.as_deref() {
                    Some(investment_id) => investments::table
                        .find(investment_id)
                        .select(InvestmentDB::as_select())
                        .first(conn)
                        .optional()
                        .into_core()?,
                    None => None,
                };

                let saved = match existing {
                    Some(current) => {
                        let row =
                            InvestmentDB::from_new(investment, current.id, current.created_at, now);
                        diesel::update(investments::table.find(row.id.as_str()))
                            .set(&row)
                            .returning(InvestmentDB::as_returning())
                            .get_result(conn)
                            .into_core()?
                    }
                    None => {
                        let row = InvestmentDB::from_new(
                            investment,
                            Uuid::new_v4().to_string(),
                            now,
                            now,
                        );
                        diesel::insert_into(investments::table)
                            .values(&row)
                            .returning(InvestmentDB::as_returning())
                            .get_result(conn)
                            .into_core()?
                    }
                };
                debug!("Saved investment {}", saved.id);
                Ok(Investment::from(saved))
            })
            .await
    }

    async fn delete(&self, investment_id: &str) -> Result<usize> {
        let investment_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(investments::table.find(investment_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
