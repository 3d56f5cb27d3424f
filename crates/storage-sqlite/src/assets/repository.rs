use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use fintrack_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use fintrack_core::{Error, Result};
use uuid::Uuid;

use super::model::{AssetChangesDB, AssetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::assets;

pub struct AssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AssetRepository { pool, writer }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    fn list(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = assets::table
            .order(assets::created_at.asc())
            .select(AssetDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Asset::from).collect())
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Option<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        let row = assets::table
            .find(asset_id)
            .select(AssetDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Asset::from))
    }

    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let row = AssetDB::new(
                    Uuid::new_v4().to_string(),
                    new_asset,
                    Utc::now().naive_utc(),
                );
                let saved = diesel::insert_into(assets::table)
                    .values(&row)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Asset::from(saved))
            })
            .await
    }

    async fn update(&self, asset_id: &str, changes: NewAsset) -> Result<Asset> {
        let asset_id = asset_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let changes = AssetChangesDB::new(changes, Utc::now().naive_utc());
                diesel::update(assets::table.find(asset_id.as_str()))
                    .set(&changes)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .into_core()?
                    .map(Asset::from)
                    .ok_or_else(|| Error::not_found("Asset", asset_id))
            })
            .await
    }

    async fn delete(&self, asset_id: &str) -> Result<usize> {
        let asset_id = asset_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(assets::table.find(asset_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
