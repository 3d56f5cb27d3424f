//! Database models for assets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use fintrack_core::assets::{Asset, NewAsset};

use crate::utils::parse_decimal;

#[derive(Queryable, Identifiable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub name: String,
    pub asset_type: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable columns of an asset row.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(treat_none_as_null = true)]
pub struct AssetChangesDB {
    pub name: String,
    pub asset_type: String,
    pub value: String,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl AssetDB {
    pub fn new(id: String, asset: NewAsset, now: NaiveDateTime) -> Self {
        Self {
            id,
            name: asset.name,
            asset_type: asset.asset_type,
            value: asset.value.to_string(),
            description: asset.description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl AssetChangesDB {
    pub fn new(asset: NewAsset, now: NaiveDateTime) -> Self {
        Self {
            name: asset.name,
            asset_type: asset.asset_type,
            value: asset.value.to_string(),
            description: asset.description,
            updated_at: now,
        }
    }
}

impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            value: parse_decimal(&db.value, "value"),
            id: db.id,
            name: db.name,
            asset_type: db.asset_type,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
