//! Asset domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{require_non_blank, require_non_negative};
use crate::Result;

/// Domain model representing something the user owns (property, cash, vehicle...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub asset_type: String,
    pub value: Decimal,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or updating an asset
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub asset_type: String,
    pub value: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("name", &self.name)?;
        require_non_blank("assetType", &self.asset_type)?;
        require_non_negative("value", self.value)?;
        Ok(())
    }
}
