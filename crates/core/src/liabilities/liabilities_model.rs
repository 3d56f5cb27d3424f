//! Liability domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{require_non_blank, require_non_negative};
use crate::Result;

/// Domain model representing money the user owes (loan, credit card...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub liability_type: String,
    /// Outstanding amount, positive magnitude
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or updating a liability
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLiability {
    pub name: String,
    pub liability_type: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewLiability {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("name", &self.name)?;
        require_non_blank("liabilityType", &self.liability_type)?;
        require_non_negative("amount", self.amount)?;
        Ok(())
    }
}
