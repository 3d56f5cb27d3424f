use chrono::NaiveDateTime;
use diesel::prelude::*;
use fintrack_core::liabilities::{Liability, NewLiability};

use crate::utils::parse_decimal;

#[derive(Queryable, Identifiable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::liabilities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LiabilityDB {
    pub id: String,
    pub name: String,
    pub liability_type: String,
    pub amount: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::liabilities)]
#[diesel(treat_none_as_null = true)]
pub struct LiabilityChangesDB {
    pub name: String,
    pub liability_type: String,
    pub amount: String,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl LiabilityDB {
    pub fn new(id: String, liability: NewLiability, now: NaiveDateTime) -> Self {
        Self {
            id,
            name: liability.name,
            liability_type: liability.liability_type,
            amount: liability.amount.to_string(),
            description: liability.description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl LiabilityChangesDB {
    pub fn new(liability: NewLiability, now: NaiveDateTime) -> Self {
        Self {
            name: liability.name,
            liability_type: liability.liability_type,
            amount: liability.amount.to_string(),
            description: liability.description,
            updated_at: now,
        }
    }
}

impl From<LiabilityDB> for Liability {
    fn from(db: LiabilityDB) -> Self {
        Self {
            amount: parse_decimal(&db.amount, "amount"),
            id: db.id,
            name: db.name,
            liability_type: db.liability_type,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
