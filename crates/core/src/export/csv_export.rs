use chrono::{NaiveDate, NaiveDateTime};
use csv::Writer;
use rust_decimal::Decimal;

use crate::assets::Asset;
use crate::constants::EXPORT_TIMESTAMP_FORMAT;
use crate::errors::{Error, Result};
use crate::investments::Investment;
use crate::liabilities::Liability;

const ASSET_HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Asset Type",
    "Value",
    "Description",
    "Created At",
    "Updated At",
];

const LIABILITY_HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Liability Type",
    "Amount",
    "Description",
    "Created At",
    "Updated At",
];

const INVESTMENT_HEADERS: [&str; 14] = [
    "ID",
    "Investment Type",
    "Provider/Broker",
    "Investment Amount",
    "Current Amount",
    "Gain/Loss",
    "Gain/Loss %",
    "Purchased Date",
    "Maturity Date",
    "Scheme Code",
    "Scheme Name",
    "External ID",
    "Created At",
    "Updated At",
];

fn timestamp(value: &NaiveDateTime) -> String {
    value.format(EXPORT_TIMESTAMP_FORMAT).to_string()
}

fn date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

fn amount(value: Decimal) -> String {
    value.normalize().to_string()
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

/// Renders assets as CSV, one header row followed by one row per asset.
pub fn export_assets_csv(assets: &[Asset]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(ASSET_HEADERS)?;
    for asset in assets {
        writer.write_record([
            asset.id.clone(),
            asset.name.clone(),
            asset.asset_type.clone(),
            amount(asset.value),
            asset.description.clone().unwrap_or_default(),
            timestamp(&asset.created_at),
            timestamp(&asset.updated_at),
        ])?;
    }
    finish(writer)
}

pub fn export_liabilities_csv(liabilities: &[Liability]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(LIABILITY_HEADERS)?;
    for liability in liabilities {
        writer.write_record([
            liability.id.clone(),
            liability.name.clone(),
            liability.liability_type.clone(),
            amount(liability.amount),
            liability.description.clone().unwrap_or_default(),
            timestamp(&liability.created_at),
            timestamp(&liability.updated_at),
        ])?;
    }
    finish(writer)
}

/// Renders investments as CSV including the computed gain/loss columns.
pub fn export_investments_csv(investments: &[Investment]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(INVESTMENT_HEADERS)?;
    for investment in investments {
        writer.write_record([
            investment.id.clone(),
            investment.investment_type.clone(),
            investment.provider_broker.clone(),
            amount(investment.investment_amount),
            amount(investment.current_amount),
            amount(investment.gain_loss()),
            format!("{:.2}", investment.gain_loss_percent()),
            date(investment.purchased_date),
            date(investment.maturity_date),
            investment.scheme_code.clone().unwrap_or_default(),
            investment.scheme_name.clone().unwrap_or_default(),
            investment.external_id.clone().unwrap_or_default(),
            timestamp(&investment.created_at),
            timestamp(&investment.updated_at),
        ])?;
    }
    finish(writer)
}
