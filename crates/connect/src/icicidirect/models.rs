//! Wire and result types for the ICICIDirect integration.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{serde_as, NoneAsEmptyString, PickFirst};

/// Message used when the remote side gave no usable explanation.
pub(crate) const UNKNOWN_ERROR: &str = "Unknown error";

/// `Status` of a successful response, compared case-insensitively.
pub(crate) fn is_success(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.trim().eq_ignore_ascii_case("Success"))
}

/// Signed envelope posted to every ICICIDirect endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SignedRequest {
    #[serde(rename = "AppKey")]
    pub app_key: String,
    pub time_stamp: String,
    #[serde(rename = "JSONPostData")]
    pub json_post_data: String,
    #[serde(rename = "Checksum")]
    pub checksum: String,
}

/// Login payload. Field order is part of the signed string.
#[derive(Debug, Serialize)]
pub(crate) struct LoginPayload<'a> {
    #[serde(rename = "Idirect_Userid")]
    pub user_id: &'a str,
    #[serde(rename = "Password")]
    pub password: &'a str,
}

/// SIP book payload. Field order is part of the signed string.
#[derive(Debug, Serialize)]
pub(crate) struct SipBookPayload<'a> {
    #[serde(rename = "SessionToken")]
    pub session_token: &'a str,
    #[serde(rename = "Idirect_Userid")]
    pub user_id: &'a str,
    pub order_sip_status: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "SessionToken", default)]
    pub session_token: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SipBookResponse {
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    /// Raw elements; each one is decoded on its own by [`SipBook::from_elements`].
    #[serde(rename = "Data", default)]
    pub data: Option<Vec<Value>>,
}

/// One SIP registration as reported by the SIP book.
///
/// Amounts arrive as JSON numbers, numeric strings or blank strings (no
/// amount). Ids arrive as strings or numbers.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteSip {
    #[serde(default)]
    pub scheme_name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub scheme_code: Option<String>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(default)]
    pub sip_amount: Option<Decimal>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(default)]
    pub current_value: Option<Decimal>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub sip_id: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub order_sip_status: Option<String>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

/// A SIP book element that could not be read as a [`RemoteSip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSip {
    /// SIP id when readable, else the scheme name, else `unknown`.
    pub label: String,
    pub reason: String,
}

/// Decoded SIP book. Bad elements are kept aside instead of failing the book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SipBook {
    pub records: Vec<RemoteSip>,
    pub rejected: Vec<RejectedSip>,
}

impl SipBook {
    pub fn from_elements(elements: Vec<Value>) -> Self {
        let mut book = SipBook::default();
        for element in elements {
            let label = element_label(&element);
            match serde_json::from_value::<RemoteSip>(element) {
                Ok(sip) => book.records.push(sip),
                Err(e) => book.rejected.push(RejectedSip {
                    label,
                    reason: e.to_string(),
                }),
            }
        }
        book
    }

    pub fn len(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<RemoteSip>> for SipBook {
    fn from(records: Vec<RemoteSip>) -> Self {
        SipBook {
            records,
            rejected: Vec::new(),
        }
    }
}

fn element_label(element: &Value) -> String {
    ["sip_id", "scheme_name"]
        .iter()
        .find_map(|key| match element.get(*key) {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRunResult {
    pub created: usize,
    pub updated: usize,
    pub total: usize,
    /// Records that could not be stored, by SIP id. A record without a
    /// readable SIP id is listed by scheme name, or as `unknown`.
    pub failed_ids: Vec<String>,
}
