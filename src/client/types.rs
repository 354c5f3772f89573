use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filters::Filters;

/// Body of a search submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
}

impl SearchRequest {
    /// The query must already be trimmed and non-empty.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Successful search payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<OrderRecord>,
    #[serde(default)]
    pub filters: Option<Filters>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub follow_up: Option<String>,
}

impl SearchResponse {
    /// Treats an empty follow-up message as absent.
    pub fn normalized(mut self) -> Self {
        if self.follow_up.as_deref().is_some_and(|text| text.trim().is_empty()) {
            self.follow_up = None;
        }
        self
    }
}

/// One order returned by the service.
///
/// Known columns are typed; anything else the service sends is kept in
/// `extra` so JSON output round-trips it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRecord {
    pub id: Option<i64>,
    pub tracking_no: Option<String>,
    pub order_no: Option<String>,
    pub service: Option<String>,
    pub status: Option<String>,
    pub collected_by_type: Option<String>,
    pub recipient_phone: Option<String>,
    pub compartment_no: Option<i64>,
    pub time_created: Option<Value>,
    pub time_stored: Option<Value>,
    pub time_collected: Option<Value>,
    pub expires_at: Option<Value>,
    pub flags: Option<String>,
    pub location_name: Option<String>,
    pub location_type: Option<String>,
    pub city: Option<String>,
    pub company_name: Option<String>,
    pub carrier_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OrderRecord {
    /// Creation time as display text (strings verbatim, numbers as-is).
    pub fn created_display(&self) -> Option<String> {
        self.time_created.as_ref().and_then(value_text)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body the service sends with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
