use serde::{Deserialize, Serialize};

/// Date field assumed when the service does not name one.
pub const DEFAULT_DATE_FIELD: &str = "CREATED";

/// Structured filters inferred by the search service from a query.
///
/// Every field is optional. `None`, an empty string and an empty list all
/// mean "no constraint on this facet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub location_name: Option<String>,
    pub location_type: Option<String>,
    pub city: Option<String>,
    pub company_name: Option<String>,
    pub carrier_name: Option<String>,
    pub service: Option<Vec<String>>,
    pub collected_by: Option<Vec<String>>,
    pub flags: Option<Vec<String>>,

    /// Which timestamp the date bounds apply to (`CREATED`, `STORED`, ...).
    pub date_field: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,

    pub exclude_status: Option<Vec<String>>,
    pub exclude_location_name: Option<String>,
    pub exclude_location_type: Option<Vec<String>>,
    pub exclude_city: Option<String>,
    pub exclude_company_name: Option<String>,
    pub exclude_carrier_name: Option<String>,
    pub exclude_service: Option<Vec<String>>,
    pub exclude_collected_by: Option<Vec<String>>,
    pub exclude_flags: Option<Vec<String>>,
}

impl Filters {
    /// The date field in effect, falling back to [`DEFAULT_DATE_FIELD`].
    pub fn effective_date_field(&self) -> &str {
        present_text(&self.date_field).unwrap_or(DEFAULT_DATE_FIELD)
    }

    /// True when at least one date bound is set.
    pub fn has_date_range(&self) -> bool {
        present_text(&self.date_from).is_some() || present_text(&self.date_to).is_some()
    }
}

/// Returns the value if it is a non-empty string.
pub fn present_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Returns the values if the list has at least one element.
pub fn present_list(values: &Option<Vec<String>>) -> Option<&[String]> {
    values.as_deref().filter(|items| !items.is_empty())
}
