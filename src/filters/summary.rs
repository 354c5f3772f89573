//! Human-readable summary of the filters inferred for a query.
//!
//! The output order is fixed by the tables below, never by the order of
//! keys in the service response.

use serde::Serialize;

use super::types::{present_list, present_text, Filters};

const LIST_SEPARATOR: &str = ", ";
const EXCLUSION_SEPARATOR: &str = "; ";

/// One labeled line of the filter summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub label: String,
    pub value: String,
}

impl SummaryEntry {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

enum Facet {
    Text(fn(&Filters) -> &Option<String>),
    List(fn(&Filters) -> &Option<Vec<String>>),
}

impl Facet {
    fn render(&self, filters: &Filters) -> Option<String> {
        match self {
            Facet::Text(get) => present_text(get(filters)).map(str::to_string),
            Facet::List(get) => present_list(get(filters)).map(|items| items.join(LIST_SEPARATOR)),
        }
    }
}

const INCLUDED: &[(&str, Facet)] = &[
    ("Location", Facet::Text(|f| &f.location_name)),
    ("Location Type", Facet::Text(|f| &f.location_type)),
    ("City", Facet::Text(|f| &f.city)),
    ("Company", Facet::Text(|f| &f.company_name)),
    ("Carrier", Facet::Text(|f| &f.carrier_name)),
    ("Service", Facet::List(|f| &f.service)),
    ("Collected By", Facet::List(|f| &f.collected_by)),
    ("Flags", Facet::List(|f| &f.flags)),
];

const EXCLUDED: &[(&str, Facet)] = &[
    ("Status", Facet::List(|f| &f.exclude_status)),
    ("Location", Facet::Text(|f| &f.exclude_location_name)),
    ("Location Type", Facet::List(|f| &f.exclude_location_type)),
    ("City", Facet::Text(|f| &f.exclude_city)),
    ("Company", Facet::Text(|f| &f.exclude_company_name)),
    ("Carrier", Facet::Text(|f| &f.exclude_carrier_name)),
    ("Service", Facet::List(|f| &f.exclude_service)),
    ("Collected By", Facet::List(|f| &f.exclude_collected_by)),
    ("Flags", Facet::List(|f| &f.exclude_flags)),
];

/// Builds the ordered summary for a filter object.
///
/// Returns an empty list for `None` or for filters with no constraints.
pub fn summarize(filters: Option<&Filters>) -> Vec<SummaryEntry> {
    let Some(filters) = filters else {
        return Vec::new();
    };

    let mut summary: Vec<SummaryEntry> = INCLUDED
        .iter()
        .filter_map(|(label, facet)| {
            facet
                .render(filters)
                .map(|value| SummaryEntry::new(*label, value))
        })
        .collect();

    if let Some(range) = date_range(filters) {
        let label = format!("Date ({})", capitalize(filters.effective_date_field()));
        summary.push(SummaryEntry::new(label, range));
    }

    let exclusions: Vec<String> = EXCLUDED
        .iter()
        .filter_map(|(label, facet)| {
            facet
                .render(filters)
                .map(|value| format!("{label}: {value}"))
        })
        .collect();

    if !exclusions.is_empty() {
        summary.push(SummaryEntry::new(
            "Excluded",
            exclusions.join(EXCLUSION_SEPARATOR),
        ));
    }

    summary
}

fn date_range(filters: &Filters) -> Option<String> {
    match (present_text(&filters.date_from), present_text(&filters.date_to)) {
        (Some(from), Some(to)) => Some(format!("{from} → {to}")),
        (Some(from), None) => Some(format!("From {from}")),
        (None, Some(to)) => Some(format!("Until {to}")),
        (None, None) => None,
    }
}

/// Upper-cases the first character and lower-cases the rest.
///
/// Any token passes through; `"CREATED"` becomes `"Created"`.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, value: &str) -> SummaryEntry {
        SummaryEntry::new(label, value)
    }

    #[test]
    fn none_and_empty_filters_yield_nothing() {
        assert!(summarize(None).is_empty());
        assert!(summarize(Some(&Filters::default())).is_empty());
    }

    #[test]
    fn capitalize_handles_case_and_empty() {
        assert_eq!(capitalize("CREATED"), "Created");
        assert_eq!(capitalize("updated"), "Updated");
        assert_eq!(capitalize("sToReD"), "Stored");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn date_from_only() {
        let filters = Filters {
            date_from: Some("2026-01-01".into()),
            date_field: Some("STORED".into()),
            ..Filters::default()
        };
        assert_eq!(
            summarize(Some(&filters)),
            vec![entry("Date (Stored)", "From 2026-01-01")]
        );
    }

    #[test]
    fn empty_date_field_uses_default_label() {
        let filters = Filters {
            date_to: Some("2026-02-01".into()),
            date_field: Some(String::new()),
            ..Filters::default()
        };
        assert_eq!(
            summarize(Some(&filters)),
            vec![entry("Date (Created)", "Until 2026-02-01")]
        );
    }

    #[test]
    fn date_field_alone_emits_no_entry() {
        let filters = Filters {
            date_field: Some("COLLECTED".into()),
            ..Filters::default()
        };
        assert!(summarize(Some(&filters)).is_empty());
    }

    #[test]
    fn empty_exclusions_are_skipped() {
        let filters = Filters {
            exclude_status: Some(Vec::new()),
            exclude_city: Some(String::new()),
            exclude_service: Some(vec!["RETURNS".into()]),
            ..Filters::default()
        };
        assert_eq!(
            summarize(Some(&filters)),
            vec![entry("Excluded", "Service: RETURNS")]
        );
    }
}
