//! Plain-text and JSON output for one-shot searches.

use std::fmt::Write as _;

use serde::Serialize;

use crate::client::OrderRecord;
use crate::filters::SummaryEntry;
use crate::ui::search::SearchState;

const MISSING: &str = "-";

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub query: &'a str,
    pub summary: Vec<SummaryEntry>,
    pub results: &'a [OrderRecord],
    pub warnings: &'a [String],
    pub follow_up: Option<&'a str>,
}

impl<'a> JsonReport<'a> {
    pub fn from_state(state: &'a SearchState) -> Self {
        Self {
            query: &state.last_search_query,
            summary: state.summary(),
            results: &state.results,
            warnings: &state.warnings,
            follow_up: state.follow_up.as_deref(),
        }
    }
}

pub fn render_json(state: &SearchState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_state(state))
}

/// Human-readable report of a settled search.
pub fn render_text(state: &SearchState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Results for \"{}\"", state.last_search_query);

    let summary = state.summary();
    if !summary.is_empty() {
        out.push_str("\nFilters\n");
        for entry in &summary {
            let _ = writeln!(out, "  {}: {}", entry.label, entry.value);
        }
    }

    if !state.warnings.is_empty() {
        out.push_str("\nWarnings\n");
        for warning in &state.warnings {
            let _ = writeln!(out, "  ! {warning}");
        }
    }

    if let Some(follow_up) = &state.follow_up {
        let _ = writeln!(out, "\n→ {follow_up}");
    }

    if !state.results.is_empty() {
        out.push('\n');
        for record in &state.results {
            let _ = writeln!(out, "{}", result_line(record));
        }
    }

    let count = state.results.len();
    let noun = if count == 1 { "result" } else { "results" };
    let _ = writeln!(out, "\n{count} {noun}");
    out
}

/// Cells shown for each order, in display order.
pub fn result_cells(record: &OrderRecord) -> [String; 8] {
    let cell = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());
    [
        cell(&record.tracking_no),
        cell(&record.status),
        cell(&record.service),
        cell(&record.location_name),
        cell(&record.city),
        cell(&record.company_name),
        cell(&record.carrier_name),
        record
            .created_display()
            .unwrap_or_else(|| MISSING.to_string()),
    ]
}

pub const RESULT_COLUMNS: [&str; 8] = [
    "Tracking", "Status", "Service", "Location", "City", "Company", "Carrier", "Created",
];

fn result_line(record: &OrderRecord) -> String {
    result_cells(record)[..7].join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Filters;

    fn settled_state() -> SearchState {
        SearchState {
            last_search_query: "delivered at Location A".into(),
            results: vec![OrderRecord {
                tracking_no: Some("TRK-1".into()),
                status: Some("DELIVERED".into()),
                location_name: Some("Location A".into()),
                ..OrderRecord::default()
            }],
            filters: Some(Filters {
                location_name: Some("Location A".into()),
                exclude_status: Some(vec!["EXPIRED".into()]),
                ..Filters::default()
            }),
            warnings: vec!["Unknown flag 'X' was ignored.".into()],
            follow_up: Some("Filtering by creation date.".into()),
            generation: 1,
            ..SearchState::default()
        }
    }

    #[test]
    fn text_report_lists_sections_in_order() {
        let text = render_text(&settled_state());
        let expected = "Results for \"delivered at Location A\"\n\
                        \nFilters\n  Location: Location A\n  Excluded: Status: EXPIRED\n\
                        \nWarnings\n  ! Unknown flag 'X' was ignored.\n\
                        \n→ Filtering by creation date.\n\
                        \nTRK-1  DELIVERED  -  Location A  -  -  -\n\
                        \n1 result\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_results_report_count_only() {
        let state = SearchState {
            last_search_query: "nothing".into(),
            generation: 1,
            ..SearchState::default()
        };
        assert_eq!(render_text(&state), "Results for \"nothing\"\n\n0 results\n");
    }

    #[test]
    fn json_report_uses_camel_case() {
        let json = render_json(&settled_state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["query"], "delivered at Location A");
        assert_eq!(value["followUp"], "Filtering by creation date.");
        assert_eq!(value["summary"][0]["label"], "Location");
        assert_eq!(value["summary"][1]["value"], "Status: EXPIRED");
        assert_eq!(value["results"][0]["trackingNo"], "TRK-1");
    }
}
