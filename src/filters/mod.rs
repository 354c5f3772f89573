//! Filters inferred by the search service and their display summary.

mod sanitize;
mod summary;
mod types;

pub use sanitize::{
    sanitize, SanitizeReport, COLLECTED_BY, DATE_ASSUMPTION, DATE_FIELDS, FLAGS, LOCATION_TYPES,
    SERVICES, STATUSES,
};
pub use summary::{capitalize, summarize, SummaryEntry};
pub use types::{present_list, present_text, Filters, DEFAULT_DATE_FIELD};
