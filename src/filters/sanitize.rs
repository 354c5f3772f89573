//! Boundary validation of filters received from the search service.
//!
//! Values outside the known order vocabulary are dropped with a warning so
//! the summary never shows facets the service cannot honor.

use super::types::{present_text, Filters, DEFAULT_DATE_FIELD};

pub const STATUSES: &[&str] = &[
    "CREATED",
    "COURIER_STORED",
    "CUSTOMER_STORED",
    "DELIVERED",
    "OPERATOR_COLLECTED",
    "EXPIRED",
];
pub const SERVICES: &[&str] = &["DELIVERY", "RETURNS"];
pub const COLLECTED_BY: &[&str] = &["COURIER", "CUSTOMER", "OPERATOR"];
pub const LOCATION_TYPES: &[&str] = &["PUDO", "LOCKER", "WAREHOUSE", "STORE"];
pub const FLAGS: &[&str] = &["FRAGILE", "VIP", "EXPIRED"];
pub const DATE_FIELDS: &[&str] = &["CREATED", "STORED", "COLLECTED"];

/// Query words that show the user chose the date field explicitly.
const DATE_FIELD_HINTS: &[&str] = &["created", "creation", "stored", "collected"];

pub const DATE_ASSUMPTION: &str = "Date filter defaulted to order creation time. \
To filter by stored or collected time, specify 'stored' or 'collected' in your query.";

/// What sanitizing changed or assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// One line per dropped or replaced value.
    pub warnings: Vec<String>,
    /// Defaults applied on the user's behalf.
    pub assumptions: Vec<String>,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.assumptions.is_empty()
    }
}

struct Vocabulary {
    allowed: &'static [&'static str],
    noun: &'static str,
    valid_label: &'static str,
}

impl Vocabulary {
    fn warning(&self, value: &str) -> String {
        format!(
            "Unknown {} '{}' was ignored. {}: [{}]",
            self.noun,
            value,
            self.valid_label,
            self.allowed.join(", ")
        )
    }

    fn contains(&self, value: &str) -> bool {
        self.allowed.contains(&value)
    }

    fn retain(&self, values: &mut Option<Vec<String>>, warnings: &mut Vec<String>) {
        if let Some(values) = values {
            values.retain(|value| {
                let known = self.contains(value);
                if !known {
                    warnings.push(self.warning(value));
                }
                known
            });
        }
    }
}

const STATUS_VOCAB: Vocabulary = Vocabulary {
    allowed: STATUSES,
    noun: "status",
    valid_label: "Valid statuses",
};
const SERVICE_VOCAB: Vocabulary = Vocabulary {
    allowed: SERVICES,
    noun: "service",
    valid_label: "Valid services",
};
const COLLECTED_BY_VOCAB: Vocabulary = Vocabulary {
    allowed: COLLECTED_BY,
    noun: "collected_by",
    valid_label: "Valid values",
};
const LOCATION_TYPE_VOCAB: Vocabulary = Vocabulary {
    allowed: LOCATION_TYPES,
    noun: "location type",
    valid_label: "Valid types",
};
const FLAG_VOCAB: Vocabulary = Vocabulary {
    allowed: FLAGS,
    noun: "flag",
    valid_label: "Valid flags",
};

/// Drops unknown facet values and fills in the default date field.
///
/// `query` is the trimmed text the filters were inferred from; it decides
/// whether a defaulted date field is reported as an assumption.
pub fn sanitize(filters: &mut Filters, query: &str) -> SanitizeReport {
    let mut report = SanitizeReport::default();
    let warnings = &mut report.warnings;

    STATUS_VOCAB.retain(&mut filters.exclude_status, warnings);
    SERVICE_VOCAB.retain(&mut filters.service, warnings);
    SERVICE_VOCAB.retain(&mut filters.exclude_service, warnings);
    COLLECTED_BY_VOCAB.retain(&mut filters.collected_by, warnings);
    COLLECTED_BY_VOCAB.retain(&mut filters.exclude_collected_by, warnings);

    if let Some(location_type) = filters.location_type.take() {
        if LOCATION_TYPE_VOCAB.contains(&location_type) {
            filters.location_type = Some(location_type);
        } else {
            warnings.push(LOCATION_TYPE_VOCAB.warning(&location_type));
        }
    }
    LOCATION_TYPE_VOCAB.retain(&mut filters.exclude_location_type, warnings);

    FLAG_VOCAB.retain(&mut filters.flags, warnings);
    FLAG_VOCAB.retain(&mut filters.exclude_flags, warnings);

    let unknown_date_field = filters
        .date_field
        .as_deref()
        .filter(|field| !DATE_FIELDS.contains(&field.to_uppercase().as_str()))
        .map(str::to_string);
    if let Some(field) = unknown_date_field {
        warnings.push(format!(
            "Unknown date field '{field}'. Using {DEFAULT_DATE_FIELD} as default."
        ));
        filters.date_field = Some(DEFAULT_DATE_FIELD.to_string());
    }

    if filters.has_date_range() {
        if present_text(&filters.date_field).is_none() {
            filters.date_field = Some(DEFAULT_DATE_FIELD.to_string());
        }

        let query = query.to_lowercase();
        let user_chose_field = DATE_FIELD_HINTS.iter().any(|hint| query.contains(hint));
        if filters.date_field.as_deref() == Some(DEFAULT_DATE_FIELD) && !user_chose_field {
            report.assumptions.push(DATE_ASSUMPTION.to_string());
        }
    }

    report
}
