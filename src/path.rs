//! Records path construction.
//!
//! Pure string building, no I/O, so the path policy is testable without a
//! server.

use serde::{Deserialize, Serialize};

/// Record type inserted when a name is given without a type.
pub(crate) const DEFAULT_RECORD_TYPE: &str = "A";

/// Optional narrowing of a records operation by record type and/or name.
///
/// Both fields default to absent. Absence is distinct from an empty string:
/// an absent field contributes no path segment at all, which is what selects
/// the whole-zone `{domain}/records` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Record type to narrow to, e.g. `"A"` or `"CNAME"`.
    pub record_type: Option<String>,
    /// Record name to narrow to, e.g. `"www"`.
    pub name: Option<String>,
}

impl RecordFilter {
    /// Filter on a record type only.
    pub fn by_type(record_type: impl Into<String>) -> Self {
        Self {
            record_type: Some(record_type.into()),
            name: None,
        }
    }

    /// Filter on a record type and name.
    pub fn by_type_and_name(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record_type: Some(record_type.into()),
            name: Some(name.into()),
        }
    }
}

/// Build the `{domain}/records[/{type}][/{name}]` path for list/replace
/// calls.
///
/// A name without a type gets the default type `A` inserted before it, since
/// the API has no `{domain}/records//{name}` form. The domain and filter
/// values are concatenated verbatim; the caller is responsible for any
/// escaping.
pub fn records_path(domain: &str, filter: &RecordFilter) -> String {
    match (filter.record_type.as_deref(), filter.name.as_deref()) {
        (None, None) => format!("{domain}/records"),
        (Some(record_type), None) => format!("{domain}/records/{record_type}"),
        (Some(record_type), Some(name)) => format!("{domain}/records/{record_type}/{name}"),
        (None, Some(name)) => format!("{domain}/records/{DEFAULT_RECORD_TYPE}/{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter() {
        let path = records_path("example.com", &RecordFilter::default());
        assert_eq!(path, "example.com/records");
    }

    #[test]
    fn type_only() {
        let path = records_path("example.com", &RecordFilter::by_type("A"));
        assert_eq!(path, "example.com/records/A");
    }

    #[test]
    fn type_and_name() {
        let path = records_path("example.com", &RecordFilter::by_type_and_name("CNAME", "www"));
        assert_eq!(path, "example.com/records/CNAME/www");
    }

    #[test]
    fn name_without_type_defaults_to_a() {
        let filter = RecordFilter {
            record_type: None,
            name: Some("www".to_string()),
        };
        let path = records_path("example.com", &filter);
        assert_eq!(path, "example.com/records/A/www");
    }

    #[test]
    fn empty_string_type_is_not_absent() {
        // An empty string is still a present value and lands in the path
        // as-is. Callers wanting "no type" must leave the field as None.
        let path = records_path("example.com", &RecordFilter::by_type(""));
        assert_eq!(path, "example.com/records/");
    }

    #[test]
    fn domain_is_forwarded_verbatim() {
        let path = records_path("sub.example.com", &RecordFilter::default());
        assert_eq!(path, "sub.example.com/records");
    }
}
