//! DTOs exposed by the advocate listing endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;
use crate::pagination::PageInfo;

/// Raw query parameters accepted by `GET /advocates`.
///
/// Both parameters are optional. `page` arrives as an opaque string so that
/// malformed values can be recovered locally instead of failing
/// deserialization of the whole query string.
#[derive(Debug, Default, Deserialize)]
pub struct AdvocatesQuery {
    pub page: Option<String>,
    pub search: Option<String>,
}

impl AdvocatesQuery {
    /// Requested page number. Missing, non-numeric, or non-positive values
    /// default to 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Raw search term, defaulting to the empty string (matches everything).
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

/// Response body of `GET /advocates`.
#[derive(Debug, Serialize)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> AdvocatesQuery {
        AdvocatesQuery {
            page: page.map(str::to_string),
            search: None,
        }
    }

    #[test]
    fn missing_page_defaults_to_one() {
        assert_eq!(query(None).page(), 1);
    }

    #[test]
    fn numeric_page_is_parsed() {
        assert_eq!(query(Some("3")).page(), 3);
    }

    #[test]
    fn non_numeric_page_defaults_to_one() {
        assert_eq!(query(Some("abc")).page(), 1);
    }

    #[test]
    fn non_positive_page_defaults_to_one() {
        assert_eq!(query(Some("0")).page(), 1);
        assert_eq!(query(Some("-2")).page(), 1);
    }

    #[test]
    fn missing_search_is_empty() {
        assert_eq!(query(None).search(), "");
    }
}
