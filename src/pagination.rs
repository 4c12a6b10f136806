use serde::Serialize;

/// Number of records returned per page by the listing endpoint.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Position of the current page within the filtered collection.
///
/// `total` counts records matching the active filter, not the whole roster.
/// The requested page is echoed back unchanged: a page beyond the last one
/// yields an empty slice and `has_next = false`, it is never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = if page == 0 { 1 } else { page };
        let total_pages = total.div_ceil(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_has_zero_pages() {
        let info = PageInfo::new(1, DEFAULT_PAGE_SIZE, 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn last_page_has_no_next() {
        let info = PageInfo::new(3, 5, 12);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let info = PageInfo::new(2, 5, 12);
        assert!(info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn out_of_range_page_is_echoed_back() {
        let info = PageInfo::new(9, 5, 12);
        assert_eq!(info.page, 9);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn page_zero_is_normalized_to_one() {
        let info = PageInfo::new(0, 5, 12);
        assert_eq!(info.page, 1);
        assert!(!info.has_prev);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(PageInfo::new(1, 5, 1)).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["hasPrev"], false);
    }
}
