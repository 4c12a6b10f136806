//! Search-and-pagination query engine behind the advocate listing endpoint.
//!
//! The engine is a pure function over the full roster: it filters with
//! case-insensitive substring matching across the searchable fields, then
//! slices the filtered collection into a fixed-size page. Input order is
//! preserved throughout; no re-sort is performed.

use crate::domain::advocate::Advocate;
use crate::dto::advocates::{AdvocatesQuery, AdvocatesResponse};
use crate::pagination::{DEFAULT_PAGE_SIZE, PageInfo};
use crate::repository::AdvocateReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns true when the lower-cased `term` is a substring of any searchable
/// field: first name, last name, city, degree, the decimal form of years of
/// experience, or any single specialty. `phone_number` is never searched.
fn matches(advocate: &Advocate, term: &str) -> bool {
    advocate.first_name.to_lowercase().contains(term)
        || advocate.last_name.to_lowercase().contains(term)
        || advocate.city.to_lowercase().contains(term)
        || advocate.degree.to_lowercase().contains(term)
        || advocate.years_of_experience.to_string().contains(term)
        || advocate
            .specialties
            .iter()
            .any(|s| s.to_lowercase().contains(term))
}

/// Filters the full roster by `search` and slices out the requested page.
///
/// An empty term matches every record. `total` in the returned summary counts
/// the filtered collection, not the whole roster. `page` is taken as given:
/// a page past the end yields an empty slice, not an error, and is echoed
/// back unchanged in the summary.
pub fn query_advocates(
    advocates: &[Advocate],
    search: &str,
    page: usize,
    limit: usize,
) -> (Vec<Advocate>, PageInfo) {
    let term = search.to_lowercase();

    let filtered: Vec<&Advocate> = if term.is_empty() {
        advocates.iter().collect()
    } else {
        advocates.iter().filter(|a| matches(a, &term)).collect()
    };

    let total = filtered.len();
    let offset = page.saturating_sub(1).saturating_mul(limit);
    let data = filtered
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    (data, PageInfo::new(page, limit, total))
}

/// Fetches the full roster and returns the requested page of matches.
pub fn list_advocates<R>(repo: &R, params: &AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let advocates = repo.list_advocates().map_err(ServiceError::from)?;

    let (data, pagination) =
        query_advocates(&advocates, params.search(), params.page(), DEFAULT_PAGE_SIZE);

    Ok(AdvocatesResponse { data, pagination })
}
