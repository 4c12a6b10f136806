use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use advocate::DieselRepository;

/// Read side of the advocate roster.
///
/// The listing service always consumes the full collection; filtering and
/// pagination happen in memory, nothing is pushed down to storage.
pub trait AdvocateReader {
    fn list_advocates(&self) -> RepositoryResult<Vec<Advocate>>;
}

/// Write side of the advocate roster, used by the seeder and by tests.
pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}
