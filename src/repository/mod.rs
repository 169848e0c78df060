use async_trait::async_trait;

use crate::domain::employee::Employee;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod sheet;

/// Read side of the persistence port.
#[async_trait]
pub trait EmployeeReader {
    /// Fetches the full employee collection.
    ///
    /// There is no pagination, filtering or sorting; the caller replaces its
    /// collection wholesale with the result.
    async fn list_employees(&self) -> RepositoryResult<Vec<Employee>>;
}

/// Write side of the persistence port.
#[async_trait]
pub trait EmployeeWriter {
    /// Persists one record with a single write attempt.
    ///
    /// The backing endpoint answers in a transport mode whose response body
    /// and status are not inspectable, so `Ok` means the request completed,
    /// not that server-side persistence is confirmed. There is no retry and
    /// no cancellation of an in-flight write.
    async fn save_employee(&self, employee: &Employee) -> RepositoryResult<()>;
}
