use std::time::Duration;

use async_trait::async_trait;

use crate::domain::employee::Employee;
use crate::models::config::ServerConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{EmployeeReader, EmployeeWriter};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Persistence adapter backed by the spreadsheet automation endpoint.
///
/// Reads come from `sheet_read_url` as a JSON array of records; writes go to
/// `sheet_write_url` as one JSON record per request.
#[derive(Clone)]
pub struct SheetRepository {
    client: reqwest::Client,
    read_url: String,
    write_url: String,
}

impl SheetRepository {
    pub fn new(config: &ServerConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RepositoryError::Unexpected(format!("http client: {e}")))?;

        Ok(Self {
            client,
            read_url: config.sheet_read_url.clone(),
            write_url: config.sheet_write_url.clone(),
        })
    }
}

#[async_trait]
impl EmployeeReader for SheetRepository {
    async fn list_employees(&self) -> RepositoryResult<Vec<Employee>> {
        let response = self
            .client
            .get(&self.read_url)
            .send()
            .await?
            .error_for_status()?;

        let employees = response.json::<Vec<Employee>>().await?;
        Ok(employees)
    }
}

#[async_trait]
impl EmployeeWriter for SheetRepository {
    async fn save_employee(&self, employee: &Employee) -> RepositoryResult<()> {
        // The script endpoint replies through an opaque redirect chain; the
        // status line carries no signal, so only a failed request counts as
        // an error.
        self.client
            .post(&self.write_url)
            .json(employee)
            .send()
            .await?;

        Ok(())
    }
}
