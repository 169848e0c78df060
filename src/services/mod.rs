use thiserror::Error;

use crate::generator::GeneratorError;
use crate::repository::errors::RepositoryError;

pub mod employee;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
