use crate::domain::employee::Employee;
use crate::domain::validation::FormTab;
use crate::dto::employee::SubmitOutcome;
use crate::forms::employee::EmployeeForm;
use crate::generator::EmployeeGenerator;
use crate::repository::{EmployeeReader, EmployeeWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the full employee collection for the list view.
pub async fn list_employees<R>(repo: &R) -> ServiceResult<Vec<Employee>>
where
    R: EmployeeReader + ?Sized,
{
    repo.list_employees().await.map_err(ServiceError::from)
}

/// Runs one submission attempt: validate, then at most one write.
///
/// An invalid draft never reaches the endpoint. A transport failure is an
/// outcome, not an error: the caller keeps the draft and the user retries
/// by submitting again.
pub async fn submit_employee<R>(repo: &R, form: EmployeeForm) -> SubmitOutcome
where
    R: EmployeeWriter + ?Sized,
{
    let errors = form.field_errors();
    if !errors.is_empty() {
        let tab = FormTab::route(&errors);
        return SubmitOutcome::Invalid {
            draft: Employee::from(form),
            errors,
            tab,
        };
    }

    let employee = Employee::from(form);
    match repo.save_employee(&employee).await {
        Ok(()) => SubmitOutcome::Saved,
        Err(err) => {
            log::error!("Failed to save employee: {err}");
            SubmitOutcome::Failed { draft: employee }
        }
    }
}

/// Produces a plausible draft from the configured generator.
pub async fn generate_employee(generator: &EmployeeGenerator) -> ServiceResult<Employee> {
    generator.generate().await.map_err(ServiceError::from)
}
