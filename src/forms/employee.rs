use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::department;
use crate::domain::employee::{Employee, EmployeeStatus, Gender};
use crate::domain::validation::{EmployeeField, ValidationErrorMap};

/// Mobile numbers: leading zero, second digit in {3,5,7,8,9}, eight more
/// digits.
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[35789][0-9]{8}$").expect("mobile pattern"));

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
/// The employee dialog's submit payload. Mirrors the record field-for-field;
/// the form names are the record's wire names.
pub struct EmployeeForm {
    #[validate(custom(function = non_blank))]
    pub employee_code: String,
    #[validate(custom(function = non_blank))]
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    #[validate(custom(function = known_department))]
    pub department_id: String,
    pub position: String,
    #[validate(custom(function = non_blank))]
    pub join_date: String,
    pub status: EmployeeStatus,
    pub identity_number: String,
    pub identity_date: String,
    pub identity_place: String,
    pub tax_code: String,
    pub address_permanent: String,
    pub address_contact: String,
    #[validate(custom(function = mobile_number))]
    pub phone_number: String,
    pub email: String,
    pub bank_account: String,
    pub bank_name: String,
    pub bank_branch: String,
}

impl EmployeeForm {
    /// Runs the submit-time validation pass and returns the per-field flags.
    ///
    /// An empty map means the draft is submittable. Pure: no field is
    /// mutated, nothing is trimmed in place.
    pub fn field_errors(&self) -> ValidationErrorMap {
        let mut map = ValidationErrorMap::default();
        if let Err(errors) = self.validate() {
            collect_fields(&errors, &mut map);
        }
        map
    }
}

fn collect_fields(errors: &ValidationErrors, map: &mut ValidationErrorMap) {
    for name in errors.field_errors().keys() {
        if let Some(field) = EmployeeField::from_form_field(name) {
            map.flag(field);
        }
    }
}

/// Required fields count whitespace-only input as missing.
fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required"))
    } else {
        Ok(())
    }
}

/// Department ids must reference the catalogue; the empty selection fails
/// like any unknown id.
fn known_department(value: &str) -> Result<(), ValidationError> {
    if department::is_known(value) {
        Ok(())
    } else {
        Err(ValidationError::new("department"))
    }
}

/// Phone is optional: the empty string passes, anything else must match the
/// mobile pattern.
fn mobile_number(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || MOBILE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

impl From<EmployeeForm> for Employee {
    fn from(form: EmployeeForm) -> Self {
        Self {
            employee_code: form.employee_code,
            full_name: form.full_name,
            date_of_birth: form.date_of_birth,
            gender: form.gender,
            department_id: form.department_id,
            position: form.position,
            join_date: form.join_date,
            status: form.status,
            identity_number: form.identity_number,
            identity_date: form.identity_date,
            identity_place: form.identity_place,
            tax_code: form.tax_code,
            address_permanent: form.address_permanent,
            address_contact: form.address_contact,
            phone_number: form.phone_number,
            email: form.email,
            bank_account: form.bank_account,
            bank_name: form.bank_name,
            bank_branch: form.bank_branch,
        }
    }
}

impl From<Employee> for EmployeeForm {
    fn from(employee: Employee) -> Self {
        Self {
            employee_code: employee.employee_code,
            full_name: employee.full_name,
            date_of_birth: employee.date_of_birth,
            gender: employee.gender,
            department_id: employee.department_id,
            position: employee.position,
            join_date: employee.join_date,
            status: employee.status,
            identity_number: employee.identity_number,
            identity_date: employee.identity_date,
            identity_place: employee.identity_place,
            tax_code: employee.tax_code,
            address_permanent: employee.address_permanent,
            address_contact: employee.address_contact,
            phone_number: employee.phone_number,
            email: employee.email,
            bank_account: employee.bank_account,
            bank_name: employee.bank_name,
            bank_branch: employee.bank_branch,
        }
    }
}
