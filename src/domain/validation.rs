use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The closed set of employee record fields.
///
/// Serializes with the wire member names so templates and the error map can
/// address fields the same way the record itself does.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    EmployeeCode,
    FullName,
    DateOfBirth,
    Gender,
    DepartmentId,
    Position,
    JoinDate,
    Status,
    IdentityNumber,
    IdentityDate,
    IdentityPlace,
    TaxCode,
    AddressPermanent,
    AddressContact,
    PhoneNumber,
    Email,
    BankAccount,
    BankName,
    BankBranch,
}

impl EmployeeField {
    /// Resolves a form/struct field identifier as reported by the validator.
    pub fn from_form_field(name: &str) -> Option<Self> {
        Some(match name {
            "employee_code" => Self::EmployeeCode,
            "full_name" => Self::FullName,
            "date_of_birth" => Self::DateOfBirth,
            "gender" => Self::Gender,
            "department_id" => Self::DepartmentId,
            "position" => Self::Position,
            "join_date" => Self::JoinDate,
            "status" => Self::Status,
            "identity_number" => Self::IdentityNumber,
            "identity_date" => Self::IdentityDate,
            "identity_place" => Self::IdentityPlace,
            "tax_code" => Self::TaxCode,
            "address_permanent" => Self::AddressPermanent,
            "address_contact" => Self::AddressContact,
            "phone_number" => Self::PhoneNumber,
            "email" => Self::Email,
            "bank_account" => Self::BankAccount,
            "bank_name" => Self::BankName,
            "bank_branch" => Self::BankBranch,
            _ => return None,
        })
    }
}

/// Per-field invalid flags for the employee form.
///
/// Only failed fields are present; an empty map means the draft is
/// submittable. The map is replaced wholesale on submit and cleared
/// field-by-field as the user edits.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrorMap(BTreeMap<EmployeeField, bool>);

impl ValidationErrorMap {
    /// Marks `field` invalid.
    pub fn flag(&mut self, field: EmployeeField) {
        self.0.insert(field, true);
    }

    /// Removes the flag for `field`, if any.
    pub fn clear(&mut self, field: EmployeeField) {
        self.0.remove(&field);
    }

    pub fn is_invalid(&self, field: EmployeeField) -> bool {
        self.0.get(&field).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Flagged fields in stable order.
    pub fn fields(&self) -> impl Iterator<Item = EmployeeField> + '_ {
        self.0.keys().copied()
    }
}

/// The three sections of the employee dialog.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormTab {
    #[default]
    General,
    Contact,
    Bank,
}

/// Fields whose failure routes the dialog to the general tab.
const GENERAL_ROUTED: [EmployeeField; 4] = [
    EmployeeField::EmployeeCode,
    EmployeeField::FullName,
    EmployeeField::DepartmentId,
    EmployeeField::JoinDate,
];

impl FormTab {
    pub fn as_str(self) -> &'static str {
        match self {
            FormTab::General => "general",
            FormTab::Contact => "contact",
            FormTab::Bank => "bank",
        }
    }

    /// Picks the tab to surface for a failed validation pass.
    ///
    /// General-tab failures take precedence over a bad phone number; bank
    /// fields carry no validation and never route.
    pub fn route(errors: &ValidationErrorMap) -> Option<FormTab> {
        if GENERAL_ROUTED.iter().any(|f| errors.is_invalid(*f)) {
            return Some(FormTab::General);
        }
        if errors.is_invalid(EmployeeField::PhoneNumber) {
            return Some(FormTab::Contact);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_clear_field_by_field() {
        let mut errors = ValidationErrorMap::default();
        errors.flag(EmployeeField::EmployeeCode);
        errors.flag(EmployeeField::PhoneNumber);
        assert_eq!(errors.len(), 2);

        errors.clear(EmployeeField::EmployeeCode);
        assert!(!errors.is_invalid(EmployeeField::EmployeeCode));
        assert!(errors.is_invalid(EmployeeField::PhoneNumber));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut errors = ValidationErrorMap::default();
        errors.flag(EmployeeField::EmployeeCode);
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value, serde_json::json!({ "employeeCode": true }));
    }

    #[test]
    fn general_errors_take_precedence_over_contact() {
        let mut errors = ValidationErrorMap::default();
        errors.flag(EmployeeField::FullName);
        errors.flag(EmployeeField::PhoneNumber);
        assert_eq!(FormTab::route(&errors), Some(FormTab::General));
    }

    #[test]
    fn phone_alone_routes_to_contact() {
        let mut errors = ValidationErrorMap::default();
        errors.flag(EmployeeField::PhoneNumber);
        assert_eq!(FormTab::route(&errors), Some(FormTab::Contact));
    }

    #[test]
    fn empty_department_routes_to_general() {
        let mut errors = ValidationErrorMap::default();
        errors.flag(EmployeeField::DepartmentId);
        assert_eq!(FormTab::route(&errors), Some(FormTab::General));
    }

    #[test]
    fn bank_fields_never_route() {
        let mut errors = ValidationErrorMap::default();
        errors.flag(EmployeeField::BankAccount);
        errors.flag(EmployeeField::TaxCode);
        assert_eq!(FormTab::route(&errors), None);
    }

    #[test]
    fn valid_map_routes_nowhere() {
        assert_eq!(FormTab::route(&ValidationErrorMap::default()), None);
    }
}
