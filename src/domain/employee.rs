use serde::{Deserialize, Serialize};

/// Gender of an employee.
///
/// The serialized form is the Vietnamese display label because that is what
/// the spreadsheet endpoint stores and returns. Code must only ever match on
/// the variant, never on the label text.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[default]
    #[serde(rename = "Nam")]
    Male,
    #[serde(rename = "Nữ")]
    Female,
    #[serde(rename = "Khác")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Display label, identical to the wire representation.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Nam",
            Gender::Female => "Nữ",
            Gender::Other => "Khác",
        }
    }
}

/// Employment status of an employee.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmployeeStatus {
    #[default]
    #[serde(rename = "Đang làm việc")]
    Active,
    #[serde(rename = "Đã nghỉ việc")]
    Resigned,
    #[serde(rename = "Nghỉ thai sản")]
    Maternity,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::Resigned,
        EmployeeStatus::Maternity,
    ];

    /// Display label, identical to the wire representation.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Đang làm việc",
            EmployeeStatus::Resigned => "Đã nghỉ việc",
            EmployeeStatus::Maternity => "Nghỉ thai sản",
        }
    }
}

/// A single employee record as exchanged with the spreadsheet endpoint.
///
/// The wire format is a JSON object with camelCase member names and date
/// fields carried as `YYYY-MM-DD` strings. A freshly created draft is fully
/// populated: every string field is empty rather than absent, and the enums
/// take their default variants.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    pub employee_code: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub department_id: String,
    pub position: String,
    pub join_date: String,
    pub status: EmployeeStatus,
    pub identity_number: String,
    pub identity_date: String,
    pub identity_place: String,
    pub tax_code: String,
    pub address_permanent: String,
    pub address_contact: String,
    pub phone_number: String,
    pub email: String,
    pub bank_account: String,
    pub bank_name: String,
    pub bank_branch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_default_is_fully_populated() {
        let draft = Employee::default();
        assert_eq!(draft.employee_code, "");
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.status, EmployeeStatus::Active);
    }

    #[test]
    fn wire_format_uses_camel_case_and_labels() {
        let employee = Employee {
            employee_code: "NV0001".into(),
            full_name: "Nguyễn Văn A".into(),
            gender: Gender::Female,
            status: EmployeeStatus::Maternity,
            join_date: "2023-01-01".into(),
            ..Employee::default()
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["employeeCode"], "NV0001");
        assert_eq!(value["fullName"], "Nguyễn Văn A");
        assert_eq!(value["gender"], "Nữ");
        assert_eq!(value["status"], "Nghỉ thai sản");
        assert_eq!(value["joinDate"], "2023-01-01");
        // Empty fields are present as empty strings, never omitted.
        assert_eq!(value["bankBranch"], "");
    }

    #[test]
    fn sheet_rows_with_missing_columns_deserialize_to_defaults() {
        let row = serde_json::json!({
            "employeeCode": "NV0002",
            "fullName": "Trần Thị B",
        });
        let employee: Employee = serde_json::from_value(row).unwrap();
        assert_eq!(employee.employee_code, "NV0002");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.phone_number, "");
    }
}
