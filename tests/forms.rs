use cadovina_hrm::domain::validation::{EmployeeField, FormTab};
use cadovina_hrm::forms::employee::EmployeeForm;

/// A draft that passes every rule.
fn valid_form() -> EmployeeForm {
    EmployeeForm {
        employee_code: "NV0001".to_string(),
        full_name: "Nguyễn Văn A".to_string(),
        department_id: "PB01".to_string(),
        join_date: "2023-01-01".to_string(),
        phone_number: "0901123456".to_string(),
        ..EmployeeForm::default()
    }
}

#[test]
fn valid_draft_produces_an_empty_map() {
    assert!(valid_form().field_errors().is_empty());
}

#[test]
fn optional_fields_may_stay_empty() {
    let form = EmployeeForm {
        phone_number: String::new(),
        ..valid_form()
    };
    assert!(form.field_errors().is_empty());
}

#[test]
fn missing_required_fields_are_flagged_exactly() {
    let form = EmployeeForm {
        employee_code: String::new(),
        full_name: "   ".to_string(),
        department_id: String::new(),
        join_date: String::new(),
        ..valid_form()
    };

    let errors = form.field_errors();
    assert_eq!(errors.len(), 4);
    assert!(errors.is_invalid(EmployeeField::EmployeeCode));
    assert!(errors.is_invalid(EmployeeField::FullName));
    assert!(errors.is_invalid(EmployeeField::DepartmentId));
    assert!(errors.is_invalid(EmployeeField::JoinDate));
}

#[test]
fn a_single_blank_field_is_the_only_flag() {
    let form = EmployeeForm {
        employee_code: " ".to_string(),
        ..valid_form()
    };

    let errors = form.field_errors();
    assert_eq!(errors.len(), 1);
    assert!(errors.is_invalid(EmployeeField::EmployeeCode));
}

#[test]
fn surrounding_whitespace_does_not_fail_required_fields() {
    let form = EmployeeForm {
        employee_code: " NV0001 ".to_string(),
        ..valid_form()
    };
    assert!(form.field_errors().is_empty());
}

#[test]
fn unknown_department_ids_are_flagged() {
    let form = EmployeeForm {
        department_id: "PB99".to_string(),
        ..valid_form()
    };
    assert!(form.field_errors().is_invalid(EmployeeField::DepartmentId));
}

#[test]
fn valid_mobile_second_digits_pass() {
    for second in ["3", "5", "7", "8", "9"] {
        let form = EmployeeForm {
            phone_number: format!("0{second}01123456"),
            ..valid_form()
        };
        assert!(
            form.field_errors().is_empty(),
            "second digit {second} should be accepted"
        );
    }
}

#[test]
fn mobile_numbers_outside_the_pattern_are_flagged() {
    for phone in [
        "0123456789",  // second digit not in {3,5,7,8,9}
        "090112345",   // nine digits
        "09011234567", // eleven digits
        "1901123456",  // no leading zero
        "090112345a",  // non-digit
        " 0901123456", // stray whitespace
    ] {
        let form = EmployeeForm {
            phone_number: phone.to_string(),
            ..valid_form()
        };
        let errors = form.field_errors();
        assert_eq!(errors.len(), 1, "{phone} should be flagged");
        assert!(errors.is_invalid(EmployeeField::PhoneNumber));
    }
}

#[test]
fn general_errors_route_ahead_of_a_bad_phone() {
    // Empty code and name, valid department and join date, bad phone.
    let form = EmployeeForm {
        employee_code: String::new(),
        full_name: String::new(),
        department_id: "PB01".to_string(),
        join_date: "2023-01-01".to_string(),
        phone_number: "0123456789".to_string(),
        ..EmployeeForm::default()
    };

    let errors = form.field_errors();
    assert_eq!(errors.len(), 3);
    assert!(errors.is_invalid(EmployeeField::EmployeeCode));
    assert!(errors.is_invalid(EmployeeField::FullName));
    assert!(errors.is_invalid(EmployeeField::PhoneNumber));
    assert_eq!(FormTab::route(&errors), Some(FormTab::General));
}

#[test]
fn missing_department_routes_to_general() {
    let form = EmployeeForm {
        department_id: String::new(),
        ..valid_form()
    };
    assert_eq!(
        FormTab::route(&form.field_errors()),
        Some(FormTab::General)
    );
}

#[test]
fn bad_phone_alone_routes_to_contact() {
    let form = EmployeeForm {
        phone_number: "0201123456".to_string(),
        ..valid_form()
    };
    assert_eq!(
        FormTab::route(&form.field_errors()),
        Some(FormTab::Contact)
    );
}

#[test]
fn email_and_bank_fields_carry_no_format_rules() {
    let form = EmployeeForm {
        email: "not-an-email".to_string(),
        tax_code: "???".to_string(),
        bank_account: "abc".to_string(),
        ..valid_form()
    };
    assert!(form.field_errors().is_empty());
}
