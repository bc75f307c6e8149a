use super::*;

fn complete_form() -> NewInspection {
    NewInspection {
        branch: "Nugegoda".to_owned(),
        transformer_no: "AZ-8890".to_owned(),
        date_of_inspection: "2025-06-14".to_owned(),
        maintenance_date: "2025-07-01".to_owned(),
        time: "09:30".to_owned(),
    }
}

#[test]
fn complete_form_passes_validation() {
    assert!(validate_new_inspection(&complete_form()).is_ok());
}

#[test]
fn each_missing_field_is_reported() {
    let mut form = complete_form();
    form.branch = "  ".to_owned();
    assert_eq!(validate_new_inspection(&form), Err("Branch is required.".to_owned()));

    let mut form = complete_form();
    form.transformer_no = String::new();
    assert!(validate_new_inspection(&form).is_err());

    let mut form = complete_form();
    form.date_of_inspection = String::new();
    assert!(validate_new_inspection(&form).is_err());
}

#[test]
fn time_accepts_both_wire_shapes() {
    assert!(is_valid_time("09:30"));
    assert!(is_valid_time("09:30:00"));
}

#[test]
fn malformed_time_is_rejected() {
    assert!(!is_valid_time(""));
    assert!(!is_valid_time("9:30"));
    assert!(!is_valid_time("09-30"));
    assert!(!is_valid_time("09:30:00:00"));
    assert!(!is_valid_time("ab:cd"));
}
