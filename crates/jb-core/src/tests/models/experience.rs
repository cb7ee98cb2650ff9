use crate::{CoreError, Experience};

#[test]
fn given_all_six_parts_when_parsed_then_every_field_set() {
    let entry: Experience = "Engineer|Acme|Berlin|2020-01|2023-06|Built the billing API"
        .parse()
        .unwrap();

    assert_eq!(entry.job_title, "Engineer");
    assert_eq!(entry.company, "Acme");
    assert_eq!(entry.location, "Berlin");
    assert_eq!(entry.start_date, "2020-01");
    assert_eq!(entry.end_date.as_deref(), Some("2023-06"));
    assert_eq!(entry.description, "Built the billing API");
}

#[test]
fn given_only_required_parts_when_parsed_then_position_is_current() {
    let entry: Experience = "Engineer | Acme | Berlin | 2020-01".parse().unwrap();

    assert_eq!(entry.job_title, "Engineer");
    assert_eq!(entry.end_date, None);
    assert_eq!(entry.description, "");
}

#[test]
fn given_empty_end_when_parsed_then_description_still_read() {
    let entry: Experience = "Engineer|Acme|Berlin|2020-01||Ships a|b tests"
        .parse()
        .unwrap();

    assert_eq!(entry.end_date, None);
    assert_eq!(entry.description, "Ships a|b tests");
}

#[test]
fn given_too_few_parts_when_parsed_then_validation_error() {
    let err = "Engineer|Acme".parse::<Experience>().unwrap_err();

    assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "experience"));
}
