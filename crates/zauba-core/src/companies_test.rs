use super::*;

#[test]
fn assemble_fills_missing_fields_with_empty_strings() {
    let record = CompanyRecord::assemble([
        (Field::Url, Some("https://www.zaubacorp.com/company/ACME".to_string())),
        (Field::CompanyName, Some("Acme Private Limited".to_string())),
        (Field::Email, None),
    ]);

    assert_eq!(record.get(Field::Url), "https://www.zaubacorp.com/company/ACME");
    assert_eq!(record.get(Field::CompanyName), "Acme Private Limited");
    assert_eq!(record.get(Field::Email), "");
    assert_eq!(record.get(Field::PaidUpCapital), "");
}

#[test]
fn assemble_later_value_wins_for_repeated_field() {
    let record = CompanyRecord::assemble([
        (Field::Status, Some("Active".to_string())),
        (Field::Status, Some("Inactive".to_string())),
    ]);
    assert_eq!(record.get(Field::Status), "Inactive");
}

#[test]
fn iter_yields_every_field_in_column_order() {
    let record = CompanyRecord::default();
    let fields: Vec<Field> = record.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
}

#[test]
fn populated_count_ignores_url() {
    let record = CompanyRecord::assemble([
        (Field::Url, Some("https://example.com".to_string())),
        (Field::Phone, Some("9876543210".to_string())),
    ]);
    assert_eq!(record.populated_count(), 1);
}

#[test]
fn column_names_are_unique() {
    let mut names: Vec<&str> = Field::ALL.iter().map(|f| f.column()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Field::ALL.len());
}

#[test]
fn display_uses_column_name() {
    assert_eq!(Field::RegistrationId.to_string(), "RegistrationID");
    assert_eq!(Field::RegistrarOffice.to_string(), "RegistrarOffice");
}

#[test]
fn csv_header_matches_field_columns() {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.serialize(CompanyRecord::default()).unwrap();
    let bytes = writer.into_inner().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let header = text.lines().next().unwrap();

    let expected: Vec<&str> = Field::ALL.iter().map(|f| f.column()).collect();
    assert_eq!(header, expected.join(","));
}
