use super::*;

#[test]
fn validate_name_input_trims_and_requires_value() {
    assert_eq!(
        validate_name_input("  Academia Central  "),
        Ok("Academia Central".to_owned())
    );
    assert_eq!(validate_name_input("   "), Err("Por favor digite o nome da academia"));
}

#[test]
fn validate_name_input_rejects_empty_string() {
    assert_eq!(validate_name_input(""), Err("Por favor digite o nome da academia"));
}

#[test]
fn validate_name_input_keeps_inner_spacing() {
    assert_eq!(
        validate_name_input(" Academia do Centro "),
        Ok("Academia do Centro".to_owned())
    );
}
