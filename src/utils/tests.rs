use crate::utils::{UtilsError, parse_number, validate_sources, without_position};

#[test]
fn test_without_position() {
    assert_eq!(without_position(&[1, 2, 3], 0), vec![2, 3]);
    assert_eq!(without_position(&[1, 2, 3], 1), vec![1, 3]);
    assert_eq!(without_position(&[1, 2, 3], 2), vec![1, 2]);
}

#[test]
fn test_without_position_keeps_duplicates() {
    assert_eq!(without_position(&[4, 4, 4], 1), vec![4, 4]);
}

#[test]
fn test_without_position_out_of_range() {
    assert_eq!(without_position(&[1, 2], 5), vec![1, 2]);
    assert_eq!(without_position(&[], 0), Vec::<u64>::new());
}

#[test]
fn test_parse_number_valid() {
    assert_eq!(parse_number("0"), Ok(0));
    assert_eq!(parse_number("100"), Ok(100));
    assert_eq!(parse_number(" 75 "), Ok(75));
}

#[test]
fn test_parse_number_invalid() {
    assert_eq!(parse_number(""), Err(UtilsError::EmptyNumber));
    assert_eq!(
        parse_number("-3"),
        Err(UtilsError::InvalidNumber("-3".to_string()))
    );
    assert_eq!(
        parse_number("2.5"),
        Err(UtilsError::InvalidNumber("2.5".to_string()))
    );
    assert_eq!(
        parse_number("12a"),
        Err(UtilsError::InvalidNumber("12a".to_string()))
    );
}

#[test]
fn test_parse_number_out_of_range() {
    assert!(matches!(
        parse_number("99999999999999999999999"),
        Err(UtilsError::NumberOutOfRange(_))
    ));
}

#[test]
fn test_validate_sources() {
    assert!(validate_sources(&[], 6).is_ok());
    assert!(validate_sources(&[1, 2, 3], 3).is_ok());
    assert_eq!(
        validate_sources(&[1, 2, 3, 4], 3),
        Err(UtilsError::TooManySources { count: 4, max: 3 })
    );
}
