use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse a non-negative integer argument.
///
/// # Errors
///
/// Returns an error if the string is empty, contains anything but ASCII digits
/// (a leading `+` or `-` included), or does not fit in a `u64`.
pub fn parse_number(input: &str) -> Result<u64, UtilsError> {
    let trimmed = input.trim();
    debug!("Parsing number: '{}'", trimmed);

    if trimmed.is_empty() {
        warn!("Number is empty");
        return Err(UtilsError::EmptyNumber);
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        warn!("Number contains non-digit characters: '{}'", trimmed);
        return Err(UtilsError::InvalidNumber(trimmed.to_string()));
    }

    trimmed
        .parse::<u64>()
        .map_err(|_| UtilsError::NumberOutOfRange(trimmed.to_string()))
}
