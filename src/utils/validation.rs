use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if there are more than `max` sources.
pub fn validate_sources(sources: &[u64], max: usize) -> Result<(), UtilsError> {
    debug!("Validating {} sources: {:?}", sources.len(), sources);

    if sources.len() > max {
        warn!(
            "Refusing to search {} sources (limit is {})",
            sources.len(),
            max
        );
        return Err(UtilsError::TooManySources {
            count: sources.len(),
            max,
        });
    }

    Ok(())
}
