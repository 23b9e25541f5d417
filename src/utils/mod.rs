//! Input parsing and source-list helpers

mod errors;
mod numbers;
mod sources;
mod validation;

pub use errors::UtilsError;
pub use numbers::parse_number;
pub use sources::without_position;
pub use validation::validate_sources;

#[cfg(test)]
mod tests;
