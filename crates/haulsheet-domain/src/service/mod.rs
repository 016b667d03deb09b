//! Domain services

pub mod aggregator;
pub mod validation;

pub use aggregator::calculate_totals;
pub use validation::validate_driver;
