//! Business logic services.

pub mod analytics;
pub mod filter_options;
