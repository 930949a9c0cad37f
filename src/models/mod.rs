//! Data model: the catalog table, filter criteria, and chart payloads.

pub mod chart;
pub mod criteria;
pub mod dataset;
