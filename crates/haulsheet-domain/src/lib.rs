//! Domain layer: weekly sheet model, totals, and driver validation

pub mod model;
pub mod repository;
pub mod service;
