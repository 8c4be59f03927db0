//! Services - data generation, export and template handling

pub mod export;
pub mod seed;
pub mod templates;
