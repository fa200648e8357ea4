//! Command implementations

pub mod fetch;
pub mod generate;
pub mod keywords;
