//! savory - Terminal recipe finder
//!
//! Searches a recipe API by dish name or ingredients, narrows results with
//! diet, intolerance and cuisine filters, and keeps favorites and the last
//! search in a local data directory between runs.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SavoryError;
