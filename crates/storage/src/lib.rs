#![warn(clippy::pedantic)]

pub mod json_files;
pub mod schema;

pub use json_files::{JsonFiles, Source};
pub use schema::{CatalogError, Workout};
