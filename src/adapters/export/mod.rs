//! Delimited-text export adapters.

mod csv;

pub use csv::{escape_field, ideas_to_csv, projects_to_csv, IDEA_HEADERS, PROJECT_HEADERS};
