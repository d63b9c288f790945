//! JSON Schema output model

pub mod schema;

pub use schema::{Schema, DEFAULT_ID, DRAFT_2020_12};
