//! Output projection
//!
//! - [`projector`] publishes resolved fields through the CI host
//! - [`summary`] collects counts and display rows for the step summary

pub mod projector;
pub mod summary;

pub use projector::{FieldValue, OutputProjector, ProjectedField, Projection};
pub use summary::{display_value, RunSummary, SummaryRow};
