//! CLI command implementations

pub mod list;
pub mod load;
pub mod validate;
