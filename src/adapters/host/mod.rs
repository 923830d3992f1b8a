//! CI host implementations

pub mod github;
pub mod memory;
pub mod traits;

pub use github::{GitHubActionsHost, HostFiles};
pub use memory::RecordingHost;
pub use traits::ActionHost;
