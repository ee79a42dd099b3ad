//! State types for the waopen GUI

/// Outcome of the last "Open" press, shown under the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LaunchStatus {
    #[default]
    Idle,
    /// Normalized number handed to the launcher, result pending
    Opening(String),
    Launched(String),
    Failed(String),
}
