//! Database health probe for the diagnostics endpoint.
//!
//! The item creation path does not use a database; the only consumer of this
//! module is `GET /test`, which reports whether an external database handle
//! exists and what it exposes. The collaborator is modeled as a capability
//! returning a result type rather than a handle whose faults are swallowed.

/// Outcome of probing the optional external database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// A database is configured and answered the probe.
    Connected {
        /// Database name as reported by the handle.
        name: String,
        /// Collection (or table) names the database exposes.
        collections: Vec<String>,
    },
    /// No database is configured for this deployment.
    Unconfigured,
    /// A database is configured but the probe failed.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

/// Health-check capability for an external database.
///
/// Implementations must never panic; any failure is reported through
/// [`DatabaseStatus::Error`].
pub trait DatabaseProbe: Send + Sync {
    /// Probe the database and report its status.
    fn check(&self) -> DatabaseStatus;
}
