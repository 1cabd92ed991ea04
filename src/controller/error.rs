//! Errors surfaced by the pack lifecycle controller.

use thiserror::Error;

use crate::pack::PackId;
use crate::service::ServiceError;

/// A pack request that ended without installing a new session.
///
/// Both kinds are non-fatal: the controller logs them and returns to idle.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Failed to create '{pack}' pack: {source}")]
    CreationFailed {
        pack: String,
        #[source]
        source: ServiceError,
    },

    /// The freshly created pack id is dropped and never reused.
    #[error("Failed to open pack '{pack_id}': {source}")]
    OpenFailed {
        pack_id: PackId,
        #[source]
        source: ServiceError,
    },
}

impl PackError {
    pub fn service_error(&self) -> &ServiceError {
        match self {
            PackError::CreationFailed { source, .. } | PackError::OpenFailed { source, .. } => {
                source
            }
        }
    }

    /// Short message for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            PackError::CreationFailed { .. } => "Could not create a pack",
            PackError::OpenFailed { .. } => "Could not open the pack",
        }
    }
}
