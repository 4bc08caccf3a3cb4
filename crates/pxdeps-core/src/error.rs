//! Error type for registry lookups.

use thiserror::Error;

/// Failure to resolve an identifier against the resource registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The identifier is not one of the registered resources.
    #[error("unknown resource identifier: {identifier:?}")]
    NotFound { identifier: String },
}

impl RegistryError {
    /// The identifier that failed to resolve.
    pub fn identifier(&self) -> &str {
        match self {
            RegistryError::NotFound { identifier } => identifier,
        }
    }
}
