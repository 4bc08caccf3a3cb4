pub mod config;
pub mod error;
pub mod fetch;
pub mod layout;
pub mod logging;
pub mod registry;
pub mod url_model;

pub use error::RegistryError;
pub use registry::{lookup, ResourceEntry, ResourceKind};
