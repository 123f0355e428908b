use thiserror::Error;

/// Errors raised while building the admin registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// Two descriptors were registered under the same entity name.
    #[error("Entity {0:?} is already registered with the admin site")]
    AlreadyRegistered(String),
}
