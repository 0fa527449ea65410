use thiserror::Error;

/// Error raised when a processor is constructed with an unusable
/// configuration. Only ever produced at construction time, never while a
/// traveler is being processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    /// A tap processor was given neither a before-hook nor an after-hook.
    #[error("at least one of the before and after hooks must be provided")]
    MissingHooks,
}
