use thiserror::Error;

/// A node could not be constructed because a grammar invariant was violated.
///
/// Construction is all-or-nothing: when this is returned, no node exists.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{kind} requires a non-empty name")]
    EmptyName { kind: &'static str },
    #[error("{kind} requires at least {min} element(s), found {found}")]
    TooFewElements {
        kind: &'static str,
        min: usize,
        found: usize,
    },
    #[error("a parameter list may contain at most one rest parameter")]
    MultipleRestParameters,
}
