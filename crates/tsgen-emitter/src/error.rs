use thiserror::Error;

/// Errors raised while emitting to a sink.
///
/// Formatting itself cannot fail; only the sink can.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write emitted text: {0}")]
    Io(#[from] std::io::Error),
}
