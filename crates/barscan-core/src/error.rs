/// Errors raised by buffer construction and argument validation.
///
/// Everything else in this stack is precondition-driven: checked accessors
/// report out-of-range access as `None`, and size preconditions on the hot
/// paths are documented contracts rather than runtime checks.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A caller-supplied buffer disagrees with its declared dimensions.
    /// Fatal to the construction call.
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// A synchronously detected bad argument; recoverable by the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
