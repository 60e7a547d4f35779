//! Error types for role allocation.

use thiserror::Error;

/// Errors raised by the role allocator.
///
/// The allocator has no recoverable failure modes. The only error is a
/// broken precondition that callers are expected to rule out with
/// [`crate::validation::validate_participants`] first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// A participant without any role preference reached the allocator.
    #[error("participant {index} ('{name}') declared no role preference")]
    InvariantViolation {
        /// Position in the input list.
        index: usize,
        /// Participant name.
        name: String,
    },
}
