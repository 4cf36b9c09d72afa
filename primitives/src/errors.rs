use thiserror::Error;

// Need to explicitly import alloc because we are in a no-std environment.
extern crate alloc;
use alloc::string::String;

/// Errors related to KZG operations.
///
/// Every variant except the setup ones is raised at a deserialization
/// boundary. Once blobs, scalars and points have been decoded into checked
/// in-memory values, nothing downstream is expected to fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KzgError {
    /// The blob does not hold exactly `N * 32` bytes.
    #[error("invalid blob length: expected {expected} bytes, got {actual}")]
    InvalidBlobLength { expected: usize, actual: usize },

    /// A 32-byte scalar is not strictly less than the field modulus, or has
    /// the wrong length.
    #[error("invalid field element: {0}")]
    InvalidFieldElement(String),

    /// The bytes are not a well-formed compressed G1 point.
    #[error("invalid point encoding: {0}")]
    InvalidEncoding(String),

    /// The point lies on the curve but outside the prime-order subgroup.
    #[error("G1 point not in correct subgroup")]
    NotInSubgroup,

    /// The evaluation domain size is zero, not a power of two, or larger than
    /// the two-adicity of the scalar field allows.
    #[error("invalid evaluation domain size {0}")]
    InvalidDomainSize(usize),

    /// The commitment key has fewer points than the evaluation domain.
    #[error("commitment key has {actual} points, at least {required} are required")]
    CommitKeyTooShort { required: usize, actual: usize },

    /// A polynomial was used with a domain of a different size.
    #[error("polynomial has {polynomial_len} evaluations but the domain has {domain_size} points")]
    PolynomialLengthMismatch {
        domain_size: usize,
        polynomial_len: usize,
    },

    #[error("MSM error: {0}")]
    MsmError(String),
}
