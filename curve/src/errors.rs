//! Error types for group arithmetic and random sampling.

use thiserror::Error;

/// Errors signalled by a [`GroupContext`](crate::GroupContext).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The identity element has no affine coordinates and cannot be encoded.
    #[error("point at infinity has no canonical encoding")]
    IdentityPoint,
    /// The decoded coordinates do not satisfy the curve equation.
    #[error("coordinates are not a point on the curve")]
    NotOnCurve,
    /// A point or scalar encoding has the wrong width.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A scalar is not reduced modulo the group order.
    #[error("scalar is not in [0, order)")]
    ScalarOutOfRange,
}

/// Errors raised while sampling random scalars.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The underlying random source reported a failure.
    #[error("random source failure: {0}")]
    Source(String),
    /// Every candidate drawn was outside the requested range.
    #[error("no in-range sample after {0} attempts")]
    Exhausted(usize),
    /// The requested range is empty.
    #[error("empty sampling range")]
    EmptyRange,
}
