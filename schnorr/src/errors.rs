//! Error types for the Schnorr signature scheme.

use curve::{GroupError, RandomError};
use thiserror::Error;

/// Errors that can occur during key generation, signing and verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    /// The random source could not produce a scalar.
    ///
    /// This is never retried: a degraded source must not silently weaken
    /// nonces or keys.
    #[error(transparent)]
    RandomSource(#[from] RandomError),
    /// A private key, nonce or response scalar is outside its allowed range.
    ///
    /// Private keys and nonces must lie in `[1, n - 1]`, response scalars in
    /// `[0, n)`.
    #[error("scalar outside the allowed range")]
    InvalidScalarRange,
    /// The group rejected a point or scalar.
    ///
    /// This covers the point at infinity where a curve point was expected,
    /// off-curve coordinates, and malformed encodings.
    #[error(transparent)]
    Group(#[from] GroupError),
    /// The group's field is wider than the challenge digest.
    #[error("field size {field_size} exceeds digest size {digest_size}")]
    UnsupportedGroup {
        field_size: usize,
        digest_size: usize,
    },
    /// A serialized key or signature has the wrong length.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
