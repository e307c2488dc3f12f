//! Constants used in the Schnorr signature scheme implementation.

/// Output size of the SHA-256 challenge hash in bytes.
///
/// A group can only be used when its base field fits in the digest, so the
/// challenge covers the full scalar range.
pub const DIGEST_SIZE: usize = 32;

/// Size of a serialized secret signing key for the 256-bit curves, in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a serialized verifying key for the 256-bit curves, in bytes.
///
/// A verifying key is the affine point `x || y`, 32 bytes per coordinate.
pub const PK_SIZE: usize = 64;

/// Size of a serialized signature for the 256-bit curves, in bytes.
///
/// A signature consists of:
/// - A point R (64 bytes)
/// - A scalar s (32 bytes)
/// Total: 96 bytes
pub const SIG_SIZE: usize = PK_SIZE + SK_SIZE;
