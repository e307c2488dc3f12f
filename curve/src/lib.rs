//! Prime-order elliptic-curve groups for signature schemes.
//!
//! This crate exposes the narrow [`GroupContext`] interface (generator, order,
//! addition, scalar multiplication and canonical point encoding), adapts the
//! RustCrypto secp256k1 and P-256 implementations to it, and provides an
//! unbiased sampler for scalars in a range.

mod errors;
mod group;
mod random;
mod scalar;
mod weierstrass;

pub use errors::{GroupError, RandomError};
pub use group::GroupContext;
pub use random::{MAX_SAMPLE_ATTEMPTS, random_scalar};
pub use scalar::{decode_scalar, encode_scalar};
pub use weierstrass::{Secp256k1, Secp256r1, Weierstrass};

pub use num_bigint::BigUint;
