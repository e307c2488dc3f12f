//! Signature types and challenge hashing for the Schnorr signature scheme.

use curve::{GroupContext, GroupError};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A Schnorr signature consisting of a curve point and a scalar.
///
/// The signature is a pair `(R, s)` where:
/// - `R` is the commitment point
/// - `s` is the response scalar in `[0, n)`
///
/// # Structure
///
/// The signature satisfies the verification equation: `G * s == R + pk * e`
/// where `e = H(R || pk || msg)` is the Fiat-Shamir challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature<P> {
    /// The commitment point R = G * k, where k is the signing nonce
    pub r: P,
    /// The response scalar s = k + e * sk mod n, where sk is the signing key
    pub s: BigUint,
}

/// Computes the Fiat-Shamir challenge for the Schnorr signature scheme.
///
/// The challenge is `e = SHA-256(enc(R) || enc(pk) || msg) mod n`, where
/// `enc` is the group's fixed-width big-endian `x || y` encoding. The input
/// order is part of the protocol and is not configurable.
///
/// # Arguments
///
/// * `group` - The group both points belong to
/// * `r` - The commitment point R from the signature
/// * `pk` - The public verifying key point
/// * `msg` - The message being signed/verified
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(e)` where `e` is the challenge scalar in `[0, n)`
/// - `Err(GroupError::IdentityPoint)` if either `r` or `pk` is the point at infinity
pub fn hash_challenge<G: GroupContext>(
    group: &G,
    r: &G::Point,
    pk: &G::Point,
    msg: &[u8],
) -> Result<BigUint, GroupError> {
    let mut hasher = Sha256::new();
    hasher.update(encode_point(group, r)?);
    hasher.update(encode_point(group, pk)?);
    hasher.update(msg);

    let digest = hasher.finalize();
    Ok(BigUint::from_bytes_be(&digest) % group.order())
}

/// Encodes a point for hashing, insisting on the exact canonical width.
fn encode_point<G: GroupContext>(group: &G, point: &G::Point) -> Result<Vec<u8>, GroupError> {
    let bytes = group.encode(point)?;
    if bytes.len() != group.point_size() {
        return Err(GroupError::InvalidLength {
            expected: group.point_size(),
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}
