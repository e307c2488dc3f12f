//! Signing and verifying keys for the Schnorr signature scheme.

use core::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A secret signing key for creating Schnorr signatures.
///
/// The signing key is a scalar in `[1, n - 1]`. It is deliberately neither
/// `Copy` nor serializable, and its `Debug` output never shows the scalar.
/// Use [`Schnorr::encode_signing_key`](crate::Schnorr::encode_signing_key)
/// to persist it.
///
/// The scalar cannot be duplicated in memory:
///
/// ```compile_fail
/// use curve::Secp256k1;
/// use schnorr::{Schnorr, SigningKey};
///
/// let scheme = Schnorr::new(Secp256k1::default()).unwrap();
/// let keys = scheme.decode_signing_key(&[0x01; 32]).unwrap();
/// let copy: SigningKey = keys.signing_key().clone();
/// ```
pub struct SigningKey {
    pub(crate) scalar: BigUint,
}

/// A public verifying key for verifying Schnorr signatures.
///
/// The verifying key is the curve point `P = d * G`, where `d` is the secret
/// scalar and `G` the group generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey<P> {
    pub(crate) point: P,
}

/// A signing key together with its verifying key.
///
/// Only built by [`Schnorr::generate_keys`](crate::Schnorr::generate_keys)
/// or [`Schnorr::key_pair`](crate::Schnorr::key_pair), which guarantees
/// `P = d * G`.
///
/// ```compile_fail
/// use curve::Secp256k1;
/// use schnorr::Schnorr;
///
/// let scheme = Schnorr::new(Secp256k1::default()).unwrap();
/// let keys = scheme.decode_signing_key(&[0x01; 32]).unwrap();
/// let copy: schnorr::KeyPair<_> = keys.clone();
/// ```
#[derive(Debug)]
pub struct KeyPair<P> {
    signing_key: SigningKey,
    verifying_key: VerifyingKey<P>,
}

impl SigningKey {
    pub(crate) fn new(scalar: BigUint) -> Self {
        Self { scalar }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

impl<P> VerifyingKey<P> {
    /// Wraps a curve point received from another party.
    ///
    /// The point is not checked here; verification rejects the identity.
    pub fn from_point(point: P) -> Self {
        Self { point }
    }

    pub fn point(&self) -> &P {
        &self.point
    }
}

impl<P> KeyPair<P> {
    pub(crate) fn new(signing_key: SigningKey, verifying_key: VerifyingKey<P>) -> Self {
        Self {
            signing_key,
            verifying_key,
        }
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> &VerifyingKey<P> {
        &self.verifying_key
    }
}
