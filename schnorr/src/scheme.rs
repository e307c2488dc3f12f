//! Key generation, signing and verification over an injected group.

use curve::{GroupContext, decode_scalar, encode_scalar, random_scalar};
use num_bigint::BigUint;
use rand::TryCryptoRng;
use tracing::{debug, trace};

use crate::constants::DIGEST_SIZE;
use crate::errors::SchnorrError;
use crate::keys::{KeyPair, SigningKey, VerifyingKey};
use crate::signatures::{Signature, hash_challenge};

/// The Schnorr signature scheme over the group `G`.
///
/// The group is passed in at construction; there is no process-wide curve
/// state, so schemes over different groups can be used side by side.
///
/// # Example
///
/// ```
/// use curve::Secp256k1;
/// use schnorr::Schnorr;
///
/// let mut rng = rand::rng();
/// let scheme = Schnorr::new(Secp256k1::default()).expect("supported group");
/// let keys = scheme.generate_keys(&mut rng).expect("keygen");
///
/// let sig = scheme
///     .sign(&mut rng, b"Let me go", keys.signing_key(), keys.verifying_key())
///     .expect("sign");
/// assert!(scheme.verify(b"Let me go", &sig, keys.verifying_key()));
/// assert!(!scheme.verify(b"Let it go", &sig, keys.verifying_key()));
/// ```
#[derive(Clone, Debug)]
pub struct Schnorr<G> {
    group: G,
    one: BigUint,
    max_scalar: BigUint,
}

impl<G: GroupContext> Schnorr<G> {
    /// Creates the scheme for `group`.
    ///
    /// Fails with [`SchnorrError::UnsupportedGroup`] when the group's field is
    /// wider than the SHA-256 digest.
    pub fn new(group: G) -> Result<Self, SchnorrError> {
        if group.field_size() > DIGEST_SIZE {
            return Err(SchnorrError::UnsupportedGroup {
                field_size: group.field_size(),
                digest_size: DIGEST_SIZE,
            });
        }

        let one = BigUint::from(1u32);
        let max_scalar = group.order() - &one;
        debug!(curve = group.name(), "initialized schnorr scheme");

        Ok(Self {
            group,
            one,
            max_scalar,
        })
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// Generates a fresh key pair `(d, P = d * G)` with `d` in `[1, n - 1]`.
    pub fn generate_keys<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<KeyPair<G::Point>, SchnorrError> {
        let d = random_scalar(rng, &self.one, &self.max_scalar)?;
        let keys = self.key_pair(SigningKey::new(d))?;
        debug!(curve = self.group.name(), "generated key pair");
        Ok(keys)
    }

    /// Derives the verifying key for an existing signing key.
    pub fn key_pair(&self, signing_key: SigningKey) -> Result<KeyPair<G::Point>, SchnorrError> {
        self.check_secret_range(&signing_key.scalar)?;
        let point = self.group.mul_generator(&signing_key.scalar)?;
        Ok(KeyPair::new(signing_key, VerifyingKey::from_point(point)))
    }

    /// Signs a message.
    ///
    /// The signature is computed using the Schnorr signature algorithm:
    /// 1. Draw a fresh random nonce `k` in `[1, n - 1]`
    /// 2. Compute `R = G * k`
    /// 3. Compute challenge `e = H(R || pk || msg)`
    /// 4. Compute `s = k + e * sk mod n`
    /// 5. Return signature `(R, s)`
    ///
    /// `public_key` must be the verifying key of `private_key`; this is
    /// asserted in debug builds only.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidScalarRange`] if the private key is outside `[1, n - 1]`
    /// - [`SchnorrError::Group`] if the public key is the point at infinity
    /// - [`SchnorrError::RandomSource`] if no nonce could be drawn
    pub fn sign<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        private_key: &SigningKey,
        public_key: &VerifyingKey<G::Point>,
    ) -> Result<Signature<G::Point>, SchnorrError> {
        self.check_secret_range(&private_key.scalar)?;
        debug_assert_eq!(
            self.group.mul_generator(&private_key.scalar).ok(),
            Some(public_key.point),
            "verifying key does not belong to the signing key"
        );

        let nonce = random_scalar(rng, &self.one, &self.max_scalar)?;
        self.sign_with_nonce(msg, private_key, public_key, &nonce)
    }

    /// Signs with a caller-chosen nonce. Reusing a nonce across two messages
    /// reveals the private key.
    pub(crate) fn sign_with_nonce(
        &self,
        msg: &[u8],
        private_key: &SigningKey,
        public_key: &VerifyingKey<G::Point>,
        nonce: &BigUint,
    ) -> Result<Signature<G::Point>, SchnorrError> {
        self.check_secret_range(&private_key.scalar)?;
        self.check_secret_range(nonce)?;

        let r = self.group.mul_generator(nonce)?;
        let e = hash_challenge(&self.group, &r, &public_key.point, msg)?;
        let s = (nonce + e * &private_key.scalar) % self.group.order();

        trace!(curve = self.group.name(), msg_len = msg.len(), "signed message");
        Ok(Signature { r, s })
    }

    /// Verifies a signature on a message.
    ///
    /// Returns `true` only if `G * s == R + pk * e`. Malformed input (a
    /// response scalar outside `[0, n)`, an identity commitment or key, or
    /// any group failure) yields `false`; use [`try_verify`](Self::try_verify)
    /// to tell those cases apart from a mismatch.
    pub fn verify(
        &self,
        msg: &[u8],
        sig: &Signature<G::Point>,
        public_key: &VerifyingKey<G::Point>,
    ) -> bool {
        match self.try_verify(msg, sig, public_key) {
            Ok(valid) => valid,
            Err(err) => {
                debug!(curve = self.group.name(), %err, "rejecting malformed signature");
                false
            }
        }
    }

    /// Verifies a signature, separating malformed input from a mismatch.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if the verification equation does not hold
    /// - `Err(_)` if verification could not be attempted
    pub fn try_verify(
        &self,
        msg: &[u8],
        sig: &Signature<G::Point>,
        public_key: &VerifyingKey<G::Point>,
    ) -> Result<bool, SchnorrError> {
        if &sig.s >= self.group.order() {
            return Err(SchnorrError::InvalidScalarRange);
        }

        let e = hash_challenge(&self.group, &sig.r, &public_key.point, msg)?;
        let lhs = self.group.mul_generator(&sig.s)?;
        let rhs = self
            .group
            .add(&sig.r, &self.group.scalar_mul(&e, &public_key.point)?);

        let valid = lhs == rhs;
        trace!(curve = self.group.name(), msg_len = msg.len(), valid, "verified signature");
        Ok(valid)
    }

    /// Size of an encoded signing key in bytes.
    pub fn scalar_size(&self) -> usize {
        self.group.scalar_size()
    }

    /// Size of an encoded verifying key or commitment point in bytes.
    pub fn point_size(&self) -> usize {
        self.group.point_size()
    }

    /// Size of an encoded signature in bytes.
    pub fn signature_size(&self) -> usize {
        self.point_size() + self.scalar_size()
    }

    /// Encodes the private scalar as fixed-width big-endian bytes.
    pub fn encode_signing_key(&self, key: &SigningKey) -> Result<Vec<u8>, SchnorrError> {
        Ok(encode_scalar(&key.scalar, self.scalar_size())?)
    }

    /// Parses a private scalar and derives its key pair.
    pub fn decode_signing_key(&self, bytes: &[u8]) -> Result<KeyPair<G::Point>, SchnorrError> {
        let scalar = decode_scalar(bytes, self.scalar_size())?;
        self.key_pair(SigningKey::new(scalar))
    }

    /// Encodes the public point as big-endian `x || y`.
    pub fn encode_verifying_key(
        &self,
        key: &VerifyingKey<G::Point>,
    ) -> Result<Vec<u8>, SchnorrError> {
        Ok(self.group.encode(&key.point)?)
    }

    /// Parses a public point, rejecting off-curve coordinates.
    pub fn decode_verifying_key(
        &self,
        bytes: &[u8],
    ) -> Result<VerifyingKey<G::Point>, SchnorrError> {
        Ok(VerifyingKey::from_point(self.group.decode(bytes)?))
    }

    /// Encodes a signature as `enc(R) || s`.
    pub fn encode_signature(&self, sig: &Signature<G::Point>) -> Result<Vec<u8>, SchnorrError> {
        if &sig.s >= self.group.order() {
            return Err(SchnorrError::InvalidScalarRange);
        }

        let mut out = self.group.encode(&sig.r)?;
        out.extend_from_slice(&encode_scalar(&sig.s, self.scalar_size())?);
        Ok(out)
    }

    /// Parses `enc(R) || s`, checking R is on the curve and `s < n`.
    pub fn decode_signature(&self, bytes: &[u8]) -> Result<Signature<G::Point>, SchnorrError> {
        if bytes.len() != self.signature_size() {
            return Err(SchnorrError::InvalidLength {
                expected: self.signature_size(),
                actual: bytes.len(),
            });
        }

        let (r_bytes, s_bytes) = bytes.split_at(self.point_size());
        let r = self.group.decode(r_bytes)?;
        let s = decode_scalar(s_bytes, self.scalar_size())?;
        if &s >= self.group.order() {
            return Err(SchnorrError::InvalidScalarRange);
        }
        Ok(Signature { r, s })
    }

    /// Checks `k` lies in `[1, n - 1]`.
    fn check_secret_range(&self, k: &BigUint) -> Result<(), SchnorrError> {
        if k < &self.one || k > &self.max_scalar {
            return Err(SchnorrError::InvalidScalarRange);
        }
        Ok(())
    }
}
