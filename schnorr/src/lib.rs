//! Schnorr signature scheme over prime-order elliptic-curve groups.
//!
//! This library implements a Schnorr signature scheme using:
//! - Any group exposed through [`curve::GroupContext`] (secp256k1 and P-256 are provided)
//! - SHA-256 for the Fiat-Shamir challenge over `enc(R) || enc(pk) || msg`
//! - Arbitrary byte strings as messages
//!
//! # Overview
//!
//! The Schnorr signature scheme is a digital signature scheme that provides:
//! - Unforgeability: Only the holder of the secret key can produce valid signatures
//! - Non-repudiation: The signer cannot deny having signed a message
//! - Verification efficiency: Signatures can be verified efficiently
//!
//! # Example
//!
//! ```
//! use curve::Secp256k1;
//! use schnorr::Schnorr;
//!
//! let mut rng = rand::rng();
//! let scheme = Schnorr::new(Secp256k1::default()).expect("supported group");
//!
//! // Generate a key pair
//! let keys = scheme.generate_keys(&mut rng).expect("keygen");
//!
//! // Sign the message
//! let message = b"Let me go";
//! let signature = scheme
//!     .sign(&mut rng, message, keys.signing_key(), keys.verifying_key())
//!     .expect("signing failed");
//!
//! // Verify the signature
//! assert!(scheme.verify(message, &signature, keys.verifying_key()));
//!
//! // Persist it as `enc(R) || s`
//! let bytes = scheme.encode_signature(&signature).expect("encode");
//! assert_eq!(bytes.len(), schnorr::SIG_SIZE);
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG)
//! - Each signature must use a fresh random nonce
//! - Protect the signing key from unauthorized access

mod constants;
mod errors;
mod keys;
mod scheme;
mod signatures;


pub use constants::{DIGEST_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::SchnorrError;
pub use keys::{KeyPair, SigningKey, VerifyingKey};
pub use scheme::Schnorr;
pub use signatures::{Signature, hash_challenge};
