//! [`GroupContext`] adapter for RustCrypto short-Weierstrass curves.

use core::fmt;
use core::marker::PhantomData;

use elliptic_curve::ff::{Field, PrimeField};
use elliptic_curve::group::{Curve as _, Group as _};
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{CurveArithmetic, FieldBytes, FieldBytesSize};
use num_bigint::BigUint;

use crate::errors::GroupError;
use crate::group::GroupContext;
use crate::scalar::encode_scalar;

/// The secp256k1 group.
pub type Secp256k1 = Weierstrass<k256::Secp256k1>;

/// The NIST P-256 (secp256r1) group.
pub type Secp256r1 = Weierstrass<p256::NistP256>;

/// A prime-order curve group backed by RustCrypto arithmetic.
///
/// Points are affine; the group order is read from the scalar field at
/// construction and cached.
pub struct Weierstrass<C> {
    name: &'static str,
    order: BigUint,
    field_size: usize,
    _curve: PhantomData<C>,
}

impl<C> Weierstrass<C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    /// Builds the context for curve `C`, labelled `name` in logs.
    pub fn with_name(name: &'static str) -> Self {
        // n - 1 is the largest representable scalar
        let max = (-C::Scalar::ONE).to_repr();
        let order = BigUint::from_bytes_be(max.as_slice()) + 1u32;

        Self {
            name,
            order,
            field_size: FieldBytes::<C>::default().len(),
            _curve: PhantomData,
        }
    }

    fn to_scalar(&self, k: &BigUint) -> Result<C::Scalar, GroupError> {
        if k >= &self.order {
            return Err(GroupError::ScalarOutOfRange);
        }

        let mut repr = FieldBytes::<C>::default();
        repr.copy_from_slice(&encode_scalar(k, self.field_size)?);
        Option::<C::Scalar>::from(C::Scalar::from_repr(repr)).ok_or(GroupError::ScalarOutOfRange)
    }
}

impl<C> GroupContext for Weierstrass<C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    type Point = C::AffinePoint;

    fn name(&self) -> &'static str {
        self.name
    }

    fn generator(&self) -> Self::Point {
        C::ProjectivePoint::generator().to_affine()
    }

    fn identity(&self) -> Self::Point {
        C::ProjectivePoint::identity().to_affine()
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn field_size(&self) -> usize {
        self.field_size
    }

    fn add(&self, a: &Self::Point, b: &Self::Point) -> Self::Point {
        (C::ProjectivePoint::from(*a) + C::ProjectivePoint::from(*b)).to_affine()
    }

    fn scalar_mul(&self, k: &BigUint, point: &Self::Point) -> Result<Self::Point, GroupError> {
        let scalar = self.to_scalar(k)?;
        Ok((C::ProjectivePoint::from(*point) * scalar).to_affine())
    }

    fn encode(&self, point: &Self::Point) -> Result<Vec<u8>, GroupError> {
        let encoded = point.to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => {
                let mut out = Vec::with_capacity(self.point_size());
                out.extend_from_slice(x);
                out.extend_from_slice(y);
                Ok(out)
            }
            _ => Err(GroupError::IdentityPoint),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Self::Point, GroupError> {
        if bytes.len() != self.point_size() {
            return Err(GroupError::InvalidLength {
                expected: self.point_size(),
                actual: bytes.len(),
            });
        }

        let (x_bytes, y_bytes) = bytes.split_at(self.field_size);
        let mut x = FieldBytes::<C>::default();
        let mut y = FieldBytes::<C>::default();
        x.copy_from_slice(x_bytes);
        y.copy_from_slice(y_bytes);

        let encoded = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);
        Option::<C::AffinePoint>::from(C::AffinePoint::from_encoded_point(&encoded))
            .ok_or(GroupError::NotOnCurve)
    }
}

impl Default for Secp256k1 {
    fn default() -> Self {
        Self::with_name("secp256k1")
    }
}

impl Default for Secp256r1 {
    fn default() -> Self {
        Self::with_name("secp256r1")
    }
}

impl<C> Clone for Weierstrass<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            order: self.order.clone(),
            field_size: self.field_size,
            _curve: PhantomData,
        }
    }
}

impl<C> fmt::Debug for Weierstrass<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weierstrass")
            .field("name", &self.name)
            .field("order", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    const SECP256K1_ORDER: &str =
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
    const SECP256K1_G: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
                               483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
    const SECP256R1_ORDER: &str =
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";
    const SECP256R1_G: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
                               4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

    fn check_group_laws<G: GroupContext>(group: &G) {
        let g = group.generator();
        let id = group.identity();
        assert!(!group.is_identity(&g));
        assert!(group.is_identity(&id));

        assert_eq!(group.add(&g, &id), g);
        assert_eq!(group.add(&id, &g), g);

        let five = group.mul_generator(&BigUint::from(5u32)).unwrap();
        let mut sum = id;
        for _ in 0..5 {
            sum = group.add(&sum, &g);
        }
        assert_eq!(five, sum);

        let zero = group.mul_generator(&BigUint::from(0u32)).unwrap();
        assert!(group.is_identity(&zero));

        // (n - 1) * G = -G
        let neg_g = group.mul_generator(&(group.order() - 1u32)).unwrap();
        assert!(group.is_identity(&group.add(&g, &neg_g)));
    }

    #[test]
    fn test_secp256k1_parameters() {
        let group = Secp256k1::default();
        assert_eq!(group.name(), "secp256k1");
        assert_eq!(group.field_size(), 32);
        assert_eq!(group.scalar_size(), 32);
        assert_eq!(group.order().to_bytes_be(), from_hex(SECP256K1_ORDER));
        assert_eq!(group.encode(&group.generator()).unwrap(), from_hex(SECP256K1_G));
    }

    #[test]
    fn test_secp256r1_parameters() {
        let group = Secp256r1::default();
        assert_eq!(group.field_size(), 32);
        assert_eq!(group.order().to_bytes_be(), from_hex(SECP256R1_ORDER));
        assert_eq!(group.encode(&group.generator()).unwrap(), from_hex(SECP256R1_G));
    }

    #[test]
    fn test_group_laws() {
        check_group_laws(&Secp256k1::default());
        check_group_laws(&Secp256r1::default());
    }

    #[test]
    fn test_scalar_out_of_range() {
        let group = Secp256k1::default();
        let n = group.order().clone();
        assert_eq!(group.mul_generator(&n), Err(GroupError::ScalarOutOfRange));
    }

    #[test]
    fn test_identity_has_no_encoding() {
        let group = Secp256k1::default();
        assert_eq!(group.encode(&group.identity()), Err(GroupError::IdentityPoint));
    }

    #[test]
    fn test_decode_round_trip() {
        let group = Secp256r1::default();
        let p = group.mul_generator(&BigUint::from(12345u32)).unwrap();
        let bytes = group.encode(&p).unwrap();
        assert_eq!(bytes.len(), group.point_size());
        assert_eq!(group.decode(&bytes).unwrap(), p);
    }

    #[test]
    fn test_decode_rejects_off_curve() {
        let group = Secp256k1::default();
        let mut bytes = group.encode(&group.generator()).unwrap();
        bytes[63] ^= 1;
        assert_eq!(group.decode(&bytes), Err(GroupError::NotOnCurve));
        assert_eq!(group.decode(&[0u8; 64]), Err(GroupError::NotOnCurve));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let group = Secp256k1::default();
        assert_eq!(
            group.decode(&[1u8; 33]),
            Err(GroupError::InvalidLength {
                expected: 64,
                actual: 33
            })
        );
    }
}
