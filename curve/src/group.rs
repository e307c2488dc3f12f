use core::fmt::Debug;

use num_bigint::BigUint;

use crate::errors::GroupError;

/// A prime-order elliptic-curve group, as consumed by signature schemes.
///
/// Scalars are plain integers; implementations reject any scalar that is not
/// already reduced modulo [`order`](GroupContext::order).
pub trait GroupContext {
    type Point: Copy + Debug + Eq;

    /// Short curve name, used in logs.
    fn name(&self) -> &'static str;

    fn generator(&self) -> Self::Point;

    fn identity(&self) -> Self::Point;

    /// The order `n` of the group generated by [`generator`](GroupContext::generator).
    fn order(&self) -> &BigUint;

    /// Width in bytes of one base-field coordinate.
    fn field_size(&self) -> usize;

    fn add(&self, a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// Computes `k * point`. Multiplying by zero yields the identity.
    fn scalar_mul(&self, k: &BigUint, point: &Self::Point) -> Result<Self::Point, GroupError>;

    /// Encodes `point` as big-endian `x || y`, each zero-padded to
    /// [`field_size`](GroupContext::field_size) bytes.
    fn encode(&self, point: &Self::Point) -> Result<Vec<u8>, GroupError>;

    /// Parses the output of [`encode`](GroupContext::encode), rejecting
    /// coordinates that are not on the curve.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Point, GroupError>;

    #[inline]
    fn mul_generator(&self, k: &BigUint) -> Result<Self::Point, GroupError> {
        self.scalar_mul(k, &self.generator())
    }

    #[inline]
    fn is_identity(&self, point: &Self::Point) -> bool {
        *point == self.identity()
    }

    /// Width in bytes of a canonical point encoding.
    #[inline]
    fn point_size(&self) -> usize {
        2 * self.field_size()
    }

    /// Width in bytes of a fixed-width scalar encoding.
    #[inline]
    fn scalar_size(&self) -> usize {
        (self.order().bits() as usize).div_ceil(8)
    }
}
