use num_bigint::BigUint;
use rand::TryCryptoRng;

use crate::errors::RandomError;

/// Upper bound on rejection-sampling rounds before giving up on the source.
///
/// Every round accepts with probability above 1/2, so a healthy source never
/// gets close to this.
pub const MAX_SAMPLE_ATTEMPTS: usize = 256;

/// Samples a scalar uniformly from the inclusive range `[low, high]`.
///
/// Candidates are drawn with exactly the bit length of `high - low` and
/// rejected when they exceed it, so the result carries no modulo bias.
pub fn random_scalar<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> Result<BigUint, RandomError> {
    if low > high {
        return Err(RandomError::EmptyRange);
    }

    let span = high - low;
    let bits = span.bits() as usize;
    if bits == 0 {
        return Ok(low.clone());
    }

    let mut buf = vec![0u8; bits.div_ceil(8)];
    let excess = buf.len() * 8 - bits;
    let mask = 0xffu8 >> excess;

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        rng.try_fill_bytes(&mut buf)
            .map_err(|err| RandomError::Source(err.to_string()))?;
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if candidate <= span {
            return Ok(low + candidate);
        }
    }

    Err(RandomError::Exhausted(MAX_SAMPLE_ATTEMPTS))
}
