//! Fixed-width big-endian scalar encoding.

use num_bigint::BigUint;

use crate::errors::GroupError;

/// Encodes `k` as exactly `width` big-endian bytes, left-padded with zeros.
pub fn encode_scalar(k: &BigUint, width: usize) -> Result<Vec<u8>, GroupError> {
    let bytes = k.to_bytes_be();
    if bytes.len() > width {
        return Err(GroupError::ScalarOutOfRange);
    }

    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Decodes exactly `width` big-endian bytes into a scalar.
pub fn decode_scalar(bytes: &[u8], width: usize) -> Result<BigUint, GroupError> {
    if bytes.len() != width {
        return Err(GroupError::InvalidLength {
            expected: width,
            actual: bytes.len(),
        });
    }
    Ok(BigUint::from_bytes_be(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_padded() {
        let out = encode_scalar(&BigUint::from(0u32), 4).unwrap();
        assert_eq!(out, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_left_padding() {
        let out = encode_scalar(&BigUint::from(0x0102u32), 4).unwrap();
        assert_eq!(out, vec![0, 0, 1, 2]);
        assert_eq!(decode_scalar(&out, 4).unwrap(), BigUint::from(0x0102u32));
    }

    #[test]
    fn test_too_wide() {
        let k = BigUint::from(0x0100_0000u32);
        assert_eq!(encode_scalar(&k, 3), Err(GroupError::ScalarOutOfRange));
    }

    #[test]
    fn test_decode_wrong_width() {
        assert_eq!(
            decode_scalar(&[1, 2, 3], 4),
            Err(GroupError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }
}
