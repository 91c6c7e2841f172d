use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::identities::Zero;

use crate::alphabet::leading_zero_bytes;
use crate::alphabet::ALPHABET;
use crate::alphabet::BASE;

/// Encodes a byte sequence into its base58 string representation.
///
/// Every leading zero byte of the input becomes one leading `1` in the
/// output, so the exact byte sequence can be recovered by [`decode`].
///
/// [`decode`]: crate::decode
pub fn encode(input: &[u8]) -> String {
    if input.is_empty() {
        return "".to_string();
    }

    let base = BigUint::from(BASE as u64);
    let zero = BigUint::zero();

    let mut encoded = String::new();
    let mut value = BigUint::from_bytes_be(input);
    while value > zero {
        let (div, rem) = value.div_rem(&base);
        encoded.push(ALPHABET[rem.try_into().unwrap_or(0)] as char);
        value = div;
    }

    for _ in 0..leading_zero_bytes(input) {
        encoded.push(ALPHABET[0] as char);
    }

    // Digits were pushed least-significant first
    encoded.chars().rev().collect()
}
