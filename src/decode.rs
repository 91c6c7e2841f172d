use num_bigint::BigUint;
use num_traits::identities::Zero;

use crate::alphabet::digit_value;
use crate::alphabet::leading_zero_digits;
use crate::alphabet::BASE;
use crate::errors::DecodeError;

/// Decodes a base58 string back into the byte sequence it was encoded from.
///
/// Every leading `1` of the input becomes one leading zero byte of the
/// output. Fails with [`DecodeError::InvalidCharacter`] on the first
/// character outside the alphabet, without returning a partial result.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut value = BigUint::zero();
    for (position, character) in input.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;
        value = value * BASE as u32 + u32::from(digit);
    }

    // BigUint renders zero as [0], but zero carries no digits here
    let digits = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    };

    let mut decoded = vec![0u8; leading_zero_digits(input)];
    decoded.extend(digits);

    Ok(decoded)
}
