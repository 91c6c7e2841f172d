use lazy_static::lazy_static;

pub(crate) const BASE: usize = 58;

pub(crate) const ALPHABET: [u8; BASE] =
    *b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

lazy_static! {
    // 256-entry inverse of ALPHABET, keyed by byte value
    static ref DIGITS: [u8; 256] = {
        let mut table = [INVALID; 256];
        for (value, &character) in ALPHABET.iter().enumerate() {
            table[character as usize] = value as u8;
        }
        table
    };
}

pub(crate) fn digit_value(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }
    match DIGITS[character as usize] {
        INVALID => None,
        value => Some(value),
    }
}

pub(crate) fn leading_zero_bytes(input: &[u8]) -> usize {
    input.iter().take_while(|&&byte| byte == 0).count()
}

pub(crate) fn leading_zero_digits(input: &str) -> usize {
    input
        .chars()
        .take_while(|&character| character == ALPHABET[0] as char)
        .count()
}
