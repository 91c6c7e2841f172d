//! Base58 codec with exact round-trip of leading zero bytes.
//!
//! Bytes are interpreted as one big-endian arbitrary-precision integer and
//! converted to the 58-character alphabet
//! `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz` (no `0`,
//! `O`, `I` or `l`). Since the integer alone cannot distinguish `0x00` from
//! `0x0000`, every leading zero byte is carried as one leading `1` in the
//! encoded string, which makes `decode(encode(b)) == b` hold for every byte
//! sequence.
//!
//! Both directions are quadratic in the input length (repeated division or
//! multiply-add by 58), which is fine for identifier-sized payloads but
//! worth keeping in mind before feeding this megabytes of data.

mod alphabet;
mod decode;
mod encode;
mod errors;

pub use decode::decode;
pub use encode::encode;
pub use errors::DecodeError;
