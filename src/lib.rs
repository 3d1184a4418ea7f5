//! Base85 codec using the Z85 character set with strict 4 byte / 5 character
//! block alignment. Partial blocks are rejected, never padded.

pub const BASE: u32 = 85;
pub const BASE_2ND_POWER: u32 = BASE * BASE;
pub const BASE_3RD_POWER: u32 = BASE_2ND_POWER * BASE;
pub const BASE_4TH_POWER: u32 = BASE_3RD_POWER * BASE;

pub const BYTE_BLOCK: usize = 4;
pub const TEXT_BLOCK: usize = 5;

// UUIDs always encode into 20 characters
pub const ENCODED_UUID_LENGTH: usize = 20;

pub const Z85_CHARS: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

pub(crate) const ASCII_BITMASK: u8 = 0x7F;

mod enc;
mod dec;
mod error;
mod id;

pub use crate::enc::{z85enc, encode_blocks};
pub use crate::dec::{z85dec, decode_blocks};
pub use crate::error::Base85Error;
pub use crate::id::{encode_uuid, decode_uuid};

/// Number of characters produced for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    len / BYTE_BLOCK * TEXT_BLOCK
}

/// Number of bytes produced for `len` input characters.
pub const fn decoded_len(len: usize) -> usize {
    len / TEXT_BLOCK * BYTE_BLOCK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powers() {
        assert_eq!(BASE_2ND_POWER, 7_225);
        assert_eq!(BASE_3RD_POWER, 614_125);
        assert_eq!(BASE_4TH_POWER, 52_200_625);
    }

    #[test]
    fn test_alphabet_is_distinct_ascii() {
        for (i, a) in Z85_CHARS.iter().enumerate() {
            assert!(a.is_ascii_graphic(), "non printable char at {}", i);
            assert!(!Z85_CHARS[i + 1..].contains(a), "duplicate char {}", *a as char);
        }
    }

    #[test]
    fn test_block_lengths() {
        assert_eq!(encoded_len(16), ENCODED_UUID_LENGTH);
        assert_eq!(decoded_len(ENCODED_UUID_LENGTH), 16);
        assert_eq!(encoded_len(0), 0);
        assert_eq!(decoded_len(0), 0);
    }

    #[test]
    fn test_roundtrip_varied_lengths() {
        for len in (0..=64).step_by(BYTE_BLOCK) {
            let src: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let encoded = encode_blocks(&src).unwrap();
            assert_eq!(encoded.len(), encoded_len(len));
            assert_eq!(decode_blocks(&encoded).unwrap(), src, "roundtrip mismatch for len {}", len);
        }
    }

    #[test]
    fn test_decoded_length_of_alphabet_text() {
        let text: String = Z85_CHARS.iter().map(|&b| b as char).collect();
        let decoded = decode_blocks(&text).unwrap();
        assert_eq!(decoded.len(), text.len() / TEXT_BLOCK * BYTE_BLOCK);
    }

    #[test]
    fn test_sixteen_zero_bytes() {
        let encoded = encode_blocks(&[0u8; 16]).unwrap();
        assert_eq!(encoded, "0".repeat(20));
        assert_eq!(decode_blocks(&encoded).unwrap(), vec![0u8; 16]);
    }
}
