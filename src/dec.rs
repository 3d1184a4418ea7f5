use crate::{
    Base85Error, ASCII_BITMASK, BASE, BASE_2ND_POWER, BASE_3RD_POWER, BASE_4TH_POWER, BYTE_BLOCK,
    TEXT_BLOCK, Z85_CHARS, decoded_len,
};

/// Marks a code that is not part of the alphabet. Its bits fall outside
/// `ASCII_BITMASK`, so it taints the canary when ORed in.
pub(crate) const SENTINEL: u8 = u8::MAX;

const fn generate_decode_lut(alphabet: &[u8; 85]) -> [u8; ASCII_BITMASK as usize + 1] {
    let mut lut = [SENTINEL; ASCII_BITMASK as usize + 1];
    let mut i = 0u8;
    while i < 85 {
        lut[alphabet[i as usize] as usize] = i;
        i += 1;
    }
    lut
}

pub(crate) const Z85_LUT: [u8; ASCII_BITMASK as usize + 1] = generate_decode_lut(Z85_CHARS);

// Non-ASCII input has bits outside ASCII_BITMASK, and so does SENTINEL.
// Both end up in the canary; nothing is checked here.
#[inline(always)]
fn from_char(value: u8, canary: &mut u8) -> u32 {
    *canary |= value;
    let digit = Z85_LUT[(value & ASCII_BITMASK) as usize];
    *canary |= digit;
    digit as u32
}

/// Decodes `src` into `dst`, which must hold at least `decoded_len(src.len())` bytes.
///
/// Invalid characters are detected with a single check after the whole input
/// has been decoded. On error the contents of `dst` are unspecified.
pub fn z85dec(src: &[u8], dst: &mut [u8]) -> Result<(), Base85Error> {
    if src.len() % TEXT_BLOCK != 0 {
        return Err(Base85Error::UnalignedText(src.len()));
    }
    if dst.len() < decoded_len(src.len()) {
        panic!("destination buffer too small");
    }

    let mut canary = 0u8;
    for (src_chunk, dst_chunk) in src
        .chunks_exact(TEXT_BLOCK)
        .zip(dst.chunks_exact_mut(BYTE_BLOCK))
    {
        // blocks above u32::MAX wrap
        let value = from_char(src_chunk[0], &mut canary)
            .wrapping_mul(BASE_4TH_POWER)
            .wrapping_add(from_char(src_chunk[1], &mut canary).wrapping_mul(BASE_3RD_POWER))
            .wrapping_add(from_char(src_chunk[2], &mut canary).wrapping_mul(BASE_2ND_POWER))
            .wrapping_add(from_char(src_chunk[3], &mut canary).wrapping_mul(BASE))
            .wrapping_add(from_char(src_chunk[4], &mut canary));
        dst_chunk.copy_from_slice(&value.to_be_bytes());
    }

    if canary & !ASCII_BITMASK != 0 {
        let input = String::from_utf8_lossy(src).into_owned();
        tracing::debug!(len = src.len(), "rejecting invalid Z85 input");
        return Err(Base85Error::InvalidCharacters(input));
    }
    Ok(())
}

/// Decodes a 5 character aligned string into a freshly allocated buffer.
pub fn decode_blocks(encoded: &str) -> Result<Vec<u8>, Base85Error> {
    // Byte length only differs from the character count for non-ASCII input,
    // which is invalid regardless of its length.
    if encoded.len() % TEXT_BLOCK != 0 && !encoded.is_ascii() {
        tracing::debug!(len = encoded.len(), "rejecting invalid Z85 input");
        return Err(Base85Error::InvalidCharacters(encoded.to_owned()));
    }
    let mut dst = vec![0u8; decoded_len(encoded.len())];
    z85dec(encoded.as_bytes(), &mut dst)?;
    Ok(dst)
}
