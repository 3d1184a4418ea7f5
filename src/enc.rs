use crate::{
    Base85Error, BASE, BASE_2ND_POWER, BASE_3RD_POWER, BASE_4TH_POWER, BYTE_BLOCK, TEXT_BLOCK,
    Z85_CHARS, encoded_len,
};

#[inline(always)]
fn to_char(value: u32) -> u8 {
    Z85_CHARS[value as usize]
}

/// Encodes `src` into `dst`, which must hold at least `encoded_len(src.len())` bytes.
pub fn z85enc(src: &[u8], dst: &mut [u8]) -> Result<(), Base85Error> {
    if src.len() % BYTE_BLOCK != 0 {
        return Err(Base85Error::UnalignedBytes(src.len()));
    }
    if dst.len() < encoded_len(src.len()) {
        panic!("destination buffer too small");
    }

    encode_chunks(src, dst);
    Ok(())
}

/// Encodes a block aligned buffer into a freshly allocated string.
pub fn encode_blocks(src: &[u8]) -> Result<String, Base85Error> {
    let mut dst = vec![0u8; encoded_len(src.len())];
    z85enc(src, &mut dst)?;
    // SAFETY: every byte written comes from Z85_CHARS, which is ASCII.
    Ok(unsafe { String::from_utf8_unchecked(dst) })
}

// Callers guarantee alignment and destination size.
pub(crate) fn encode_chunks(src: &[u8], dst: &mut [u8]) {
    for (src_chunk, dst_chunk) in src
        .chunks_exact(BYTE_BLOCK)
        .zip(dst.chunks_exact_mut(TEXT_BLOCK))
    {
        let mut value =
            u32::from_be_bytes([src_chunk[0], src_chunk[1], src_chunk[2], src_chunk[3]]);

        dst_chunk[0] = to_char(value / BASE_4TH_POWER);
        value %= BASE_4TH_POWER;
        dst_chunk[1] = to_char(value / BASE_3RD_POWER);
        value %= BASE_3RD_POWER;
        dst_chunk[2] = to_char(value / BASE_2ND_POWER);
        value %= BASE_2ND_POWER;
        dst_chunk[3] = to_char(value / BASE);
        dst_chunk[4] = to_char(value % BASE);
    }
}
