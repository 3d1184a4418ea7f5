use uuid::Uuid;

use crate::{Base85Error, ENCODED_UUID_LENGTH, z85dec};
use crate::enc::encode_chunks;

pub fn encode_uuid(id: &Uuid) -> String {
    let mut dst = [0u8; ENCODED_UUID_LENGTH];
    encode_chunks(id.as_bytes(), &mut dst);
    dst.into_iter().map(char::from).collect()
}

pub fn decode_uuid(encoded: &str) -> Result<Uuid, Base85Error> {
    if encoded.len() != ENCODED_UUID_LENGTH {
        return Err(Base85Error::UuidLength { expected: ENCODED_UUID_LENGTH, actual: encoded.len() });
    }
    let mut bytes = [0u8; 16];
    z85dec(encoded.as_bytes(), &mut bytes)?;
    Ok(Uuid::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_blocks;

    #[test]
    fn test_nil_uuid() {
        let encoded = encode_uuid(&Uuid::nil());
        assert_eq!(encoded, "0".repeat(ENCODED_UUID_LENGTH));
        assert_eq!(decode_uuid(&encoded).unwrap(), Uuid::nil());
    }

    #[test]
    fn test_uuid_roundtrip() {
        let id = Uuid::from_u128(0x0123_4567_89ab_cdef_fedc_ba98_7654_3210);
        let encoded = encode_uuid(&id);
        assert_eq!(encoded.len(), ENCODED_UUID_LENGTH);
        assert_eq!(encoded, encode_blocks(id.as_bytes()).unwrap());
        assert_eq!(decode_uuid(&encoded).unwrap(), id);
    }

    #[test]
    fn test_uuid_wrong_length() {
        assert_eq!(
            decode_uuid("0000000000"),
            Err(Base85Error::UuidLength { expected: 20, actual: 10 })
        );
        assert_eq!(
            decode_uuid(&"0".repeat(25)),
            Err(Base85Error::UuidLength { expected: 20, actual: 25 })
        );
    }

    #[test]
    fn test_uuid_invalid_chars() {
        let encoded = "000000000000000000 0";
        assert_eq!(
            decode_uuid(encoded),
            Err(Base85Error::InvalidCharacters(encoded.to_string()))
        );
    }
}
