//! Text encodings of raw big-integer buffers
//!
//! JWK fields of this crate use the standard base64 alphabet *with* padding,
//! not the base64url variant of RFC 7518, to stay compatible with keys
//! stored by the legacy tooling.
use crate::error::KeyResult;

/// Encode the raw bytes into padded standard base64
pub fn bytes_to_b64(bytes: &[u8]) -> String {
    base64::encode_config(bytes, base64::STANDARD)
}

/// Decode padded standard base64 into raw bytes
pub fn b64_to_bytes(b64: &str) -> KeyResult<Vec<u8>> {
    Ok(base64::decode_config(b64, base64::STANDARD)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn encode_exponent() {
        assert_eq!(bytes_to_b64(&[0x01, 0x00, 0x01]), "AQAB");
        assert_eq!(bytes_to_b64(&[0x03]), "Aw==");
    }

    #[test]
    fn no_url_safe_alphabet() {
        assert_eq!(bytes_to_b64(&[0xfb, 0xff]), "+/8=");
        assert_eq!(b64_to_bytes("+/8=").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = b64_to_bytes("not-base64!!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        let err = b64_to_bytes("-_8").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn empty_input() {
        assert_eq!(bytes_to_b64(&[]), "");
        assert!(b64_to_bytes("").unwrap().is_empty());
    }
}
