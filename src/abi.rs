//! Contract ABI encoding of a single dynamic `string` parameter.
//!
//! The layout is the standard head/tail form for one dynamic argument:
//!
//! - word 0: offset of the tail, always `0x20`
//! - word 1: byte length of the UTF-8 payload
//! - payload bytes, right-padded with zeros to a multiple of 32
//!
//! Encoding and decoding are delegated to `alloy-sol-types`.

use alloy_sol_types::SolValue;

use crate::error::Error;

/// Size of one ABI word in bytes.
pub const WORD: usize = 32;

/// ABI-encode `s` as the sole `string` parameter.
pub fn encode_string(s: &str) -> Vec<u8> {
    s.abi_encode()
}

/// Length of the buffer [`encode_string`] returns for a payload of
/// `payload_len` bytes.
pub fn encoded_len(payload_len: usize) -> usize {
    2 * WORD + payload_len.div_ceil(WORD) * WORD
}

/// Decode a buffer holding a single ABI-encoded `string` parameter.
pub fn decode_string(data: &[u8]) -> Result<String, Error> {
    Ok(String::abi_decode(data, true)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(v: usize) -> [u8; WORD] {
        let mut w = [0u8; WORD];
        w[WORD - 8..].copy_from_slice(&(v as u64).to_be_bytes());
        w
    }

    #[test]
    fn test_layout_for_short_string() {
        let enc = encode_string("101");
        assert_eq!(enc.len(), 96);
        assert_eq!(enc[..32], word(0x20));
        assert_eq!(enc[32..64], word(3));
        assert_eq!(&enc[64..67], b"101");
        assert!(enc[67..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_exact_word_payload_has_no_extra_padding() {
        let s = "1".repeat(32);
        let enc = encode_string(&s);
        assert_eq!(enc.len(), 96);
        assert_eq!(enc[32..64], word(32));
    }

    #[test]
    fn test_payload_spills_into_second_word() {
        let s = "10".repeat(20);
        let enc = encode_string(&s);
        assert_eq!(enc.len(), 128);
        assert_eq!(enc[32..64], word(40));
        assert!(enc[104..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encoded_len_matches_encoder() {
        for n in 1..100 {
            let s = "1".repeat(n);
            let enc = encode_string(&s);
            assert_eq!(enc.len(), encoded_len(n));
            assert_eq!(enc.len() % WORD, 0);
        }
    }

    #[test]
    fn test_decode_recovers_string() {
        let enc = encode_string("1100101");
        assert_eq!(decode_string(&enc).unwrap(), "1100101");
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let enc = encode_string("1100101");
        assert!(decode_string(&enc[..40]).is_err());
        assert!(decode_string(&[]).is_err());
    }
}
