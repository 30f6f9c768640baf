//! Base64 encoding for argus-utils
//!
//! Binary payloads sent to the recording service are base64 encoded with the
//! standard alphabet. In URL mode `+`, `/` and the `=` padding are
//! percent-escaped so the text can go straight into a query string. This is
//! not the RFC 4648 base64url alphabet.

use ::base64::{Engine, engine::general_purpose::STANDARD};

use crate::config::{URL_ESCAPED_PAD, URL_ESCAPED_PLUS, URL_ESCAPED_SLASH};

/// Encodes `input` as base64, percent-escaping `+ / =` when `url_encode` is set
pub fn encode(input: &[u8], url_encode: bool) -> String {
    let encoded = STANDARD.encode(input);
    if !url_encode {
        return encoded;
    }

    let mut escaped = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match c {
            '+' => escaped.push_str(URL_ESCAPED_PLUS),
            '/' => escaped.push_str(URL_ESCAPED_SLASH),
            '=' => escaped.push_str(URL_ESCAPED_PAD),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Encodes the UTF-8 bytes of `input`
pub fn encode_str(input: &str, url_encode: bool) -> String {
    encode(input.as_bytes(), url_encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_full_group() {
        assert_eq!(encode(b"Man", false), "TWFu");
    }

    #[test]
    fn test_encode_padding() {
        assert_eq!(encode(b"M", false), "TQ==");
        assert_eq!(encode(b"Ma", false), "TWE=");
        assert_eq!(encode(b"hello world", false), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_encode_url_padding() {
        assert_eq!(encode(b"M", true), "TQ%3D%3D");
        assert_eq!(encode(b"Ma", true), "TWE%3D");
    }

    #[test]
    fn test_encode_url_escapes_alphabet() {
        // 0xfb 0xff 0xbf encodes to "+/+/"
        assert_eq!(encode(&[0xfb, 0xff, 0xbf], false), "+/+/");
        assert_eq!(encode(&[0xfb, 0xff, 0xbf], true), "%2B%2F%2B%2F");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[], false), "");
        assert_eq!(encode(&[], true), "");
    }

    #[test]
    fn test_encode_length() {
        for n in 0..32usize {
            let input = vec![0xa5u8; n];
            assert_eq!(encode(&input, false).len(), 4 * n.div_ceil(3));
        }
    }

    #[test]
    fn test_encode_str() {
        assert_eq!(encode_str("user:pass", false), "dXNlcjpwYXNz");
    }
}
