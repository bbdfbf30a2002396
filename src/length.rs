//! The length octets.
//!
//! This is a private module used by the element decoder.

use std::mem;
use crate::decode::ContentError;


/// Takes the length octets from the beginning of `data`.
///
/// Returns the definite content length and the remainder of `data`
/// following the length octets.
///
/// If the most significant bit of the first octet is clear, the remaining
/// bits are the length. Otherwise they give the number of octets that
/// follow with the big-endian encoding of the length. The value `0x80`
/// introduces an indefinite length value, which we do not support, and
/// `0xFF` is reserved.
///
/// Non-minimal long form encodings are accepted. Whether a length was
/// encoded canonically is of no concern when dumping structure.
pub fn take_from(data: &[u8]) -> Result<(usize, &[u8]), ContentError> {
    let (&first, data) = match data.split_first() {
        Some(some) => some,
        None => return Err(ContentError::UNEXPECTED_END),
    };
    match first {
        n if n & 0x80 == 0 => Ok((n as usize, data)),
        0x80 => {
            Err(ContentError::from_static("indefinite length not supported"))
        }
        0xFF => Err(ContentError::from_static("reserved length octet")),
        n => {
            let count = (n & 0x7F) as usize;
            if data.len() < count {
                return Err(ContentError::UNEXPECTED_END)
            }
            let (octets, data) = data.split_at(count);

            // Leading zero octets carry no value. Skipping them also lets
            // us decode over-long encodings of short lengths.
            let octets = match octets.iter().position(|&x| x != 0) {
                Some(pos) => &octets[pos..],
                None => return Ok((0, data)),
            };
            if octets.len() > mem::size_of::<usize>() {
                return Err(ContentError::from_static("excessive length"))
            }
            let mut len = 0usize;
            for &octet in octets {
                len = len << 8 | octet as usize;
            }
            Ok((len, data))
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn length(data: &[u8]) -> Result<(usize, &[u8]), ContentError> {
        take_from(data)
    }

    #[test]
    fn short_form() {
        assert_eq!(length(b"\x00").unwrap(), (0, b"".as_ref()));
        assert_eq!(length(b"\x12xy").unwrap(), (0x12, b"xy".as_ref()));
        assert_eq!(length(b"\x7F").unwrap(), (0x7F, b"".as_ref()));
    }

    #[test]
    fn long_form() {
        assert_eq!(length(b"\x81\x80").unwrap(), (0x80, b"".as_ref()));
        assert_eq!(
            length(b"\x82\xF0\x0E..").unwrap(), (0xF00E, b"..".as_ref())
        );
    }

    #[test]
    fn long_form_with_leading_zeros() {
        // Not minimal, but we don't check canonicality.
        assert_eq!(length(b"\x82\x00\x0E").unwrap(), (0x0E, b"".as_ref()));
        assert_eq!(length(b"\x82\x00\x00").unwrap(), (0, b"".as_ref()));
        assert_eq!(length(b"\x81\x05").unwrap(), (5, b"".as_ref()));
    }

    #[test]
    fn unsupported_forms() {
        assert!(length(b"").is_err());
        assert!(length(b"\x80").is_err());
        assert!(length(b"\xFF").is_err());
        assert!(length(b"\x82\x01").is_err());
        assert!(
            length(
                b"\x89\x01\x01\x01\x01\x01\x01\x01\x01\x01"
            ).is_err()
        );
    }
}
