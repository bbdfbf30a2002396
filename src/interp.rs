//! Best-effort interpretation of primitive values.
//!
//! Given a universal class leaf element, [`interpret`] tries to produce a
//! semantic display string for it. Most failures to do so simply mean the
//! value gets shown as a hex dump instead. The exception are character
//! string and time values whose content violates their declared
//! representation: those indicate corruption serious enough that carrying
//! on would produce misleading output, so they fail the whole run with
//! [`Unrepresentable`].

use std::{error, fmt};
use crate::decode::Element;
use crate::ident::Tag;
use crate::int::Integer;
use crate::names::NameLookup;
use crate::oid::Oid;
use crate::time;


/// The largest INTEGER content size rendered as decimal.
///
/// Anything wider, such as an embedded key, reads better as a hex dump
/// than as an enormous decimal number.
const MAX_INTEGER_LEN: usize = 24;


//------------ interpret -----------------------------------------------------

/// Attempts to produce a display string for an element's value.
///
/// Returns `Ok(None)` if no interpretation is available, in which case the
/// caller is expected to fall back to a hex dump.
pub fn interpret(
    element: &Element, lookup: NameLookup
) -> Result<Option<String>, Unrepresentable> {
    if !element.tag().is_universal() {
        return Ok(None)
    }
    let content = element.content();
    match element.tag() {
        Tag::OID => {
            let dotted = match Oid::new(content).and_then(|oid| {
                oid.to_dotted()
            }) {
                Some(dotted) => dotted,
                None => return Ok(None),
            };
            let name = lookup(&dotted).unwrap_or("");
            Ok(Some(format!("{} {}", dotted, name)))
        }
        Tag::PRINTABLE_STRING => {
            char_string(element, content, is_printable,
                "contains characters not allowed in a PrintableString")
        }
        Tag::IA5_STRING => {
            char_string(element, content, |octet| octet.is_ascii(),
                "contains characters not allowed in an IA5String")
        }
        Tag::NUMERIC_STRING => {
            char_string(element, content,
                |octet| octet.is_ascii_digit() || octet == b' ',
                "contains characters not allowed in a NumericString")
        }
        Tag::UTF8_STRING => {
            match std::str::from_utf8(content) {
                Ok(res) => Ok(Some(res.into())),
                Err(_) => Err(Unrepresentable::new(
                    element.tag(), "is not valid UTF-8"
                )),
            }
        }
        Tag::UTC_TIME => {
            match time::parse_utc_time(content) {
                Some(res) => Ok(Some(res.to_string())),
                None => Err(Unrepresentable::new(
                    element.tag(), "is not a valid UTCTime"
                )),
            }
        }
        Tag::GENERALIZED_TIME => {
            match time::parse_generalized_time(content) {
                Some(res) => Ok(Some(res.to_string())),
                None => Err(Unrepresentable::new(
                    element.tag(), "is not a valid GeneralizedTime"
                )),
            }
        }
        Tag::BOOLEAN => {
            // Only the two canonical octets; anything else is left to the
            // hex dump.
            match content {
                [0x00] => Ok(Some("false".into())),
                [0xFF] => Ok(Some("true".into())),
                _ => Ok(None),
            }
        }
        Tag::INTEGER if content.len() <= MAX_INTEGER_LEN => {
            Ok(Integer::new(content).map(|int| int.to_string()))
        }
        _ => Ok(None),
    }
}

/// Interprets a character string checked octet-wise against its alphabet.
fn char_string(
    element: &Element, content: &[u8],
    allowed: impl Fn(u8) -> bool,
    reason: &'static str,
) -> Result<Option<String>, Unrepresentable> {
    if content.iter().all(|&octet| allowed(octet)) {
        // The alphabets are all ASCII subsets.
        Ok(Some(
            String::from_utf8_lossy(content).into_owned()
        ))
    }
    else {
        Err(Unrepresentable::new(element.tag(), reason))
    }
}

/// Returns whether an octet is allowed in a PrintableString.
///
/// The asterisk and ampersand are not, strictly speaking, but appear in
/// deployed certificates often enough that rejecting them does more harm
/// than good.
fn is_printable(octet: u8) -> bool {
    octet.is_ascii_alphanumeric()
        || matches!(
            octet,
            b' ' | b'\'' | b'(' | b')' | b'+' | b',' | b'-' | b'.' | b'/'
                | b':' | b'=' | b'?' | b'*' | b'&'
        )
}


//------------ Unrepresentable -----------------------------------------------

/// A value's content cannot be decoded per its declared representation.
///
/// This error is fatal to the whole run.
#[derive(Clone, Copy, Debug)]
pub struct Unrepresentable {
    /// The tag of the offending value.
    tag: Tag,

    /// What was wrong with the content.
    reason: &'static str,
}

impl Unrepresentable {
    fn new(tag: Tag, reason: &'static str) -> Self {
        Self { tag, reason }
    }
}

impl fmt::Display for Unrepresentable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} content {}", self.tag, self.reason)
    }
}

impl error::Error for Unrepresentable { }


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::names;
    use super::*;

    fn leaf(data: &[u8]) -> String {
        let (element, _) = Element::take_from(data).unwrap();
        interpret(&element, names::lookup).unwrap().unwrap()
    }

    fn uninterpreted(data: &[u8]) -> bool {
        let (element, _) = Element::take_from(data).unwrap();
        interpret(&element, names::lookup).unwrap().is_none()
    }

    fn fatal(data: &[u8]) -> Unrepresentable {
        let (element, _) = Element::take_from(data).unwrap();
        interpret(&element, names::lookup).unwrap_err()
    }

    #[test]
    fn oid_with_known_name() {
        assert_eq!(
            leaf(b"\x06\x09\x2A\x86\x48\x86\xF7\x0D\x01\x01\x01"),
            "1.2.840.113549.1.1.1 pkcs-1(1) rsaEncryption(1)"
        );
    }

    #[test]
    fn oid_with_unknown_name() {
        // 2.999.3 is nothing the table knows: the name stays empty.
        assert_eq!(leaf(b"\x06\x03\x88\x37\x03"), "2.999.3 ");
    }

    #[test]
    fn oid_malformed_is_not_fatal() {
        assert!(uninterpreted(b"\x06\x02\x2A\x86"));
        assert!(uninterpreted(b"\x06\x00"));
    }

    #[test]
    fn character_strings() {
        assert_eq!(leaf(b"\x13\x02OK"), "OK");
        assert_eq!(leaf(b"\x16\x03a@b"), "a@b");
        assert_eq!(leaf(b"\x12\x03\x31\x20\x32"), "1 2");
        assert_eq!(leaf(b"\x0C\x02\xC3\xA9"), "\u{e9}");
    }

    #[test]
    fn character_string_violations_are_fatal() {
        assert_eq!(
            fatal(b"\x13\x01@").to_string(),
            "PRINTABLE STRING content contains characters not allowed \
             in a PrintableString"
        );
        assert!(interpret(
            &Element::take_from(b"\x16\x01\xFF").unwrap().0, names::lookup
        ).is_err());
        assert!(interpret(
            &Element::take_from(b"\x12\x01a").unwrap().0, names::lookup
        ).is_err());
        assert!(interpret(
            &Element::take_from(b"\x0C\x02\xC3\x28").unwrap().0,
            names::lookup
        ).is_err());
    }

    #[test]
    fn time_values() {
        assert_eq!(
            leaf(b"\x17\x0D230102030405Z"), "2023-01-02 03:04:05 +00:00"
        );
        assert_eq!(
            leaf(b"\x18\x0F20230102030405Z"), "2023-01-02 03:04:05 +00:00"
        );
        assert!(fatal(b"\x17\x03abc").to_string().contains("UTCTime"));
    }

    #[test]
    fn booleans() {
        assert_eq!(leaf(b"\x01\x01\xFF"), "true");
        assert_eq!(leaf(b"\x01\x01\x00"), "false");
        assert!(uninterpreted(b"\x01\x01\x01"));
        assert!(uninterpreted(b"\x01\x02\x00\x00"));
    }

    #[test]
    fn integers() {
        assert_eq!(leaf(b"\x02\x01\x01"), "1");
        assert_eq!(leaf(b"\x02\x02\x30\x39"), "12345");
        assert!(uninterpreted(b"\x02\x00"));
    }

    #[test]
    fn integer_size_bound() {
        // 24 content octets still render as decimal.
        let mut data = vec![0x02, 24, 0x01];
        data.extend_from_slice(&[0; 23]);
        let (element, _) = Element::take_from(&data).unwrap();
        assert!(interpret(&element, names::lookup).unwrap().is_some());

        // 30 content octets fall back to the hex dump.
        let mut data = vec![0x02, 30, 0x01];
        data.extend_from_slice(&[0; 29]);
        let (element, _) = Element::take_from(&data).unwrap();
        assert!(interpret(&element, names::lookup).unwrap().is_none());
    }

    #[test]
    fn other_universal_tags() {
        assert!(uninterpreted(b"\x05\x00"));
        assert!(uninterpreted(b"\x04\x03abc"));
    }

    #[test]
    fn non_universal_classes() {
        assert!(uninterpreted(b"\x80\x01\xFF"));
        assert!(uninterpreted(b"\xC1\x02OK"));
    }
}
