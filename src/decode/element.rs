//! A single TLV element.
//!
//! This is a private module. Its public content is re-exported by the
//! parent module.

use crate::ident::{Class, Tag};
use crate::length;
use super::error::{ContentError, Error};


//------------ Element -------------------------------------------------------

/// One TLV element decoded from the head of a byte buffer.
///
/// An element borrows its content octets from the buffer it was decoded
/// from. It is a transient view: the walker classifies and renders it and
/// moves on, it never outlives the buffer.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    /// The tag of the element.
    tag: Tag,

    /// Whether the content is a concatenation of further elements.
    constructed: bool,

    /// The content octets.
    content: &'a [u8],
}

impl<'a> Element<'a> {
    /// Decodes one element from the beginning of `data`.
    ///
    /// On success returns the element and the remainder of `data` following
    /// it. The remainder picks up exactly where the element's octets end.
    ///
    /// Decoding a non-empty buffer either produces an element or fails with
    /// a malformed encoding error; it never quietly produces nothing.
    pub fn take_from(data: &'a [u8]) -> Result<(Self, &'a [u8]), Error> {
        let (tag, constructed, rest) = Tag::take_from(data).map_err(|err| {
            Error::new(err, 0, data)
        })?;
        let pos = data.len() - rest.len();
        let (len, rest) = length::take_from(rest).map_err(|err| {
            Error::new(err, pos, data)
        })?;
        if rest.len() < len {
            let pos = data.len() - rest.len();
            return Err(Error::new(
                ContentError::from_static("length exceeds available data"),
                pos, data,
            ))
        }
        let (content, rest) = rest.split_at(len);
        Ok((Self { tag, constructed, content }, rest))
    }

    /// Returns the tag of the element.
    pub fn tag(self) -> Tag {
        self.tag
    }

    /// Returns the class of the element's tag.
    pub fn class(self) -> Class {
        self.tag.class()
    }

    /// Returns whether the content is constructed.
    pub fn is_constructed(self) -> bool {
        self.constructed
    }

    /// Returns the content octets.
    pub fn content(self) -> &'a [u8] {
        self.content
    }

    /// Returns the number of content octets.
    pub fn len(self) -> usize {
        self.content.len()
    }

    /// Returns whether the element has no content octets.
    pub fn is_empty(self) -> bool {
        self.content.is_empty()
    }
}


//------------ is_valid ------------------------------------------------------

/// Returns whether `data` is entirely made up of well-formed elements.
///
/// The empty buffer is not considered valid: this probe only ever tests
/// candidate payloads for nested structure and an empty payload has none.
///
/// This is a heuristic discriminator. Accepted buffers are decoded again
/// when the walker recurses into them, which is fine since they are bounded
/// by the surrounding element.
pub fn is_valid(data: &[u8]) -> bool {
    if data.is_empty() {
        return false
    }
    let mut data = data;
    while !data.is_empty() {
        match Element::take_from(data) {
            Ok((_, rest)) => data = rest,
            Err(_) => return false,
        }
    }
    true
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn take_from_splits_exactly() {
        let data = b"\x02\x01\x2A\x05\x00";
        let (elem, rest) = Element::take_from(data).unwrap();
        assert_eq!(elem.tag(), Tag::INTEGER);
        assert!(!elem.is_constructed());
        assert_eq!(elem.content(), b"\x2A");
        assert_eq!(elem.len(), 1);
        assert_eq!(rest, b"\x05\x00");

        let (elem, rest) = Element::take_from(rest).unwrap();
        assert_eq!(elem.tag(), Tag::NULL);
        assert!(elem.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn take_from_constructed() {
        let data = b"\x30\x03\x02\x01\x00";
        let (elem, rest) = Element::take_from(data).unwrap();
        assert_eq!(elem.tag(), Tag::SEQUENCE);
        assert!(elem.is_constructed());
        assert_eq!(elem.content(), b"\x02\x01\x00");
        assert!(rest.is_empty());
    }

    #[test]
    fn take_from_empty() {
        let err = Element::take_from(b"").unwrap_err();
        assert_eq!(err.pos(), 0);
        assert!(err.remainder().is_empty());
    }

    #[test]
    fn take_from_truncated_header() {
        assert!(Element::take_from(b"\x30").is_err());
        assert!(Element::take_from(b"\x30\x82\x01").is_err());
    }

    #[test]
    fn take_from_overlong_length() {
        // Claims four content octets, provides two.
        let err = Element::take_from(b"\x04\x04\xAB\xCD").unwrap_err();
        assert_eq!(err.pos(), 2);
        assert_eq!(err.remainder(), b"\x04\x04\xAB\xCD");
    }

    #[test]
    fn valid_probe() {
        assert!(!is_valid(b""));
        assert!(is_valid(b"\x02\x01\x00"));
        assert!(is_valid(b"\x02\x01\x00\x05\x00"));
        assert!(!is_valid(b"\x02\x01"));
        assert!(!is_valid(b"\x02\x01\x00\xFF"));
    }
}
