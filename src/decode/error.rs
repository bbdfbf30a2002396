//! Error handling.
//!
//! This is a private module. Its public content is re-exported by the
//! parent module.

use std::{error, fmt};
use bytes::Bytes;


//------------ ContentError --------------------------------------------------

/// A reason why data did not conform with the encoding rules.
///
/// This type only describes what was wrong. The full [`Error`] type places
/// the reason within the decoded buffer.
#[derive(Clone, Copy, Debug)]
pub struct ContentError(&'static str);

impl ContentError {
    /// The error for running out of octets mid-element.
    pub(crate) const UNEXPECTED_END: Self = Self::from_static(
        "unexpected end of data"
    );

    /// Creates a content error from a static string.
    pub(crate) const fn from_static(msg: &'static str) -> Self {
        Self(msg)
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl error::Error for ContentError { }


//------------ Error ---------------------------------------------------------

/// An error happened while decoding a TLV element.
///
/// The error keeps the reason, the octet offset into the buffer handed to
/// the failing decode call, and an owned copy of the buffer's undecoded
/// remainder so it can be shown for diagnosis after the borrowed input is
/// gone.
#[derive(Clone, Debug)]
pub struct Error {
    /// The reason the encoding was rejected.
    content: ContentError,

    /// The octet offset of the rejected element.
    pos: usize,

    /// The undecoded remainder of the buffer.
    remainder: Bytes,
}

impl Error {
    /// Creates a new error.
    pub(crate) fn new(
        content: ContentError, pos: usize, remainder: &[u8]
    ) -> Self {
        Self {
            content,
            pos,
            remainder: Bytes::copy_from_slice(remainder),
        }
    }

    /// Returns the reason the encoding was rejected.
    pub fn content(&self) -> ContentError {
        self.content
    }

    /// Returns the octet offset of the rejected element.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the octets that remained undecoded.
    pub fn remainder(&self) -> &[u8] {
        self.remainder.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "malformed encoding at octet {}: {}", self.pos, self.content)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.content)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = Error::new(ContentError::UNEXPECTED_END, 4, b"\x02\x05");
        assert_eq!(
            err.to_string(),
            "malformed encoding at octet 4: unexpected end of data"
        );
        assert_eq!(err.remainder(), b"\x02\x05");
        assert_eq!(err.pos(), 4);
    }
}
