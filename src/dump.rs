//! Walking and rendering the element tree.
//!
//! [`Dumper`] drives the whole rendering: it decodes one element after
//! another from the current buffer, labels each with its tag name and
//! content length, and then either recurses into constructed content,
//! recurses into byte strings that turn out to carry encoded elements
//! themselves, prints an interpreted leaf value, or falls back to a hex
//! dump.

use std::{error, fmt, io};
use crate::decode::{is_valid, Element};
use crate::hexdump::HexDump;
use crate::ident::{Class, Tag};
use crate::interp::{self, Unrepresentable};
use crate::names::{self, NameLookup};


/// The number of octets per hex dump line.
const HEX_WIDTH: usize = 32;

/// The default width of the field name column.
const DEFAULT_WIDTH: usize = 48;

/// The default limit on nesting depth.
const DEFAULT_MAX_DEPTH: usize = 64;


//------------ Dumper --------------------------------------------------------

/// Renders the TLV structure of a byte buffer as indented text.
///
/// A value carries the configuration for a walk: the width of the field
/// name column, the limit on nesting depth, and the function used to look
/// up display names for object identifiers. All of them are fixed once the
/// walk starts.
#[derive(Clone, Copy, Debug)]
pub struct Dumper {
    /// The width of the field name column.
    width: usize,

    /// The maximum nesting depth.
    max_depth: usize,

    /// The object identifier name lookup.
    lookup: NameLookup,
}

impl Dumper {
    /// Creates a dumper with the default configuration.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
            lookup: names::lookup,
        }
    }

    /// Sets the width of the field name column.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the object identifier name lookup.
    pub fn with_lookup(mut self, lookup: NameLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Walks the elements encoded in `data`, writing the rendering to
    /// `out`.
    ///
    /// Processing of a buffer stops at its first malformed element. That
    /// error and the undecoded remainder are reported through the logging
    /// facade and everything rendered so far stands, so a truncated or
    /// damaged file still yields the readable part of its structure.
    pub fn dump<W: io::Write>(
        &self, data: &[u8], out: &mut W
    ) -> Result<(), Error> {
        self.walk(data, 0, out)
    }

    /// Walks one buffer at the given nesting depth.
    fn walk<W: io::Write>(
        &self, data: &[u8], depth: usize, out: &mut W
    ) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(())
        }
        if depth > self.max_depth {
            return Err(Error::DepthExceeded { depth })
        }
        let prefix = "| ".repeat(depth);
        let mut data = data;
        loop {
            let (element, rest) = match Element::take_from(data) {
                Ok(some) => some,
                Err(err) => {
                    log::error!("{}", err);
                    log::error!(
                        "undecoded remainder: {}",
                        HexDump::new(err.remainder(), "", 0, 0)
                    );
                    return Ok(())
                }
            };
            data = rest;

            let label = format!(
                "{}{} ({} bytes)", prefix, element.tag(), element.len()
            );
            write!(out, "\n{:<width$.width$}: ", label, width = self.width)?;

            self.render(&element, &prefix, depth, out)?;

            // A single stray line feed left over from input preparation
            // ends the buffer as well.
            if data.is_empty() || matches!(data, [b'\n']) {
                break
            }
        }
        Ok(())
    }

    /// Renders the value of one element.
    fn render<W: io::Write>(
        &self, element: &Element, prefix: &str, depth: usize, out: &mut W
    ) -> Result<(), Error> {
        let content = element.content();
        if element.is_constructed() {
            return self.walk(content, depth + 1, out)
        }
        if element.tag() == Tag::BIT_STRING
            && content.len() > 2
            && content[0] == 0
            && is_valid(&content[1..])
        {
            // Encoded elements behind the unused bits octet of a bit
            // string, the way public keys usually are.
            self.dump_hex(content, prefix, out)?;
            return self.walk(&content[1..], depth + 1, out)
        }
        if (!matches!(element.class(), Class::Universal)
                || element.tag() == Tag::OCTET_STRING)
            && content.len() > 1
            && is_valid(content)
        {
            // Encoded elements inside an opaque payload. This is a display
            // heuristic: an application-defined value may well parse as
            // TLV by coincidence and get shown as structure.
            self.dump_hex(content, prefix, out)?;
            return self.walk(content, depth + 1, out)
        }
        match interp::interpret(element, self.lookup)? {
            Some(value) => write!(out, "{}", value)?,
            None => self.dump_hex(content, prefix, out)?,
        }
        Ok(())
    }

    /// Writes the hex dump of content octets aligned to the value column.
    fn dump_hex<W: io::Write>(
        &self, content: &[u8], prefix: &str, out: &mut W
    ) -> Result<(), io::Error> {
        write!(
            out, "{}",
            HexDump::new(content, prefix, HEX_WIDTH, self.width + 1)
        )
    }
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new()
    }
}


//------------ Error ---------------------------------------------------------

/// An error that ends a walk early.
#[derive(Debug)]
pub enum Error {
    /// A leaf value's content violated its declared representation.
    Unrepresentable(Unrepresentable),

    /// The input was nested deeper than the configured limit.
    DepthExceeded {
        depth: usize,
    },

    /// Writing to the output stream failed.
    Io(io::Error),
}

impl From<Unrepresentable> for Error {
    fn from(err: Unrepresentable) -> Self {
        Self::Unrepresentable(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unrepresentable(err) => err.fmt(f),
            Self::DepthExceeded { depth } => {
                write!(
                    f, "nesting depth {} exceeds the configured maximum",
                    depth
                )
            }
            Self::Io(err) => write!(f, "writing output failed: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Unrepresentable(err) => Some(err),
            Self::DepthExceeded { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}


//============ Tests =========================================================
