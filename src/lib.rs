//! Dumping the structure of data encoded in BER or DER.
//!
//! Data encoded according to the Basic or Distinguished Encoding Rules is
//! a tree of tag-length-value elements. This crate decodes such data
//! without knowing anything about the schema behind it and renders the
//! tree as indented text: constructed values become nested sections,
//! well-known primitive values are shown with their meaning, and anything
//! else is hex dumped. Byte strings that happen to carry encoded elements
//! themselves, the way certificates bury keys and extensions, are detected
//! and descended into.
//!
//! The usual entry point is [`Dumper`]:
//!
//! ```
//! use derdump::Dumper;
//!
//! let mut out = Vec::new();
//! Dumper::new().dump(b"\x30\x03\x02\x01\x2A", &mut out).unwrap();
//! ```
//!
//! The accompanying `derdump` binary reads a file or standard input and
//! writes the rendering to standard output.

pub use self::decode::Element;
pub use self::dump::Dumper;
pub use self::ident::{Class, Tag};

pub mod decode;
pub mod dump;
pub mod hexdump;
pub mod ident;
pub mod int;
pub mod interp;
pub mod names;
pub mod oid;
pub mod time;

mod length;
