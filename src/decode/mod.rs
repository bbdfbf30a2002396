//! Decoding of TLV elements.
//!
//! This module provides [`Element`], a single tag-length-value element
//! decoded from the head of a byte buffer, the [`is_valid`] probe testing
//! whether a buffer is entirely made up of well-formed elements, and the
//! [`Error`] type describing malformed encodings.

pub use self::element::{is_valid, Element};
pub use self::error::{ContentError, Error};

mod element;
mod error;
