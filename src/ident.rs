//! The identifier octets of a BER encoded value.
//!
//! Every encoded value starts with a sequence of identifier octets that
//! provide the tag of the value and state whether its content is primitive
//! or constructed. This module provides the [`Class`] and [`Tag`] types
//! decoded from these octets as well as the standard display names used
//! when labeling decoded fields.

use std::fmt;
use crate::decode::ContentError;


//------------ Class ---------------------------------------------------------

/// The class of a tag.
///
/// Tags live in one of four namespaces determined by the top two bits of
/// the first identifier octet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

impl Class {
    /// Returns the class encoded in the first identifier octet.
    const fn from_u8(octet: u8) -> Self {
        match octet & 0xC0 {
            0x00 => Self::Universal,
            0x40 => Self::Application,
            0x80 => Self::Context,
            _ => Self::Private,
        }
    }
}


//------------ Tag -----------------------------------------------------------

/// The tag of a value.
///
/// A tag consists of a [`Class`] and a number within that class. For the
/// universal class the number selects one of the standard ASN.1 types; for
/// the other classes it is an application-defined value.
///
/// The `Display` implementation produces the conventional name of the tag:
/// the type name for well-known universal tags and a bracketed form such as
/// `[APPLICATION 3]` or `[0]` otherwise.
///
/// # Limitations
///
/// Only tag numbers that fit into a `u32` are supported. This should be
/// more than enough in practice.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tag {
    /// The class of the tag.
    class: Class,

    /// The number of the tag within its class.
    number: u32,
}

/// # Constants for universal tags.
///
/// See clause 8.4 of ITU Recommendation X.690.
///
impl Tag {
    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::universal(1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::universal(2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::universal(3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::universal(4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::universal(5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::universal(6);

    /// The tag for the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Self::universal(10);

    /// The tag for the UTF8String type, UNIVERSAL 12.
    pub const UTF8_STRING: Self = Self::universal(12);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::universal(16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::universal(17);

    /// The tag for the NumericString type, UNIVERSAL 18.
    pub const NUMERIC_STRING: Self = Self::universal(18);

    /// The tag for the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Self::universal(19);

    /// The tag for the TeletexString type, UNIVERSAL 20.
    pub const T61_STRING: Self = Self::universal(20);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Self::universal(22);

    /// The tag for the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Self::universal(23);

    /// The tag for the GeneralizedTime type, UNIVERSAL 24.
    pub const GENERALIZED_TIME: Self = Self::universal(24);

    /// The tag for the GeneralString type, UNIVERSAL 27.
    pub const GENERAL_STRING: Self = Self::universal(27);
}

impl Tag {
    /// Creates a tag from a class and a number.
    pub const fn new(class: Class, number: u32) -> Self {
        Self { class, number }
    }

    /// Creates a tag in the universal class with the given number.
    pub const fn universal(number: u32) -> Self {
        Self::new(Class::Universal, number)
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        self.class
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Returns whether the tag is of the universal class.
    pub const fn is_universal(self) -> bool {
        matches!(self.class, Class::Universal)
    }

    /// Takes the identifier octets from the beginning of `data`.
    ///
    /// Upon success, returns the tag, whether the value is constructed, and
    /// the remainder of `data` following the identifier octets.
    ///
    /// Tag numbers are encoded in one of two forms: numbers up to 30 live
    /// in the lower five bits of the first octet, while larger numbers set
    /// all five bits and follow in base 128 with the uppermost bit of each
    /// octet marking continuation.
    pub fn take_from(data: &[u8]) -> Result<(Self, bool, &[u8]), ContentError> {
        let (&first, mut data) = match data.split_first() {
            Some(some) => some,
            None => return Err(ContentError::UNEXPECTED_END),
        };
        let class = Class::from_u8(first);
        let constructed = first & 0x20 != 0;
        if first & 0x1F != 0x1F {
            return Ok((
                Self::new(class, u32::from(first & 0x1F)), constructed, data
            ))
        }
        let mut number = 0u32;
        loop {
            let (&octet, rest) = match data.split_first() {
                Some(some) => some,
                None => return Err(ContentError::UNEXPECTED_END),
            };
            data = rest;
            if number > u32::MAX >> 7 {
                return Err(ContentError::from_static("tag number too large"))
            }
            number = number << 7 | u32::from(octet & 0x7F);
            if octet & 0x80 == 0 {
                return Ok((Self::new(class, number), constructed, data))
            }
        }
    }
}


//--- Display

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => f.write_str("BOOLEAN"),
            Tag::INTEGER => f.write_str("INTEGER"),
            Tag::BIT_STRING => f.write_str("BIT STRING"),
            Tag::OCTET_STRING => f.write_str("OCTET STRING"),
            Tag::NULL => f.write_str("NULL"),
            Tag::OID => f.write_str("OBJECT IDENTIFIER"),
            Tag::ENUMERATED => f.write_str("ENUM"),
            Tag::UTF8_STRING => f.write_str("UTF8 STRING"),
            Tag::SEQUENCE => f.write_str("SEQUENCE"),
            Tag::SET => f.write_str("SET"),
            Tag::NUMERIC_STRING => f.write_str("NUMERIC STRING"),
            Tag::PRINTABLE_STRING => f.write_str("PRINTABLE STRING"),
            Tag::T61_STRING => f.write_str("T61String"),
            Tag::IA5_STRING => f.write_str("IA5String"),
            Tag::UTC_TIME => f.write_str("UTCTime"),
            Tag::GENERALIZED_TIME => f.write_str("GeneralizedTime"),
            Tag::GENERAL_STRING => f.write_str("GENERAL STRING"),
            tag => {
                match tag.class {
                    Class::Universal => {
                        write!(f, "[UNIVERSAL {}]", tag.number)
                    }
                    Class::Application => {
                        write!(f, "[APPLICATION {}]", tag.number)
                    }
                    Class::Context => write!(f, "[{}]", tag.number),
                    Class::Private => write!(f, "[PRIVATE {}]", tag.number),
                }
            }
        }
    }
}


//============ Tests =========================================================
