//! BER encoded integers.
//!
//! An INTEGER value's content octets are a variable length, big-endian,
//! two's complement byte sequence. This module provides [`Integer`], a view
//! of such content that renders the decimal form without a fixed-width
//! native integer limiting the range.

use std::fmt;
use smallvec::SmallVec;


//------------ Integer -------------------------------------------------------

/// A view of the content octets of an INTEGER value.
///
/// The `Display` implementation produces the decimal form. The most
/// significant bit of the first content octet is the sign bit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Integer<'a>(&'a [u8]);

impl<'a> Integer<'a> {
    /// Creates an integer view if `content` is non-empty.
    ///
    /// An INTEGER value has at least one content octet. Whether the
    /// encoding is minimal is not checked.
    pub fn new(content: &'a [u8]) -> Option<Self> {
        if content.is_empty() {
            None
        }
        else {
            Some(Self(content))
        }
    }

    /// Returns whether the value is negative.
    pub fn is_negative(&self) -> bool {
        self.0[0] & 0x80 != 0
    }

    /// Returns the magnitude of the value as big-endian octets.
    ///
    /// For a negative value this is the two's complement of the content.
    fn magnitude(&self) -> SmallVec<[u8; 24]> {
        let mut res: SmallVec<[u8; 24]> = self.0.into();
        if self.is_negative() {
            for octet in res.iter_mut() {
                *octet = !*octet;
            }
            for octet in res.iter_mut().rev() {
                let (sum, overflow) = octet.overflowing_add(1);
                *octet = sum;
                if !overflow {
                    break
                }
            }
        }
        res
    }
}


//--- Display

impl<'a> fmt::Display for Integer<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Little-endian decimal digits of the magnitude, built by
        // multiply-and-add over the octets.
        let mut digits: SmallVec<[u8; 64]> = SmallVec::new();
        digits.push(0);
        for &octet in self.magnitude().iter() {
            let mut carry = u32::from(octet);
            for digit in digits.iter_mut() {
                let value = u32::from(*digit) * 256 + carry;
                *digit = (value % 10) as u8;
                carry = value / 10;
            }
            while carry > 0 {
                digits.push((carry % 10) as u8);
                carry /= 10;
            }
        }
        while digits.len() > 1 && *digits.last().unwrap() == 0 {
            digits.pop();
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        for &digit in digits.iter().rev() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}


//============ Tests =========================================================
