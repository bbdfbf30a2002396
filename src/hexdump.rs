//! Hexadecimal rendering of content octets.

use std::fmt;


//------------ HexDump -------------------------------------------------------

/// A byte sequence rendered as a width-wrapped hexadecimal dump.
///
/// The octets are written as space-separated upper-case pairs, `width` of
/// them per line. The first line starts at the current cursor; every
/// further line begins with the given prefix padded out to the margin
/// column and a colon, mirroring the layout of the field name column.
///
/// An empty sequence renders as the literal `NUL`.
#[derive(Clone, Copy, Debug)]
pub struct HexDump<'a> {
    /// The octets to render.
    data: &'a [u8],

    /// The prefix continuation lines start with.
    prefix: &'a str,

    /// The number of octets per line.
    width: usize,

    /// The column at which continuation lines resume.
    margin: usize,
}

impl<'a> HexDump<'a> {
    /// Creates a new hex dump rendering.
    ///
    /// A `width` of zero renders everything onto a single line.
    pub fn new(
        data: &'a [u8], prefix: &'a str, width: usize, margin: usize
    ) -> Self {
        Self { data, prefix, width, margin }
    }
}

impl<'a> fmt::Display for HexDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.is_empty() {
            return f.write_str("NUL")
        }
        let width = if self.width == 0 { self.data.len() } else { self.width };
        for (i, chunk) in self.data.chunks(width).enumerate() {
            if i > 0 {
                let pad = self.margin
                    .saturating_sub(1)
                    .saturating_sub(self.prefix.len());
                write!(f, "\n{}{:pad$}: ", self.prefix, "", pad = pad)?;
            }
            for (j, octet) in chunk.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:02X}", octet)?;
            }
        }
        Ok(())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_renders_nul() {
        assert_eq!(HexDump::new(b"", "", 16, 0).to_string(), "NUL");
    }

    #[test]
    fn single_line() {
        assert_eq!(
            HexDump::new(b"\x00\xAB\xFF", "", 16, 0).to_string(),
            "00 AB FF"
        );
    }

    #[test]
    fn wrapping_and_margin() {
        assert_eq!(
            HexDump::new(b"\x01\x02\x03\x04\x05", "| ", 2, 8).to_string(),
            "01 02\n|      : 03 04\n|      : 05"
        );
    }

    #[test]
    fn prefix_longer_than_margin() {
        // The padding saturates instead of panicking.
        assert_eq!(
            HexDump::new(b"\x01\x02", "| | | ", 1, 4).to_string(),
            "01\n| | | : 02"
        );
    }

    #[test]
    fn round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        let rendered = HexDump::new(&data, "| ", 32, 49).to_string();
        let parsed: Vec<u8> = rendered
            .split(|ch: char| ch.is_whitespace() || ch == ':' || ch == '|')
            .filter(|part| !part.is_empty())
            .map(|part| u8::from_str_radix(part, 16).unwrap())
            .collect();
        assert_eq!(parsed, data);
    }
}
