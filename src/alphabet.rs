//! The four-letter alphabet targets and units are written in.
//!
//! Input bytes are upper-cased before validation, so `acgt` parses the same as
//! `ACGT`. Anything else is rejected with its position.

use std::fmt;

use crate::error::AssemblyError;

/// One nucleotide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    A = b'A',
    C = b'C',
    G = b'G',
    T = b'T',
}

impl Symbol {
    /// All symbols in alphabetical order.
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::C, Symbol::G, Symbol::T];

    /// Parse a single byte; `position` is only used for the error.
    pub fn from_byte(byte: u8, position: usize) -> Result<Self, AssemblyError> {
        match byte.to_ascii_uppercase() {
            b'A' => Ok(Symbol::A),
            b'C' => Ok(Symbol::C),
            b'G' => Ok(Symbol::G),
            b'T' => Ok(Symbol::T),
            _ => Err(AssemblyError::InvalidSymbol { byte, position }),
        }
    }

    /// Upper-case ASCII byte for this symbol.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Watson-Crick partner.
    pub fn complement(self) -> Self {
        match self {
            Symbol::A => Symbol::T,
            Symbol::C => Symbol::G,
            Symbol::G => Symbol::C,
            Symbol::T => Symbol::A,
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = AssemblyError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Symbol::from_byte(byte, 0)
    }
}

impl TryFrom<char> for Symbol {
    type Error = AssemblyError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        // Non-ASCII chars are reported by their leading UTF-8 byte.
        let mut buf = [0u8; 4];
        Symbol::from_byte(ch.encode_utf8(&mut buf).as_bytes()[0], 0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.as_byte()))
    }
}

/// Parse a whole sequence, failing on the first byte outside the alphabet.
pub fn parse_sequence(bytes: &[u8]) -> Result<Vec<Symbol>, AssemblyError> {
    bytes
        .iter()
        .enumerate()
        .map(|(pos, &b)| Symbol::from_byte(b, pos))
        .collect()
}

/// Render symbols back to an upper-case string.
pub fn to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| char::from(s.as_byte())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_cases() {
        let seq = parse_sequence(b"AcGt").unwrap();
        assert_eq!(seq, vec![Symbol::A, Symbol::C, Symbol::G, Symbol::T]);
        assert_eq!(to_string(&seq), "ACGT");
    }

    #[test]
    fn rejects_first_invalid_byte_with_position() {
        let err = parse_sequence(b"ACNGU").unwrap_err();
        assert_eq!(
            err,
            AssemblyError::InvalidSymbol {
                byte: b'N',
                position: 2
            }
        );
    }

    #[test]
    fn rejects_rna_and_iupac_codes() {
        for &b in b"UNRYSWKMBDHV- " {
            assert!(Symbol::try_from(b).is_err(), "accepted {}", b as char);
        }
    }

    #[test]
    fn non_ascii_char_is_invalid() {
        assert!(Symbol::try_from('Å').is_err());
        assert_eq!(Symbol::try_from('g').unwrap(), Symbol::G);
    }

    #[test]
    fn complement_is_an_involution() {
        for s in Symbol::ALL {
            assert_ne!(s.complement(), s);
            assert_eq!(s.complement().complement(), s);
        }
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(parse_sequence(b"").unwrap().is_empty());
    }
}
