//! Code values and their decimal rendering.

use core::fmt;

use crate::length::Length;

/// Doubled digits with their decimal digits summed, indexed by the original digit.
const DOUBLE_DIGITS: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// A truncated value reduced to a fixed number of decimal digits.
///
/// `Display` renders the value zero-padded to its length; [`Token::code`] optionally appends the
/// checksum digit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    value: u32,
    length: Length,
}

impl Token {
    /// Reduce a 31-bit truncated value modulo `10^length`.
    pub fn new(truncated: u32, length: Length) -> Self {
        let value = u64::from(truncated) % length.modulus();
        Token {
            value: value as u32,
            length,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn length(&self) -> Length {
        self.length
    }

    /// Check digit of [RFC 4226 Appendix C][4226]'s reference implementation.
    ///
    /// Working from the least significant of `length` digits, every other digit (starting with
    /// the first) is doubled and its decimal digits summed. The check digit brings the total up
    /// to a multiple of ten.
    ///
    /// [4226]: https://datatracker.ietf.org/doc/html/rfc4226#appendix-C
    pub fn checksum(&self) -> u8 {
        let mut num = self.value;
        let mut total = 0;
        for position in 0..self.length.get() {
            let digit = num % 10;
            num /= 10;
            total += if position % 2 == 0 {
                DOUBLE_DIGITS[digit as usize]
            } else {
                digit
            };
        }
        ((10 - total % 10) % 10) as u8
    }

    /// The code as handed to users, with or without the trailing checksum digit.
    pub fn code(&self, add_checksum: bool) -> String {
        if add_checksum {
            format!("{}{}", self, self.checksum())
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:01$}", self.value, self.length.get() as usize)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::TryFrom;

    use test_case::test_case;

    use super::*;

    fn length(digits: u8) -> Length {
        Length::try_from(digits).unwrap()
    }

    #[test]
    fn reduces_and_pads() {
        let token = Token::new(0x4c93cf18, length(6));
        assert_eq!(token.value(), 755224);
        assert_eq!(token.to_string(), "755224");
        assert_eq!(Token::new(1_000_042, length(6)).to_string(), "000042");
        assert_eq!(Token::new(0x7fff_ffff, length(10)).to_string(), "2147483647");
        assert_eq!(Token::new(1234, length(1)).to_string(), "4");
    }

    #[test_case(755224, 3)]
    #[test_case(287082, 2)]
    #[test_case(359152, 6)]
    #[test_case(969429, 0)]
    #[test_case(520489, 6)]
    fn rfc_4226_checksums(value: u32, expected: u8) {
        assert_eq!(Token::new(value, length(6)).checksum(), expected);
    }

    #[test]
    fn checksum_counts_leading_zeros() {
        // Only the digits 4 and 2 contribute: 8 + 2 = 10
        let token = Token::new(24, length(8));
        assert_eq!(token.checksum(), 0);
        assert_eq!(token.code(true), "000000240");
    }

    #[test]
    fn code_appends_checksum() {
        let token = Token::new(755224, length(6));
        assert_eq!(token.code(false), "755224");
        assert_eq!(token.code(true), "7552243");
    }
}
