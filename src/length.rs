//! Validated code lengths.

use core::convert::TryFrom;

use crate::error::{Error, Field};
use crate::validate::{at_least, at_most};

/// Number of decimal digits in a code, excluding any checksum digit.
///
/// [RFC 4226][4226] asks for at least six digits and its reference implementation accepts up to
/// ten. Since the truncated value never exceeds 2^31 - 1, a ten-digit code already carries the
/// full value; lengths below six are allowed for callers with their own constraints.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Length(u8);

impl Length {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 6;

    /// The number of digits.
    pub fn get(self) -> u8 {
        self.0
    }

    /// `10^digits`, the modulus a truncated value is reduced by.
    pub fn modulus(self) -> u64 {
        10_u64.pow(self.0.into())
    }
}

impl Default for Length {
    fn default() -> Self {
        Length(Self::DEFAULT)
    }
}

impl TryFrom<u8> for Length {
    type Error = Error;

    fn try_from(digits: u8) -> Result<Self, Self::Error> {
        at_least(Field::Opt, digits.into(), Self::MIN.into())?;
        at_most(Field::Opt, digits.into(), Self::MAX.into())?;
        Ok(Length(digits))
    }
}

impl From<Length> for u8 {
    fn from(length: Length) -> Self {
        length.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(
            Length::try_from(0),
            Err(Error::TooSmall {
                field: Field::Opt,
                min: 1
            })
        );
        assert_eq!(
            Length::try_from(11),
            Err(Error::TooLarge {
                field: Field::Opt,
                max: 10
            })
        );
        assert_eq!(Length::try_from(10).map(Length::modulus), Ok(10_000_000_000));
        assert_eq!(Length::default().get(), 6);
    }
}
