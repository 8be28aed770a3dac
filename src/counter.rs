//! Synchronized moving counters.

use crate::error::{Error, Field, Result};
use crate::validate::{self, MAX_COUNTER_HEX_DIGITS};

/// Synchronized moving counter.
///
/// [RFC 4226][4226] describes an "8-byte synchronized moving counter." The counter is given
/// either as an integer or as up to sixteen hex digits, which are read as a big-endian value
/// (so `"1"` and `"0000000000000001"` are the same counter).
///
/// The default counter is zero.
///
/// [4226]: https://tools.ietf.org/html/rfc4226
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Counter {
    Int(u64),
    Hex(String),
}

impl Counter {
    /// The counter as the eight-byte, big-endian HMAC message.
    ///
    /// # Errors
    ///
    /// Fails if a hex counter is empty, longer than sixteen digits, or contains non-hex
    /// characters.
    pub fn to_bytes(&self) -> Result<[u8; 8]> {
        match self {
            Counter::Int(value) => Ok(value.to_be_bytes()),
            Counter::Hex(digits) => {
                validate::counter_hex(digits)?;
                let padded = format!("{:0>width$}", digits, width = MAX_COUNTER_HEX_DIGITS);
                let mut bytes = [0; 8];
                hex::decode_to_slice(padded, &mut bytes).map_err(|_| Error::Pattern(Field::Opt))?;
                Ok(bytes)
            }
        }
    }

    /// The counter as an unsigned integer.
    ///
    /// # Errors
    ///
    /// See [`Counter::to_bytes`].
    pub fn value(&self) -> Result<u64> {
        self.to_bytes().map(u64::from_be_bytes)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::Int(0)
    }
}

impl From<u64> for Counter {
    fn from(value: u64) -> Self {
        Counter::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_big_endian() {
        assert_eq!(Counter::default().to_bytes(), Ok([0; 8]));
        assert_eq!(
            Counter::Int(0x0102_0304_0506_0708).to_bytes(),
            Ok([1, 2, 3, 4, 5, 6, 7, 8])
        );
    }

    #[test]
    fn hex_is_left_padded() {
        assert_eq!(
            Counter::Hex("1".into()).to_bytes(),
            Ok([0, 0, 0, 0, 0, 0, 0, 1])
        );
        assert_eq!(Counter::Hex("abc".into()).value(), Ok(0xabc));
        assert_eq!(
            Counter::Hex("FFFFFFFFFFFFFFFF".into()).value(),
            Ok(u64::max_value())
        );
    }

    #[test]
    fn malformed_hex() {
        assert_eq!(
            Counter::Hex(String::new()).to_bytes(),
            Err(Error::Empty(Field::Opt))
        );
        assert_eq!(
            Counter::Hex("00000000000000000".into()).to_bytes(),
            Err(Error::Pattern(Field::Opt))
        );
        assert_eq!(
            Counter::Hex("xyz".into()).to_bytes(),
            Err(Error::Pattern(Field::Opt))
        );
    }
}
