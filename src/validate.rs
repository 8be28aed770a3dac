//! Input validation rules.
//!
//! Each rule is a plain function returning the first violated constraint as an [`Error`]. The
//! typed options and the dynamic `json` layer share these rules, so both report identical
//! messages for identical mistakes.

use crate::error::{Error, Field, Result};

/// Exclusive peers of a key object.
pub(crate) const KEY_PEERS: &str = "string, hex";
/// Exclusive peers of a counter object.
pub(crate) const COUNTER_PEERS: &str = "int, hex";
/// Allowed digest algorithm names.
pub(crate) const ALGORITHMS: &str = "sha1, sha256, sha512";

/// Largest fixed truncation offset.
///
/// The truncation window is four bytes wide, so offset 15 touches byte 18 at most, which lies
/// within even the shortest (20-byte) digest.
pub const MAX_TRUNCATION_OFFSET: u8 = 15;
/// Smallest TOTP time step, in seconds.
pub const MIN_TIME_STEP: u64 = 1;
/// A counter holds eight bytes, or sixteen hex digits.
pub const MAX_COUNTER_HEX_DIGITS: usize = 16;

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

pub(crate) fn non_empty(field: Field, s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(Error::Empty(field));
    }
    Ok(())
}

/// A key given in hex must be a non-empty, even-length run of hex digits.
pub(crate) fn key_hex(s: &str) -> Result<()> {
    non_empty(Field::Key, s)?;
    if s.len() % 2 != 0 || !is_hex(s) {
        return Err(Error::Pattern(Field::Key));
    }
    Ok(())
}

/// A counter given in hex must be between one and sixteen hex digits; odd lengths are allowed.
pub(crate) fn counter_hex(s: &str) -> Result<()> {
    non_empty(Field::Opt, s)?;
    if s.len() > MAX_COUNTER_HEX_DIGITS || !is_hex(s) {
        return Err(Error::Pattern(Field::Opt));
    }
    Ok(())
}

pub(crate) fn at_least(field: Field, value: u64, min: u64) -> Result<()> {
    if value < min {
        return Err(Error::TooSmall { field, min });
    }
    Ok(())
}

pub(crate) fn at_most(field: Field, value: u64, max: u64) -> Result<()> {
    if value > max {
        return Err(Error::TooLarge { field, max });
    }
    Ok(())
}

pub(crate) fn truncation_offset(offset: Option<u8>) -> Result<Option<u8>> {
    if let Some(offset) = offset {
        at_most(Field::Opt, offset.into(), MAX_TRUNCATION_OFFSET.into())?;
    }
    Ok(offset)
}

/// Time steps may be fractional, but never below one second. NaN is rejected as well.
pub(crate) fn time_step(step: f64) -> Result<f64> {
    if !(step >= MIN_TIME_STEP as f64) {
        return Err(Error::TooSmall {
            field: Field::Opt,
            min: MIN_TIME_STEP,
        });
    }
    Ok(step)
}

pub(crate) fn timestamp(seconds: f64) -> Result<f64> {
    if !(seconds >= 0.0) {
        return Err(Error::TooSmall {
            field: Field::Opt,
            min: 0,
        });
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_hex_rules() {
        assert_eq!(key_hex(""), Err(Error::Empty(Field::Key)));
        assert_eq!(key_hex("A"), Err(Error::Pattern(Field::Key)));
        assert_eq!(key_hex("zz"), Err(Error::Pattern(Field::Key)));
        assert_eq!(key_hex("0aF3"), Ok(()));
    }

    #[test]
    fn counter_hex_rules() {
        assert_eq!(counter_hex(""), Err(Error::Empty(Field::Opt)));
        assert_eq!(
            counter_hex("00000000000000000"),
            Err(Error::Pattern(Field::Opt))
        );
        assert_eq!(counter_hex("g"), Err(Error::Pattern(Field::Opt)));
        assert_eq!(counter_hex("1"), Ok(()));
        assert_eq!(counter_hex("ffffffffffffffff"), Ok(()));
    }

    #[test]
    fn truncation_offset_bounds() {
        assert_eq!(truncation_offset(None), Ok(None));
        assert_eq!(truncation_offset(Some(15)), Ok(Some(15)));
        assert_eq!(
            truncation_offset(Some(16)),
            Err(Error::TooLarge {
                field: Field::Opt,
                max: 15
            })
        );
    }

    #[test]
    fn time_step_must_be_positive() {
        assert_eq!(
            time_step(0.0),
            Err(Error::TooSmall {
                field: Field::Opt,
                min: 1
            })
        );
        assert!(time_step(0.5).is_err());
        assert!(time_step(f64::NAN).is_err());
        assert_eq!(time_step(30.0), Ok(30.0));
        assert_eq!(time_step(1.5), Ok(1.5));
    }

    #[test]
    fn timestamp_must_not_be_negative() {
        assert_eq!(
            timestamp(-1.0),
            Err(Error::TooSmall {
                field: Field::Opt,
                min: 0
            })
        );
        assert_eq!(timestamp(0.0), Ok(0.0));
        assert_eq!(timestamp(59.9), Ok(59.9));
    }
}
