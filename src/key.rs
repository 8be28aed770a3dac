//! Shared secrets.

use crate::error::{Error, Field, Result};
use crate::validate;

/// Shared secret.
///
/// As per [RFC 4226][4226], "each HOTP generator has a different and unique secret." A secret is
/// supplied either as text or as a hex string; the two forms are exclusive.
///
/// [4226]: https://tools.ietf.org/html/rfc4226
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    /// Text, encoded with one byte per character.
    Text(String),
    /// An even-length string of hex digits, decoded pairwise.
    Hex(String),
}

impl Key {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Key::Text(text.into())
    }

    pub fn hex<S: Into<String>>(hex: S) -> Self {
        Key::Hex(hex.into())
    }

    /// Resolves the secret to the bytes used as the HMAC key.
    ///
    /// Text keys contribute one byte per character: each UTF-16 code unit is reduced to its low
    /// byte. ASCII text therefore maps to its ASCII bytes.
    ///
    /// # Errors
    ///
    /// Fails if the secret is empty, or if a hex secret has odd length or non-hex characters.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Key::Text(text) => {
                validate::non_empty(Field::Key, text)?;
                Ok(text.encode_utf16().map(|unit| unit as u8).collect())
            }
            Key::Hex(digits) => {
                validate::key_hex(digits)?;
                hex::decode(digits).map_err(|_| Error::Pattern(Field::Key))
            }
        }
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::text(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::Text(text)
    }
}
