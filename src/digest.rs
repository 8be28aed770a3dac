//! HMAC digest types and traits.

use core::fmt;
use core::str::FromStr;

use ring::hmac::{
    sign, Algorithm as HmacAlgorithm, Key as HmacKey, Tag, HMAC_SHA1_FOR_LEGACY_USE_ONLY,
    HMAC_SHA256, HMAC_SHA512,
};

use crate::error::{Error, Field};
use crate::validate::{self, ALGORITHMS};

/// HMAC hash function.
///
/// [RFC 4226][4226] prescribes HMAC-SHA1, which is what HOTP always uses. [RFC 6238][6238]
/// extends TOTP to HMAC-SHA256 and HMAC-SHA512.
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        self.hmac().digest_algorithm().output_len()
    }

    fn hmac(self) -> HmacAlgorithm {
        match self {
            Algorithm::Sha1 => HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Algorithm::Sha256 => HMAC_SHA256,
            Algorithm::Sha512 => HMAC_SHA512,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Sha1
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        validate::non_empty(Field::Opt, name)?;
        match name {
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(Error::NotAllowed {
                field: Field::Opt,
                allowed: ALGORITHMS,
            }),
        }
    }
}

/// Dynamic truncation over a digest.
///
/// Implemented for [`HmacDigest`] and for raw byte arrays, so that published digests can be
/// truncated directly.
///
/// # Notes
///
/// Implementors should take care that their digests are always at least 19 bytes long, or
/// [`Digest::truncate` will panic](#panics). All three supported HMACs produce at least 20.
pub trait Digest: AsRef<[u8]> {
    /// Extract the 31-bit value of [RFC 4226 §5.3][4226].
    ///
    /// With `offset` of `None`, the four lowest-order bits of the last byte select where the
    /// four-byte window starts. A fixed offset selects it directly and must lie in `0..=15`;
    /// only its four lowest-order bits are used.
    ///
    /// [4226]: https://datatracker.ietf.org/doc/html/rfc4226#section-5.3
    ///
    /// # Panics
    ///
    /// Panics if the digest is shorter than 19 bytes.
    fn truncate(&self, offset: Option<u8>) -> u32 {
        let digest = self.as_ref();
        let len = digest.len();
        // Any four-bit offset plus the window must stay in bounds
        assert!(len >= 19);
        let index = match offset {
            Some(offset) => (offset & 0xf) as usize,
            None => (digest[len - 1] & 0xf) as usize,
        };
        let bytes = [
            digest[index],
            digest[index + 1],
            digest[index + 2],
            digest[index + 3],
        ];
        // Strip leading bit to remove signed/unsigned ambiguity
        u32::from_be_bytes(bytes) & 0x7fff_ffff
    }
}

impl<const N: usize> Digest for [u8; N] {}

/// Output of one of the supported HMACs.
#[derive(Clone, Copy, Debug)]
pub struct HmacDigest {
    algorithm: Algorithm,
    tag: Tag,
}

impl HmacDigest {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl AsRef<[u8]> for HmacDigest {
    fn as_ref(&self) -> &[u8] {
        self.tag.as_ref()
    }
}

impl Digest for HmacDigest {}

/// Computes the HMAC of `message` under `key`.
pub fn hmac(algorithm: Algorithm, key: &[u8], message: &[u8]) -> HmacDigest {
    let key = HmacKey::new(algorithm.hmac(), key);
    HmacDigest {
        algorithm,
        tag: sign(&key, message),
    }
}
