//! Counter-based one-time passwords ([RFC 4226][4226]).
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226

use core::convert::TryFrom;

use log::{debug, trace};

use crate::digest::{hmac, Algorithm, Digest as _};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::length::Length;
use crate::options::HotpOptions;
use crate::token::Token;
use crate::validate;

/// Validated inputs of a single code computation.
pub(crate) struct Params {
    pub(crate) algorithm: Algorithm,
    pub(crate) length: Length,
    pub(crate) add_checksum: bool,
    pub(crate) truncation_offset: Option<u8>,
}

/// Computes the code for an already encoded secret and counter.
pub(crate) fn compute(secret: &[u8], counter: [u8; 8], params: &Params) -> String {
    trace!(
        "computing {}-digit code with HMAC-{} at counter {:#018x}",
        params.length.get(),
        params.algorithm,
        u64::from_be_bytes(counter)
    );
    let digest = hmac(params.algorithm, secret, &counter);
    Token::new(digest.truncate(params.truncation_offset), params.length).code(params.add_checksum)
}

/// Computes an HOTP code.
///
/// The digest is always HMAC-SHA1. All input is validated before any hashing: the key first,
/// then the counter, code length and truncation offset.
///
/// # Errors
///
/// Returns the first violated input constraint.
///
/// # Examples
///
/// ```
/// use rfc_otp::{hotp, HotpOptions, Key};
///
/// let key = Key::text("12345678901234567890");
/// let code = hotp(&key, &HotpOptions::default().with_counter(1)).unwrap();
/// assert_eq!(code, "287082");
/// ```
pub fn hotp(key: &Key, opt: &HotpOptions) -> Result<String> {
    let secret = key.to_bytes().map_err(rejected)?;
    generate(&secret, opt)
}

/// Computes an HOTP code for an already decoded secret.
pub(crate) fn generate(secret: &[u8], opt: &HotpOptions) -> Result<String> {
    let (counter, params) = validate_options(opt).map_err(rejected)?;
    Ok(compute(secret, counter, &params))
}

pub(crate) fn rejected(err: Error) -> Error {
    debug!("rejected OTP input: {}", err);
    err
}

fn validate_options(opt: &HotpOptions) -> Result<([u8; 8], Params)> {
    let counter = opt.counter.to_bytes()?;
    let length = Length::try_from(opt.code_digits)?;
    let truncation_offset = validate::truncation_offset(opt.truncation_offset)?;
    Ok((
        counter,
        Params {
            algorithm: Algorithm::Sha1,
            length,
            add_checksum: opt.add_checksum,
            truncation_offset,
        },
    ))
}
