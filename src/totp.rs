//! Time-based one-time passwords ([RFC 6238][6238]).
//!
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

use core::convert::TryFrom;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;
use crate::hotp::{compute, rejected, Params};
use crate::key::Key;
use crate::length::Length;
use crate::options::TotpOptions;
use crate::validate;

/// Whole seconds since the Unix epoch, or zero for a clock set before it.
fn now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default() as f64
}

/// Whether `x` is a whole number that converts to `u64` exactly.
fn is_whole(x: f64) -> bool {
    x.fract() == 0.0 && x < u64::MAX as f64
}

/// The moving factor for `timestamp`: `floor(timestamp / step)`, the number of whole time steps
/// since the epoch.
///
/// Whole timestamps and steps are divided as integers; anything fractional is divided in
/// floating point.
///
/// # Errors
///
/// Fails if `timestamp` is negative or `step` is below one second.
///
/// # Examples
///
/// ```
/// assert_eq!(rfc_otp::time_counter(59.0, 30.0), Ok(1));
/// assert_eq!(rfc_otp::time_counter(59.0, 1.5), Ok(39));
/// assert!(rfc_otp::time_counter(59.0, 0.0).is_err());
/// ```
pub fn time_counter(timestamp: f64, step: f64) -> Result<u64> {
    let step = validate::time_step(step)?;
    let timestamp = validate::timestamp(timestamp)?;
    if is_whole(timestamp) && is_whole(step) {
        Ok(timestamp as u64 / step as u64)
    } else {
        Ok((timestamp / step).floor() as u64)
    }
}

/// Computes a TOTP code.
///
/// The time step count `floor(timestamp / time)` is used as an HOTP counter, hashed with the
/// selected algorithm. Without a timestamp, the system clock is read.
///
/// # Errors
///
/// Returns the first violated input constraint: the key, then the time step, timestamp, code
/// length and truncation offset.
///
/// # Examples
///
/// ```
/// use rfc_otp::{totp, Key, TotpOptions};
///
/// let key = Key::text("12345678901234567890");
/// let opt = TotpOptions::default().with_timestamp(59.0).with_code_digits(8);
/// assert_eq!(totp(&key, &opt).unwrap(), "94287082");
/// ```
pub fn totp(key: &Key, opt: &TotpOptions) -> Result<String> {
    let secret = key.to_bytes().map_err(rejected)?;
    generate(&secret, opt)
}

/// Computes a TOTP code for an already decoded secret.
pub(crate) fn generate(secret: &[u8], opt: &TotpOptions) -> Result<String> {
    let (counter, params) = validate_options(opt).map_err(rejected)?;
    Ok(compute(secret, counter.to_be_bytes(), &params))
}

fn validate_options(opt: &TotpOptions) -> Result<(u64, Params)> {
    let step = validate::time_step(opt.time)?;
    let timestamp = validate::timestamp(opt.timestamp.unwrap_or_else(now))?;
    let length = Length::try_from(opt.code_digits)?;
    let truncation_offset = validate::truncation_offset(opt.truncation_offset)?;
    Ok((
        time_counter(timestamp, step)?,
        Params {
            algorithm: opt.algorithm,
            length,
            add_checksum: opt.add_checksum,
            truncation_offset,
        },
    ))
}
