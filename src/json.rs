//! Generation from loosely typed JSON input.
//!
//! Keys and options arrive as [`serde_json::Value`]s shaped like
//! `{"string": "..."}` / `{"hex": "..."}` and
//! `{"counter": {"int": 1}, "codeDigits": 8, "addChecksum": true, "truncationOffset": 0}`.
//! Each value is type checked and then handed to the same rules as the typed API, so a caller
//! gets one precise message for the first problem found. Unknown fields are ignored.

use serde_json::{Map, Value};

use crate::counter::Counter;
use crate::digest::Algorithm;
use crate::error::{Error, Field, Result};
use crate::key::Key;
use crate::length::Length;
use crate::options::{HotpOptions, TotpOptions};
use crate::validate::{self, COUNTER_PEERS, KEY_PEERS, MAX_TRUNCATION_OFFSET, MIN_TIME_STEP};

/// Computes an HOTP code from JSON input. See [`crate::hotp`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let key = json!({"string": "12345678901234567890"});
/// let code = rfc_otp::json::hotp(Some(&key), Some(&json!({"counter": {"hex": "9"}})));
/// assert_eq!(code.unwrap(), "520489");
///
/// let err = rfc_otp::json::hotp(None, None).unwrap_err();
/// assert_eq!(err.to_string(), "key must be an object");
/// ```
pub fn hotp(key: Option<&Value>, opt: Option<&Value>) -> Result<String> {
    let secret = key_from_value(key)?.to_bytes()?;
    let opt = hotp_options(opt)?;
    crate::hotp::generate(&secret, &opt)
}

/// Computes a TOTP code from JSON input. See [`crate::totp`].
pub fn totp(key: Option<&Value>, opt: Option<&Value>) -> Result<String> {
    let secret = key_from_value(key)?.to_bytes()?;
    let opt = totp_options(opt)?;
    crate::totp::generate(&secret, &opt)
}

/// Reads a `{"string": ...}` or `{"hex": ...}` key object.
///
/// Only the shape is checked here; the contents are validated by [`Key::to_bytes`].
pub fn key_from_value(value: Option<&Value>) -> Result<Key> {
    let object = value
        .and_then(Value::as_object)
        .ok_or(Error::NotObject(Field::Key))?;
    match exclusive(object, "string", "hex", Field::Key, KEY_PEERS)? {
        Peer::First(text) => string(text, Field::Key).map(Key::text),
        Peer::Second(digits) => string(digits, Field::Key).map(Key::hex),
    }
}

/// Reads HOTP options; `None` yields the defaults.
pub fn hotp_options(value: Option<&Value>) -> Result<HotpOptions> {
    let mut opt = HotpOptions::default();
    let object = match options_object(value)? {
        Some(object) => object,
        None => return Ok(opt),
    };
    if let Some(counter) = object.get("counter") {
        opt.counter = counter_from_value(counter)?;
    }
    if let Some(digits) = object.get("codeDigits") {
        opt.code_digits = code_digits(digits)?;
    }
    if let Some(checksum) = object.get("addChecksum") {
        opt.add_checksum = boolean(checksum)?;
    }
    if let Some(offset) = object.get("truncationOffset") {
        opt.truncation_offset = Some(truncation_offset(offset)?);
    }
    Ok(opt)
}

/// Reads TOTP options; `None` yields the defaults.
pub fn totp_options(value: Option<&Value>) -> Result<TotpOptions> {
    let mut opt = TotpOptions::default();
    let object = match options_object(value)? {
        Some(object) => object,
        None => return Ok(opt),
    };
    if let Some(time) = object.get("time") {
        opt.time = number(time, MIN_TIME_STEP, None)?;
    }
    if let Some(timestamp) = object.get("timestamp") {
        opt.timestamp = Some(number(timestamp, 0, None)?);
    }
    if let Some(digits) = object.get("codeDigits") {
        opt.code_digits = code_digits(digits)?;
    }
    if let Some(checksum) = object.get("addChecksum") {
        opt.add_checksum = boolean(checksum)?;
    }
    if let Some(offset) = object.get("truncationOffset") {
        opt.truncation_offset = Some(truncation_offset(offset)?);
    }
    if let Some(algorithm) = object.get("algorithm") {
        opt.algorithm = string(algorithm, Field::Opt)?.parse::<Algorithm>()?;
    }
    Ok(opt)
}

enum Peer<'a> {
    First(&'a Value),
    Second(&'a Value),
}

/// Picks whichever one of two exclusive fields is present.
fn exclusive<'a>(
    object: &'a Map<String, Value>,
    first: &str,
    second: &str,
    field: Field,
    peers: &'static str,
) -> Result<Peer<'a>> {
    match (object.get(first), object.get(second)) {
        (Some(_), Some(_)) => Err(Error::PeerConflict { field, peers }),
        (Some(value), None) => Ok(Peer::First(value)),
        (None, Some(value)) => Ok(Peer::Second(value)),
        (None, None) => Err(Error::MissingPeer { field, peers }),
    }
}

fn options_object(value: Option<&Value>) -> Result<Option<&Map<String, Value>>> {
    match value {
        None => Ok(None),
        Some(value) => value
            .as_object()
            .map(Some)
            .ok_or(Error::NotObject(Field::Opt)),
    }
}

fn counter_from_value(value: &Value) -> Result<Counter> {
    let object = value.as_object().ok_or(Error::NotObject(Field::Opt))?;
    match exclusive(object, "int", "hex", Field::Opt, COUNTER_PEERS)? {
        Peer::First(int) => integer(int, 0, None).map(Counter::Int),
        Peer::Second(digits) => {
            let digits = string(digits, Field::Opt)?;
            validate::counter_hex(digits)?;
            Ok(Counter::Hex(digits.to_owned()))
        }
    }
}

fn code_digits(value: &Value) -> Result<u8> {
    integer(value, Length::MIN.into(), Some(Length::MAX.into())).map(|digits| digits as u8)
}

fn truncation_offset(value: &Value) -> Result<u8> {
    integer(value, 0, Some(MAX_TRUNCATION_OFFSET.into())).map(|offset| offset as u8)
}

fn string(value: &Value, field: Field) -> Result<&str> {
    value.as_str().ok_or(Error::NotString(field))
}

fn boolean(value: &Value) -> Result<bool> {
    value.as_bool().ok_or(Error::NotBoolean(Field::Opt))
}

/// A number within bounds, checked before its integrality.
fn number(value: &Value, min: u64, max: Option<u64>) -> Result<f64> {
    let number = value.as_f64().ok_or(Error::NotNumber(Field::Opt))?;
    if number < min as f64 {
        return Err(Error::TooSmall {
            field: Field::Opt,
            min,
        });
    }
    if let Some(max) = max {
        if number > max as f64 {
            return Err(Error::TooLarge {
                field: Field::Opt,
                max,
            });
        }
    }
    Ok(number)
}

fn integer(value: &Value, min: u64, max: Option<u64>) -> Result<u64> {
    let number = number(value, min, max)?;
    if number.fract() != 0.0 {
        return Err(Error::NotInteger(Field::Opt));
    }
    // Exact for any integer JSON number; larger floats saturate
    Ok(value.as_u64().unwrap_or(number as u64))
}
