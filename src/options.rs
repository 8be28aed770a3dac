//! Per-call generation options.

use crate::counter::Counter;
use crate::digest::Algorithm;
use crate::length::Length;

/// Default TOTP time step, in seconds, as recommended by [RFC 6238][6238].
///
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238#section-5.2
pub const DEFAULT_TIME_STEP: f64 = 30.0;

/// Options for [`hotp`](crate::hotp).
///
/// Fields are validated when a code is generated, not when they are set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HotpOptions {
    pub counter: Counter,
    /// Code length, 1 to 10 digits.
    pub code_digits: u8,
    /// Append the RFC 4226 check digit.
    pub add_checksum: bool,
    /// Fixed truncation offset (0 to 15); `None` selects the offset dynamically.
    pub truncation_offset: Option<u8>,
}

impl HotpOptions {
    pub fn with_counter<C: Into<Counter>>(mut self, counter: C) -> Self {
        self.counter = counter.into();
        self
    }

    pub fn with_code_digits(mut self, digits: u8) -> Self {
        self.code_digits = digits;
        self
    }

    pub fn with_checksum(mut self, add_checksum: bool) -> Self {
        self.add_checksum = add_checksum;
        self
    }

    pub fn with_truncation_offset(mut self, offset: u8) -> Self {
        self.truncation_offset = Some(offset);
        self
    }
}

impl Default for HotpOptions {
    fn default() -> Self {
        HotpOptions {
            counter: Counter::default(),
            code_digits: Length::DEFAULT,
            add_checksum: false,
            truncation_offset: None,
        }
    }
}

/// Options for [`totp`](crate::totp).
///
/// Times are in seconds and may be fractional.
#[derive(Clone, Debug, PartialEq)]
pub struct TotpOptions {
    /// Time step, at least 1.
    pub time: f64,
    /// Time since the Unix epoch; `None` reads the system clock.
    pub timestamp: Option<f64>,
    pub code_digits: u8,
    pub add_checksum: bool,
    pub truncation_offset: Option<u8>,
    pub algorithm: Algorithm,
}

impl TotpOptions {
    pub fn with_time_step(mut self, seconds: f64) -> Self {
        self.time = seconds;
        self
    }

    pub fn with_timestamp(mut self, seconds: f64) -> Self {
        self.timestamp = Some(seconds);
        self
    }

    pub fn with_code_digits(mut self, digits: u8) -> Self {
        self.code_digits = digits;
        self
    }

    pub fn with_checksum(mut self, add_checksum: bool) -> Self {
        self.add_checksum = add_checksum;
        self
    }

    pub fn with_truncation_offset(mut self, offset: u8) -> Self {
        self.truncation_offset = Some(offset);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Default for TotpOptions {
    fn default() -> Self {
        TotpOptions {
            time: DEFAULT_TIME_STEP,
            timestamp: None,
            code_digits: Length::DEFAULT,
            add_checksum: false,
            truncation_offset: None,
            algorithm: Algorithm::default(),
        }
    }
}
