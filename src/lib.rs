//! One-time password generation per [RFC 4226][4226] (HOTP) and [RFC 6238][6238] (TOTP).
//!
//! Both generators are pure functions of a [`Key`] and an options value, returning the code as a
//! string of decimal digits:
//!
//! ```
//! use rfc_otp::{hotp, totp, Algorithm, HotpOptions, Key, TotpOptions};
//!
//! let key = Key::text("12345678901234567890");
//! assert_eq!(hotp(&key, &HotpOptions::default()).unwrap(), "755224");
//!
//! let opt = TotpOptions::default()
//!     .with_timestamp(1111111109.0)
//!     .with_code_digits(8)
//!     .with_algorithm(Algorithm::Sha1);
//! assert_eq!(totp(&key, &opt).unwrap(), "07081804");
//! ```
//!
//! Input is validated before any hashing takes place, and the first problem found is reported
//! as an [`Error`]. With the `json` feature (enabled by default), the `json` module accepts
//! keys and options as untyped JSON values.
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

pub mod counter;
pub mod digest;
pub mod error;
mod hotp;
#[cfg(feature = "json")]
pub mod json;
pub mod key;
pub mod length;
pub mod options;
pub mod token;
mod totp;
mod validate;

pub use counter::Counter;
pub use digest::{Algorithm, Digest};
pub use error::{Error, Field, Result};
pub use hotp::hotp;
pub use key::Key;
pub use length::Length;
pub use options::{HotpOptions, TotpOptions, DEFAULT_TIME_STEP};
pub use token::Token;
pub use totp::{time_counter, totp};
pub use validate::{MAX_COUNTER_HEX_DIGITS, MAX_TRUNCATION_OFFSET, MIN_TIME_STEP};
