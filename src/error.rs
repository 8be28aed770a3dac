//! Validation error types.

use core::fmt;

/// The argument a validation error is scoped to.
///
/// Every generator takes two arguments, the shared secret and an options object. Error messages
/// name the argument rather than the individual field, so `codeDigits: 11` and `time: 0` are
/// both reported against `opt`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    /// The shared secret.
    Key,
    /// The generation options (including the counter).
    Opt,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Key => f.write_str("key"),
            Field::Opt => f.write_str("opt"),
        }
    }
}

/// OTP error type.
///
/// All variants describe invalid caller input; computing a code from validated input cannot
/// fail. The `Display` output of each variant is stable and matches the messages produced by
/// other implementations of the same interface.
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum Error {
    /// The value was missing or was not an object.
    #[error("{0} must be an object")]
    NotObject(Field),
    /// The value was not a number.
    #[error("{0} must be a number")]
    NotNumber(Field),
    /// The value was a number, but not a whole one.
    #[error("{0} must be an integer")]
    NotInteger(Field),
    /// The value was not a boolean.
    #[error("{0} must be a boolean")]
    NotBoolean(Field),
    /// The value was not a string.
    #[error("{0} must be a string")]
    NotString(Field),
    /// None of a set of exclusive peers was supplied.
    #[error("{field} must contain at least one of {peers}")]
    MissingPeer {
        field: Field,
        peers: &'static str,
    },
    /// More than one of a set of exclusive peers was supplied.
    #[error("{field} contains a conflict between exclusive peers {peers}")]
    PeerConflict {
        field: Field,
        peers: &'static str,
    },
    /// A required string was empty.
    #[error("{0} is not allowed to be empty")]
    Empty(Field),
    /// A string did not match its required pattern.
    #[error("{0} fails to match the required pattern")]
    Pattern(Field),
    /// A number was below its lower bound.
    #[error("{field} must be larger than or equal to {min}")]
    TooSmall { field: Field, min: u64 },
    /// A number was above its upper bound.
    #[error("{field} must be less than or equal to {max}")]
    TooLarge { field: Field, max: u64 },
    /// A value was not one of the allowed choices.
    #[error("{field} must be one of {allowed}")]
    NotAllowed {
        field: Field,
        allowed: &'static str,
    },
}

impl Error {
    /// The argument this error is scoped to.
    pub fn field(&self) -> Field {
        match *self {
            Error::NotObject(field)
            | Error::NotNumber(field)
            | Error::NotInteger(field)
            | Error::NotBoolean(field)
            | Error::NotString(field)
            | Error::Empty(field)
            | Error::Pattern(field) => field,
            Error::MissingPeer { field, .. }
            | Error::PeerConflict { field, .. }
            | Error::TooSmall { field, .. }
            | Error::TooLarge { field, .. }
            | Error::NotAllowed { field, .. } => field,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_argument() {
        assert_eq!(Error::NotObject(Field::Key).to_string(), "key must be an object");
        assert_eq!(
            Error::PeerConflict {
                field: Field::Opt,
                peers: "int, hex"
            }
            .to_string(),
            "opt contains a conflict between exclusive peers int, hex"
        );
        assert_eq!(
            Error::TooLarge {
                field: Field::Opt,
                max: 10
            }
            .to_string(),
            "opt must be less than or equal to 10"
        );
    }

    #[test]
    fn field_is_recoverable() {
        let err = Error::MissingPeer {
            field: Field::Key,
            peers: "string, hex",
        };
        assert_eq!(err.field(), Field::Key);
        assert_eq!(Error::Pattern(Field::Opt).field(), Field::Opt);
    }
}
