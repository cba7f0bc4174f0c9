//! Errors raised while registering initialisms.

use std::fmt;

/// Error returned when an [`InitialismSet`](crate::InitialismSet) rejects a
/// registration.
///
/// Registration errors are configuration mistakes: conversions themselves
/// never fail. A rejected call leaves the set exactly as it was.
///
/// # Example
///
/// ```
/// use snaker::{InitialismError, InitialismSet};
///
/// let err = InitialismSet::new(["HTTP", "X"]).unwrap_err();
/// assert_eq!(err, InitialismError::InvalidToken { token: "X".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InitialismError {
    /// Token is shorter than two characters.
    InvalidToken {
        /// The offending token, upper-cased.
        token: String,
    },
    /// Canonical pair whose members differ once both are upper-cased.
    InvalidPair {
        /// The all-caps member of the pair.
        upper: String,
        /// The rendered member of the pair.
        rendered: String,
    },
}

impl InitialismError {
    #[inline]
    pub(crate) fn invalid_token(token: &str) -> Self {
        Self::InvalidToken {
            token: token.to_string(),
        }
    }

    #[inline]
    pub(crate) fn invalid_pair(upper: &str, rendered: &str) -> Self {
        Self::InvalidPair {
            upper: upper.to_string(),
            rendered: rendered.to_string(),
        }
    }
}

impl fmt::Display for InitialismError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { token } => {
                write!(f, "invalid initialism `{token}`: must be at least 2 characters")
            },
            Self::InvalidPair { upper, rendered } => {
                write!(
                    f,
                    "invalid initialism pair (`{upper}`, `{rendered}`): members must match when upper-cased"
                )
            },
        }
    }
}

impl std::error::Error for InitialismError {}
