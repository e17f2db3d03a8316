//! Error types for logfmt conversion.
//!
//! The formatting entry points in this crate never fail: [`crate::format`]
//! and friends always return a string, because they are meant to be called
//! from logging code paths that must not crash the host process. The types
//! here cover the two places an error value still exists:
//!
//! - [`Error::Circular`] is raised internally by the flattener when a value
//!   contains itself. It never escapes; the caller sees the literal string
//!   `[Circular]` instead.
//! - [`crate::to_value`] is the one fallible public surface. It reports why
//!   a value could not be converted through Serde (for example a map with a
//!   composite key). Going through [`crate::format`] instead swallows the
//!   error and renders the `{}` fallback.
//!
//! ## Examples
//!
//! ```rust
//! use serde_logfmt::to_value;
//! use std::collections::BTreeMap;
//!
//! // Composite map keys have no logfmt path representation.
//! let mut weird = BTreeMap::new();
//! weird.insert(vec![1, 2], "value");
//! assert!(to_value(&weird).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting a value
/// for logfmt output.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A composite value was found to contain itself during flattening.
    ///
    /// This variant is recovered internally: the formatting functions
    /// return the literal string `[Circular]` rather than propagating it.
    #[error("circular reference")]
    Circular,

    /// A value passed through Serde has no representation in the logfmt
    /// value model (for example a map keyed by a sequence).
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Generic message, used for custom Serde errors.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported type error for values that cannot be
    /// expressed as a [`crate::Value`].
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
