//! Configuration options for logfmt output.
//!
//! [`FormatOptions`] carries the single knob this format has: an optional
//! depth limit for flattening nested structures.
//!
//! ## Examples
//!
//! ```rust
//! use serde_logfmt::{format_with_options, FormatOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Inner { baz: u32 }
//! #[derive(Serialize)]
//! struct Outer { bar: Inner }
//! #[derive(Serialize)]
//! struct Root { foo: Outer }
//!
//! let value = Root { foo: Outer { bar: Inner { baz: 1 } } };
//!
//! let options = FormatOptions::new().with_max_depth(2);
//! assert_eq!(
//!     format_with_options(&value, options),
//!     "foo.bar=\"[object Object]\""
//! );
//!
//! let options = FormatOptions::new().with_max_depth(10);
//! assert_eq!(format_with_options(&value, options), "foo.bar.baz=1");
//! ```

use std::num::NonZeroUsize;

/// Configuration options for logfmt formatting.
///
/// `max_depth` bounds how many levels of nesting the flattener descends
/// before a value is kept as a leaf and rendered through its coercion text
/// (a placeholder such as `"[object Object]"` for maps). `None` means
/// unlimited depth.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::FormatOptions;
///
/// // Unlimited depth.
/// let options = FormatOptions::new();
/// assert!(options.max_depth.is_none());
///
/// // Stop flattening two levels down.
/// let options = FormatOptions::new().with_max_depth(2);
/// assert_eq!(options.max_depth.map(|d| d.get()), Some(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub max_depth: Option<NonZeroUsize>,
}

impl FormatOptions {
    /// Creates default options (unlimited depth).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options, FormatOptions::default());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum flattening depth.
    ///
    /// The root's immediate children sit at depth 1; a composite value is
    /// descended into only while the current depth is below the limit.
    /// Passing `0` disables the limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_max_depth(3);
    /// assert_eq!(options.max_depth.map(|d| d.get()), Some(3));
    ///
    /// let options = FormatOptions::new().with_max_depth(0);
    /// assert!(options.max_depth.is_none());
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = NonZeroUsize::new(depth);
        self
    }
}
