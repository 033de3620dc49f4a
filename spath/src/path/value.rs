//! The path value type.
//!
//! A [`PathValue`] is nothing more than a string. It is never validated,
//! never normalized behind the caller's back, and compares by its exact
//! spelling.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::algebra::SEPARATOR;

/// An immutable, string-backed filesystem path.
///
/// Two values are equal only if their text is identical, so `a/b` and
/// `a/./b` are different values until both are normalized.
///
/// # Examples
///
/// ```
/// use spath::PathValue;
///
/// let path = PathValue::new("/var/log");
/// assert_eq!(path.as_str(), "/var/log");
/// assert_ne!(PathValue::new("a/b"), PathValue::new("a/./b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathValue {
    text: String,
}

impl PathValue {
    /// Create a path from text, stored verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::PathValue;
    ///
    /// let odd = PathValue::new("//weird/./spelling/");
    /// assert_eq!(odd.as_str(), "//weird/./spelling/");
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a path by joining segments with the separator.
    ///
    /// Segments are joined verbatim; a segment that already carries a
    /// separator is not trimmed. An empty sequence yields the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::PathValue;
    ///
    /// assert_eq!(PathValue::from_segments(["usr", "lib"]).as_str(), "usr/lib");
    /// assert_eq!(PathValue::from_segments(["", "usr"]).as_str(), "/usr");
    /// assert!(PathValue::from_segments(Vec::<String>::new()).is_empty());
    /// ```
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                text.push_str(SEPARATOR);
            }
            text.push_str(segment.as_ref());
        }
        Self { text }
    }

    /// The stored text, unchanged.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the value and return its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for PathValue {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for PathValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PathValue {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&PathValue> for PathValue {
    fn from(path: &PathValue) -> Self {
        path.clone()
    }
}

impl From<PathValue> for String {
    fn from(path: PathValue) -> Self {
        path.text
    }
}

impl FromStr for PathValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathValue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}
