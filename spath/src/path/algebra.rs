//! Pure operations over [`PathValue`].
//!
//! Everything in this module is string manipulation. Nothing here touches
//! the filesystem or the process current directory.

use crate::path::value::PathValue;

/// The path separator.
pub const SEPARATOR: &str = "/";

/// The path separator as a `char`.
pub const SEPARATOR_CHAR: char = '/';

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Whether `path` starts with the separator.
///
/// # Examples
///
/// ```
/// use spath::path::algebra::is_absolute;
/// use spath::PathValue;
///
/// assert!(is_absolute(&PathValue::new("/usr")));
/// assert!(!is_absolute(&PathValue::new("usr")));
/// assert!(!is_absolute(&PathValue::empty()));
/// ```
#[must_use]
pub fn is_absolute(path: &PathValue) -> bool {
    path.as_str().starts_with(SEPARATOR_CHAR)
}

/// Negation of [`is_absolute`].
#[must_use]
pub fn is_relative(path: &PathValue) -> bool {
    !is_absolute(path)
}

/// Compose two paths textually.
///
/// At the boundary exactly one separator survives:
/// - both sides carry one: the right side's leading separator is dropped
/// - neither side carries one: a separator is inserted
/// - only one side carries one: plain concatenation
///
/// If either operand is empty the other is returned unchanged. An absolute
/// `rhs` is appended, not substituted, which differs from
/// [`std::path::Path::join`].
///
/// # Examples
///
/// ```
/// use spath::path::algebra::join;
/// use spath::PathValue;
///
/// let join_str = |a: &str, b: &str| join(&PathValue::new(a), &PathValue::new(b));
///
/// assert_eq!(join_str("a/", "/b").as_str(), "a/b");
/// assert_eq!(join_str("a", "b").as_str(), "a/b");
/// assert_eq!(join_str("a/", "b").as_str(), "a/b");
/// assert_eq!(join_str("a", "/b").as_str(), "a/b");
/// assert_eq!(join_str("a/", "").as_str(), "a/");
/// ```
#[must_use]
pub fn join(lhs: &PathValue, rhs: &PathValue) -> PathValue {
    if rhs.is_empty() {
        return lhs.clone();
    }
    if lhs.is_empty() {
        return rhs.clone();
    }

    let left = lhs.as_str();
    let right = rhs.as_str();
    let mut text = String::with_capacity(left.len() + right.len() + SEPARATOR.len());
    text.push_str(left);

    match (left.ends_with(SEPARATOR_CHAR), right.starts_with(SEPARATOR_CHAR)) {
        (true, true) => text.push_str(&right[SEPARATOR.len()..]),
        (false, false) => {
            text.push_str(SEPARATOR);
            text.push_str(right);
        }
        _ => text.push_str(right),
    }

    PathValue::new(text)
}

/// Lexically collapse `.`, `..` and redundant separators.
///
/// The result never depends on the filesystem:
/// - the empty path stays empty
/// - `..` above the root of an absolute path is dropped (`/..` is `/`)
/// - leading `..` segments of a relative path are kept, so relative paths
///   stay relative
/// - a relative path that collapses to nothing becomes `.`
/// - trailing separators are removed, except for the root itself
///
/// # Examples
///
/// ```
/// use spath::path::algebra::normalize;
/// use spath::PathValue;
///
/// let norm = |s: &str| normalize(&PathValue::new(s)).into_string();
///
/// assert_eq!(norm("/a/./b/../c"), "/a/c");
/// assert_eq!(norm("a//b/"), "a/b");
/// assert_eq!(norm("../x/../../y"), "../../y");
/// assert_eq!(norm("/../.."), "/");
/// assert_eq!(norm("a/.."), ".");
/// ```
#[must_use]
pub fn normalize(path: &PathValue) -> PathValue {
    if path.is_empty() {
        return PathValue::empty();
    }

    let absolute = is_absolute(path);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.as_str().split(SEPARATOR_CHAR) {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match segments.last() {
                Some(&last) if last != PARENT_DIR => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(PARENT_DIR),
            },
            normal => segments.push(normal),
        }
    }

    let body = segments.join(SEPARATOR);
    let text = match (absolute, body.is_empty()) {
        (true, _) => format!("{SEPARATOR}{body}"),
        (false, true) => CURRENT_DIR.to_string(),
        (false, false) => body,
    };
    PathValue::new(text)
}

impl PathValue {
    /// See [`is_absolute`].
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_absolute(self)
    }

    /// See [`is_relative`].
    #[must_use]
    pub fn is_relative(&self) -> bool {
        is_relative(self)
    }

    /// Compose `self` with `other`. See [`join`] for the separator rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use spath::PathValue;
    ///
    /// let home = PathValue::new("/home/user/");
    /// assert_eq!(home.join("docs").as_str(), "/home/user/docs");
    /// ```
    #[must_use]
    pub fn join(&self, other: impl Into<PathValue>) -> PathValue {
        join(self, &other.into())
    }

    /// See [`normalize`].
    #[must_use]
    pub fn normalize(&self) -> PathValue {
        normalize(self)
    }
}
