//! Path relationship checking.
//!
//! This module provides functionality to determine the relationship between
//! two normalized segment sequences, such as whether one is an ancestor or
//! descendant of the other.

/// Relationship between two paths.
///
/// Comparison is segment-wise, so `/a/bc` is unrelated to `/a/b`.
///
/// # Examples
///
/// ```
/// use waypath::path::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between(&["home", "user"], &["home", "user", "project"]),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    ///
    /// This means the second path is somewhere beneath the first in the
    /// directory hierarchy.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two segment sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::path::PathRelationship;
    ///
    /// let rel = PathRelationship::between(&["a", "b"], &["a"]);
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(&["a"], &["a"]);
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(&["a", "bc"], &["a", "b"]);
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between<A, B>(first: &[A], second: &[B]) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let common = first
            .iter()
            .zip(second)
            .take_while(|(a, b)| a.as_ref() == b.as_ref())
            .count();

        match (common == first.len(), common == second.len()) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Whether the first path lies beneath the second.
    ///
    /// With `include_self`, equal paths count as descending.
    #[must_use]
    pub fn is_descent(&self, include_self: bool) -> bool {
        match self {
            Self::Descendant => true,
            Self::Same => include_self,
            Self::Ancestor | Self::Unrelated => false,
        }
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::path::PathRelationship;
    ///
    /// let desc = PathRelationship::Ancestor.description("/a", "/a/b");
    /// assert!(desc.contains("/a/b"));
    /// assert!(desc.contains("ancestor"));
    /// ```
    #[must_use]
    pub fn description(&self, first: &str, second: &str) -> String {
        match self {
            Self::Ancestor => format!("{first} is an ancestor of {second}"),
            Self::Descendant => format!("{first} is a descendant of {second}"),
            Self::Same => format!("{first} and {second} are the same path"),
            Self::Unrelated => format!("{first} and {second} are unrelated paths"),
        }
    }
}
