//! Segment normalization.
//!
//! This module turns raw slash-delimited strings into canonical segment
//! sequences:
//! - Repeated separators collapse
//! - `.` segments are dropped
//! - `..` segments pop the previous segment, or survive as a leading run
//!   when nothing is left to pop in a relative sequence
//! - A rooted sequence never climbs past `/`
//!
//! Plain paths render without a trailing slash. URL pathnames keep a single
//! trailing slash as a directory marker.

/// A normalized segment sequence.
///
/// Segments never contain `/`, never equal `.`, and only equal `..` as a
/// leading run of a non-rooted sequence. A sequence with no segments is
/// always a directory (`/` or `.`).
///
/// # Examples
///
/// ```
/// use waypath::path::normalize::NormalForm;
///
/// let form = NormalForm::parse("/foo/./bar/../baz/");
/// assert_eq!(form.segments(), ["foo", "baz"]);
/// assert!(form.is_rooted());
/// assert!(form.is_directory());
/// assert_eq!(form.to_plain_string(), "/foo/baz");
/// assert_eq!(form.to_pathname_string(), "/foo/baz/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalForm {
    segments: Vec<String>,
    rooted: bool,
    directory: bool,
}

impl NormalForm {
    /// Normalize a raw string.
    ///
    /// The directory flag is set when the input ends with `/`, when its last
    /// raw segment is `.` or `..`, or when nothing is left after
    /// normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::path::normalize::NormalForm;
    ///
    /// assert_eq!(NormalForm::parse("../../x").segments(), ["..", "..", "x"]);
    /// assert_eq!(NormalForm::parse("a/b/../c").segments(), ["a", "c"]);
    /// assert!(NormalForm::parse("/..").segments().is_empty());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let rooted = raw.starts_with('/');
        let mut stack: Vec<&str> = Vec::new();

        for segment in raw.split('/') {
            match segment {
                "" | "." => {}
                ".." => match stack.last() {
                    Some(&top) if top != ".." => {
                        stack.pop();
                    }
                    // Nothing above the root
                    _ if rooted => {}
                    _ => stack.push(".."),
                },
                other => stack.push(other),
            }
        }

        let trailing = !raw.is_empty() && matches!(raw.rsplit('/').next(), Some("" | "." | ".."));

        Self {
            directory: trailing || stack.is_empty(),
            segments: stack.into_iter().map(str::to_owned).collect(),
            rooted,
        }
    }

    /// Build a form from already-split segments, renormalizing them.
    #[must_use]
    pub fn from_segments<I, S>(segments: I, rooted: bool, directory: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw = String::new();
        if rooted {
            raw.push('/');
        }
        for (index, segment) in segments.into_iter().enumerate() {
            if index > 0 {
                raw.push('/');
            }
            raw.push_str(segment.as_ref());
        }

        let mut form = Self::parse(&raw);
        form.directory = directory || form.segments.is_empty();
        form
    }

    /// The normalized segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether the sequence starts at `/`.
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Whether the sequence is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.directory
    }

    /// Whether the sequence has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render without a trailing slash (`.` or `/` when empty).
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let joined = self.segments.join("/");
        match (self.rooted, joined.is_empty()) {
            (true, _) => format!("/{joined}"),
            (false, true) => ".".to_string(),
            (false, false) => joined,
        }
    }

    /// Render with a trailing slash when the sequence is a non-empty
    /// directory.
    #[must_use]
    pub fn to_pathname_string(&self) -> String {
        let mut rendered = self.to_plain_string();
        if self.directory && !self.segments.is_empty() {
            rendered.push('/');
        }
        rendered
    }

    /// Append a raw tail and renormalize.
    ///
    /// The tail is always treated as a continuation, even if it starts with
    /// `/`. An empty tail or a bare `.` leaves the form untouched, directory
    /// flag included.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::path::normalize::NormalForm;
    ///
    /// let dir = NormalForm::parse("/foo/");
    /// assert_eq!(dir.append("bar").to_pathname_string(), "/foo/bar");
    /// assert_eq!(dir.append("/etc").to_pathname_string(), "/foo/etc");
    /// assert_eq!(dir.append("").to_pathname_string(), "/foo/");
    /// assert_eq!(NormalForm::parse("/foo").append(".").to_pathname_string(), "/foo");
    /// ```
    #[must_use]
    pub fn append(&self, tail: &str) -> Self {
        if tail.is_empty() || tail == "." {
            return self.clone();
        }
        Self::parse(&format!("{}/{tail}", self.to_pathname_string()))
    }

    /// The containing directory: every segment but the last.
    ///
    /// The parent of an empty sequence is itself.
    #[must_use]
    pub fn parent(&self) -> Self {
        let keep = self.segments.len().saturating_sub(1);
        Self {
            segments: self.segments[..keep].to_vec(),
            rooted: self.rooted,
            directory: true,
        }
    }

    /// Re-root or un-root the sequence, renormalizing.
    #[must_use]
    pub fn with_rooted(&self, rooted: bool) -> Self {
        Self::from_segments(&self.segments, rooted, self.directory)
    }

    /// Set the directory flag. Empty sequences stay directories.
    #[must_use]
    pub fn with_directory(&self, directory: bool) -> Self {
        Self {
            segments: self.segments.clone(),
            rooted: self.rooted,
            directory: directory || self.segments.is_empty(),
        }
    }

    /// Replace the last segment, or append one to an empty sequence.
    #[must_use]
    pub fn with_last(&self, name: &str) -> Self {
        let keep = self.segments.len().saturating_sub(1);
        let segments = self.segments[..keep]
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name));
        Self::from_segments(segments, self.rooted, false)
    }
}

impl Default for NormalForm {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            rooted: false,
            directory: true,
        }
    }
}

/// Normalize a raw string to its plain form.
///
/// # Examples
///
/// ```
/// use waypath::path::normalize::normalize;
///
/// assert_eq!(normalize("./foo/../bar/./baz.txt/"), "bar/baz.txt");
/// assert_eq!(normalize(""), ".");
/// assert_eq!(normalize("./foo/../"), ".");
/// assert_eq!(normalize("/a/./b/../c"), "/a/c");
/// assert_eq!(normalize("///"), "/");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    NormalForm::parse(raw).to_plain_string()
}

/// Compute the segments leading from `base` to `target`.
///
/// Both inputs must be normalized and share a root. The result is one `..`
/// per base segment past the longest common prefix, followed by the
/// remaining target segments.
///
/// # Examples
///
/// ```
/// use waypath::path::normalize::relative_segments;
///
/// let base = ["a", "b", "c"];
/// let target = ["a", "x"];
/// assert_eq!(relative_segments(&base, &target), ["..", "..", "x"]);
/// assert!(relative_segments(&base, &base).is_empty());
/// ```
#[must_use]
pub fn relative_segments<A, B>(base: &[A], target: &[B]) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let common = base
        .iter()
        .zip(target)
        .take_while(|(b, t)| b.as_ref() == t.as_ref())
        .count();

    std::iter::repeat("..")
        .take(base.len() - common)
        .chain(target[common..].iter().map(|segment| segment.as_ref()))
        .map(str::to_owned)
        .collect()
}
