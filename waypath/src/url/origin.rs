//! Scheme classification and URL origins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SchemePolicy;
use crate::error::{Error, Result};

/// What kind of URL path an input string denotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlKind {
    /// `scheme://authority/...` with a hierarchical scheme, or `//authority/...`.
    Full,
    /// Starts with `/`.
    Root,
    /// Anything else without a scheme.
    Relative,
    /// A scheme the policy does not treat as hierarchical, such as `mailto:`.
    Opaque {
        /// The lowercased scheme.
        scheme: String,
    },
}

/// Classify an input with the built-in hierarchical schemes.
///
/// # Examples
///
/// ```
/// use waypath::url::{classify, UrlKind};
///
/// assert_eq!(classify("https://example.com/a"), UrlKind::Full);
/// assert_eq!(classify("//cdn.example.com/lib.js"), UrlKind::Full);
/// assert_eq!(classify("/static/app.css"), UrlKind::Root);
/// assert_eq!(classify("img/logo.png"), UrlKind::Relative);
/// assert!(matches!(classify("mailto:someone@example.com"), UrlKind::Opaque { .. }));
/// ```
#[must_use]
pub fn classify(input: &str) -> UrlKind {
    classify_with(input, &SchemePolicy::standard())
}

/// Classify an input against a scheme policy.
#[must_use]
pub fn classify_with(input: &str, policy: &SchemePolicy) -> UrlKind {
    if input.starts_with("//") {
        return UrlKind::Full;
    }
    if let Some(scheme) = scheme_prefix(input) {
        let scheme = scheme.to_ascii_lowercase();
        return if policy.is_hierarchical(&scheme) {
            UrlKind::Full
        } else {
            UrlKind::Opaque { scheme }
        };
    }
    if input.starts_with('/') {
        UrlKind::Root
    } else {
        UrlKind::Relative
    }
}

/// The `scheme` of a leading `scheme:`, if the input has one before any
/// `/`, `?` or `#`.
pub(crate) fn scheme_prefix(input: &str) -> Option<&str> {
    let end = input.find(|c| matches!(c, ':' | '/' | '?' | '#'))?;
    if !input[end..].starts_with(':') {
        return None;
    }
    let scheme = &input[..end];
    let mut chars = scheme.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(scheme)
}

/// Scheme and authority of a full URL.
///
/// The scheme and host are lowercased; the port is kept as written, so
/// `https://x.com:443` and `https://x.com` are different origins.
///
/// # Examples
///
/// ```
/// use waypath::url::Origin;
///
/// let origin: Origin = "HTTPS://Example.COM:8443".parse().unwrap();
/// assert_eq!(origin.scheme(), Some("https"));
/// assert_eq!(origin.host(), "example.com");
/// assert_eq!(origin.port(), Some(8443));
/// assert_eq!(origin.to_string(), "https://example.com:8443");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Origin {
    scheme: Option<String>,
    userinfo: Option<String>,
    host: String,
    port: Option<u16>,
}

impl Origin {
    /// Parse an origin with no path, query or fragment (a single trailing
    /// `/` is accepted).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] without a scheme,
    /// [`Error::NonHierarchical`] for an opaque scheme and
    /// [`Error::InvalidOrigin`] for a malformed authority or trailing path.
    pub fn parse(input: &str) -> Result<Self> {
        let (origin, rest) = split_origin(input, &SchemePolicy::standard())?;
        if !rest.is_empty() && rest != "/" {
            return Err(Error::InvalidOrigin {
                origin: input.to_owned(),
                reason: format!("unexpected trailing '{rest}'"),
            });
        }
        Ok(origin)
    }

    /// The lowercased scheme, or `None` for a scheme-relative `//host`.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The `user:password` part before `@`, if present.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// The canonical host. Empty only for `file:///` URLs.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, if any.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Whether this is a `//host` origin without a scheme.
    #[must_use]
    pub fn is_scheme_relative(&self) -> bool {
        self.scheme.is_none()
    }

    /// Fill in a scheme for a scheme-relative origin.
    #[must_use]
    pub(crate) fn or_scheme(mut self, scheme: Option<&str>) -> Self {
        if self.scheme.is_none() {
            self.scheme = scheme.map(str::to_owned);
        }
        self
    }

    fn from_authority(scheme: Option<String>, authority: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidOrigin {
            origin: authority.to_owned(),
            reason,
        };

        let (userinfo, host_port) = match authority.rfind('@') {
            Some(at) => (Some(authority[..at].to_owned()), &authority[at + 1..]),
            None => (None, authority),
        };
        let (host, port) = split_host_port(host_port).ok_or_else(|| invalid("malformed host".into()))?;

        let port = match port {
            None | Some("") => None,
            Some(port) => Some(
                port.parse::<u16>()
                    .map_err(|_| invalid(format!("invalid port '{port}'")))?,
            ),
        };

        let host = if host.is_empty() {
            if scheme.as_deref() != Some("file") || port.is_some() || userinfo.is_some() {
                return Err(invalid("empty host".into()));
            }
            String::new()
        } else {
            url::Host::parse(host)
                .map_err(|err| invalid(err.to_string()))?
                .to_string()
        };

        Ok(Self {
            scheme,
            userinfo,
            host,
            port,
        })
    }
}

/// Split `host[:port]`, with bracketed IPv6 hosts.
fn split_host_port(host_port: &str) -> Option<(&str, Option<&str>)> {
    if host_port.starts_with('[') {
        let close = host_port.find(']')?;
        let (host, rest) = host_port.split_at(close + 1);
        return match rest {
            "" => Some((host, None)),
            _ => rest.strip_prefix(':').map(|port| (host, Some(port))),
        };
    }
    Some(match host_port.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    })
}

/// Split a full URL into its origin and the remaining path, query and
/// fragment.
pub(crate) fn split_origin<'a>(input: &'a str, policy: &SchemePolicy) -> Result<(Origin, &'a str)> {
    let (scheme, rest) = if let Some(rest) = input.strip_prefix("//") {
        (None, rest)
    } else {
        let scheme = scheme_prefix(input).ok_or_else(|| Error::InvalidUrl {
            input: input.to_owned(),
            reason: "missing scheme".into(),
        })?;
        let lower = scheme.to_ascii_lowercase();
        if !policy.is_hierarchical(&lower) {
            return Err(Error::NonHierarchical {
                input: input.to_owned(),
                scheme: lower,
            });
        }
        let rest = input[scheme.len() + 1..]
            .strip_prefix("//")
            .ok_or_else(|| Error::InvalidOrigin {
                origin: input.to_owned(),
                reason: format!("expected '//' after '{lower}:'"),
            })?;
        (Some(lower), rest)
    };

    let end = rest
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let (authority, remainder) = rest.split_at(end);
    Ok((Origin::from_authority(scheme, authority)?, remainder))
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        f.write_str("//")?;
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Origin {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Origin> for String {
    fn from(value: Origin) -> Self {
        value.to_string()
    }
}
