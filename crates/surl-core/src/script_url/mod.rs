//! Script-path-aware URL value for server-side routing.
//!
//! A request path divides into the script path (the prefix addressing the
//! entry-point script, or its directory for a directory index) and the
//! path info (whatever follows it, PATH_INFO-style). The directory part of
//! the script path is the base path, the root against which relative links
//! are resolved. For `https://example.org/admin/app.cgi/report/weekly`
//! with script path `/admin/app.cgi`:
//!
//! - script path: `/admin/app.cgi`
//! - base path:   `/admin/`
//! - path info:   `/report/weekly`
//!
//! The script path comes from the deployment (rewrite rules, front
//! controller location). It is stored verbatim and never validated against
//! the URL path; callers keep the two consistent.

mod split;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// A full URL plus the script path of the entry point that serves it.
///
/// The embedded URL is read-only through this type; the script path is the
/// only mutable field. The derived accessors (`script_path`, `base_path`,
/// `path_info`) recompute from the current fields on every call. Display
/// prints the URL alone: the script path is routing metadata, not part of
/// the URL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptUrl {
    url: Url,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    script_path: String,
}

impl ScriptUrl {
    /// Wraps an already-parsed URL, with no script path set.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            script_path: String::new(),
        }
    }

    /// Wraps an already-parsed URL together with an initial script path.
    pub fn from_parts(url: Url, script_path: impl Into<String>) -> Self {
        Self {
            url,
            script_path: script_path.into(),
        }
    }

    /// Parses an absolute URL string. Fails exactly where `Url::parse`
    /// fails; no checks are added on top.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(input)?))
    }

    /// Replaces the stored script path. The value is kept verbatim and is
    /// not checked against the URL path.
    pub fn set_script_path(&mut self, value: impl Into<String>) {
        self.script_path = value.into();
    }

    /// The embedded URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Path component of the URL (`/`-separated, no query or fragment).
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Query string, without the leading `?`, if any.
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Fragment, without the leading `#`, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    /// URL scheme, e.g. `https`.
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host, if the URL has one.
    pub fn host_str(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Port, if one is spelled out in the URL.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// The full URL in serialized form.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl From<Url> for ScriptUrl {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl FromStr for ScriptUrl {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScriptUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
