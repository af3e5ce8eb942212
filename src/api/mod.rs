//! URL composition for the dashboard API.
//!
//! Two namespaces are addressed: the control namespace (`base + path`) and
//! the data namespace (`base + /data/<environment> + path`). The selected
//! environment lives in a [`KeyValueStore`] injected through
//! [`EnvironmentSelector`], so nothing here reaches for ambient global state.
//! No requests are issued; this module only builds strings.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::non_blank;

mod environment;
mod store;

pub use environment::{DEFAULT_ENVIRONMENT, ENVIRONMENT_KEY, EnvironmentSelector};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

#[cfg(test)]
pub use store::MockKeyValueStore;

/// Process variable overriding the API base address.
pub const API_BASE_ENV: &str = "VITE_API_URL";

/// Base address used when neither the environment nor the configuration
/// provides one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3001";

// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The resolved API base address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Wraps `address`, dropping a single trailing slash.
    ///
    /// ```
    /// use cyberwatch::ApiBase;
    ///
    /// assert_eq!(ApiBase::new("http://h/").as_str(), "http://h");
    /// ```
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self(trailing_slash_trimmed(address).to_owned())
    }

    /// Picks the first non-blank candidate: the `VITE_API_URL` value, then the
    /// configured base, then [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn resolve(environment: Option<&str>, configuration: Option<&str>) -> Self {
        let address = non_blank(environment)
            .or_else(|| non_blank(configuration))
            .unwrap_or(DEFAULT_API_BASE);
        Self::new(address)
    }

    /// Resolves the base from the process environment and `configuration`.
    #[must_use]
    pub fn from_process(configuration: Option<&str>) -> Self {
        let environment = std::env::var(API_BASE_ENV).ok();
        Self::resolve(environment.as_deref(), configuration)
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Drops at most one trailing `/` from `address`.
fn trailing_slash_trimmed(address: &str) -> &str {
    address.strip_suffix('/').unwrap_or(address)
}

/// Prefixes `path` with `/` unless it already starts with one.
fn leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Concatenates `base` and `path` with exactly one separating slash.
///
/// ```
/// use cyberwatch::join;
///
/// assert_eq!(join("http://h", "/x"), "http://h/x");
/// assert_eq!(join("http://h", "x"), "http://h/x");
/// assert_eq!(join("http://h/", "/x"), "http://h/x");
/// ```
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", trailing_slash_trimmed(base), leading_slash(path))
}

/// Composes control and data URLs against a fixed [`ApiBase`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UrlBuilder {
    base: ApiBase,
}

impl UrlBuilder {
    /// Creates a builder for `base`.
    #[must_use]
    pub const fn new(base: ApiBase) -> Self {
        Self { base }
    }

    /// Returns the base the builder composes against.
    #[must_use]
    pub const fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Returns the control-namespace URL for `path`.
    #[must_use]
    pub fn control_url(&self, path: &str) -> String {
        join(self.base.as_str(), path)
    }

    /// Returns the data-namespace URL for `path` in `environment`.
    ///
    /// The environment segment is percent-encoded; the path is only given a
    /// leading slash.
    ///
    /// ```
    /// use cyberwatch::{ApiBase, UrlBuilder};
    ///
    /// let urls = UrlBuilder::new(ApiBase::new("http://h"));
    /// assert_eq!(urls.data_url("/foo", "stage"), "http://h/data/stage/foo");
    /// ```
    #[must_use]
    pub fn data_url(&self, path: &str, environment: &str) -> String {
        let encoded = utf8_percent_encode(environment, URI_COMPONENT);
        let data_path = format!("/data/{encoded}{}", leading_slash(path));
        join(self.base.as_str(), &data_path)
    }

    /// Returns the data-namespace URL for `path` in the currently selected
    /// environment.
    #[must_use]
    pub fn data_url_for<S: KeyValueStore>(
        &self,
        path: &str,
        selector: &EnvironmentSelector<S>,
    ) -> String {
        self.data_url(path, &selector.selected())
    }
}
