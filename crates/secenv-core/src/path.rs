//! Normalized directory paths for prefix matching

use std::path::Path;

/// A directory path normalized for use as a lookup key.
///
/// Backslashes are converted to forward slashes and trailing slashes are
/// trimmed, so that `/srv/app/` and `/srv/app` compare equal. Symlinks are
/// deliberately not resolved; matching is purely textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedDir {
    /// Internal representation always uses forward slashes, no trailing slash
    inner: String,
}

impl NormalizedDir {
    /// Create a new NormalizedDir from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        let mut normalized = raw.replace('\\', "/");
        while normalized.len() > 1 && normalized.ends_with('/') {
            normalized.pop();
        }
        Self { inner: normalized }
    }

    /// Get the normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Check whether `other` is this directory or one of its descendants.
    ///
    /// The test is boundary-aware: `/srv/app` covers `/srv/app` and
    /// `/srv/app/api`, but never `/srv/app-legacy`.
    pub fn covers(&self, other: &NormalizedDir) -> bool {
        if self.inner == "/" {
            return other.inner.starts_with('/');
        }
        match other.inner.strip_prefix(self.inner.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl std::fmt::Display for NormalizedDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedDir {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedDir {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedDir {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<std::path::PathBuf> for NormalizedDir {
    fn from(p: std::path::PathBuf) -> Self {
        Self::new(p)
    }
}
