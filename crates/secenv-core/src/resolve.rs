//! Identity resolution with fixed precedence
//!
//! The active (project, config) pair is determined by checking sources in
//! order, first success wins:
//!
//! 1. Environment override — `SECENV_PROJECT` plus a config taken from
//!    `SECENV_CONFIG` or, failing that, `SECENV_ENVIRONMENT`.
//! 2. Directory mapping index, longest prefix match on the working
//!    directory.
//!
//! Neither source producing a pair is an ordinary outcome (`None`), not an
//! error.

use std::path::Path;

use crate::index::DirIndex;
use crate::path::NormalizedDir;
use crate::settings::{ENV_CONFIG, ENV_ENVIRONMENT, ENV_PROJECT, EnvMap};

/// Which source produced a resolved identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    EnvOverride,
    DirectoryIndex,
}

/// The active project/config pair for a working directory
///
/// Both fields are always non-empty; a partial pair never resolves.
/// Ephemeral by design — produced per resolution, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub project: String,
    pub config: String,
    pub source: Source,
}

/// Resolve an identity from environment overrides alone.
///
/// Requires the project variable and one of the config variables, with
/// `SECENV_CONFIG` beating `SECENV_ENVIRONMENT` when both are set. A lone
/// project or lone config is not a valid override — both or neither.
/// Empty-string values count as unset.
pub fn env_override(env: &EnvMap) -> Option<ResolvedIdentity> {
    let project = non_empty(env, ENV_PROJECT)?;
    let config = non_empty(env, ENV_CONFIG).or_else(|| non_empty(env, ENV_ENVIRONMENT))?;
    tracing::debug!(project, config, "identity from environment override");
    Some(ResolvedIdentity {
        project: project.to_string(),
        config: config.to_string(),
        source: Source::EnvOverride,
    })
}

fn non_empty<'a>(env: &'a EnvMap, key: &str) -> Option<&'a str> {
    env.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Resolves identities against a loaded directory index
#[derive(Debug, Default)]
pub struct Resolver {
    index: DirIndex,
}

impl Resolver {
    /// Create a resolver over an already-loaded index.
    pub fn new(index: DirIndex) -> Self {
        Self { index }
    }

    /// Create a resolver by (leniently) loading the mapping file.
    ///
    /// `None`, a missing file, or a broken file all yield a resolver with
    /// an empty index — lookups miss, the prompt stays alive.
    pub fn from_mapping_path(path: Option<&Path>) -> Self {
        let index = match path {
            Some(path) => DirIndex::load_or_empty(path),
            None => DirIndex::empty(),
        };
        Self::new(index)
    }

    /// Full precedence resolution: env override, then directory index.
    pub fn resolve(&self, cwd: &NormalizedDir, env: &EnvMap) -> Option<ResolvedIdentity> {
        env_override(env).or_else(|| self.resolve_directory(cwd))
    }

    /// Directory-index resolution only, skipping the env override layer.
    pub fn resolve_directory(&self, cwd: &NormalizedDir) -> Option<ResolvedIdentity> {
        self.index.lookup(cwd).map(|entry| ResolvedIdentity {
            project: entry.project.clone(),
            config: entry.config.clone(),
            source: Source::DirectoryIndex,
        })
    }

    /// The index backing this resolver.
    pub fn index(&self) -> &DirIndex {
        &self.index
    }
}
