//! Prompt settings resolved from the process environment
//!
//! All configuration knobs are read once into an immutable [`Settings`]
//! snapshot at entry. Nothing downstream reads the environment ad hoc; the
//! resolver, classifier and formatter are pure functions of explicit
//! inputs. Invalid values never abort — they fall back to the documented
//! defaults with a warning.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::classify::{TierColors, TierPatterns};
use crate::error::Error;

/// Snapshot of the process environment, keyed by variable name
pub type EnvMap = HashMap<String, String>;

/// Identity override: project name, set by the secrets CLI wrapper
pub const ENV_PROJECT: &str = "SECENV_PROJECT";
/// Identity override: config name (primary)
pub const ENV_CONFIG: &str = "SECENV_CONFIG";
/// Identity override: config name (fallback, loses to `SECENV_CONFIG`)
pub const ENV_ENVIRONMENT: &str = "SECENV_ENVIRONMENT";

const ENV_ENABLED: &str = "SECENV_PROMPT_ENABLED";
const ENV_PREFIX: &str = "SECENV_PROMPT_PREFIX";
const ENV_SUFFIX: &str = "SECENV_PROMPT_SUFFIX";
const ENV_SEPARATOR: &str = "SECENV_PROMPT_SEPARATOR";
const ENV_FORMAT: &str = "SECENV_PROMPT_FORMAT";
const ENV_COLOR_DEV: &str = "SECENV_COLOR_DEV";
const ENV_COLOR_STAGING: &str = "SECENV_COLOR_STAGING";
const ENV_COLOR_PROD: &str = "SECENV_COLOR_PROD";
const ENV_COLOR_DEFAULT: &str = "SECENV_COLOR_DEFAULT";
const ENV_PATTERNS_PROD: &str = "SECENV_PATTERNS_PROD";
const ENV_PATTERNS_STAGING: &str = "SECENV_PATTERNS_STAGING";
const ENV_PATTERNS_DEV: &str = "SECENV_PATTERNS_DEV";
const ENV_PROD_WARNING: &str = "SECENV_PROD_WARNING";
const ENV_PROD_WARNING_MESSAGE: &str = "SECENV_PROD_WARNING_MESSAGE";
const ENV_CACHE_TTL: &str = "SECENV_CACHE_TTL";
const ENV_MAPPINGS: &str = "SECENV_MAPPINGS";

/// Default segment format template
pub const DEFAULT_FORMAT: &str = "%project%separator%config";
/// Default production warning marker phrase
pub const DEFAULT_PROD_WARNING_MESSAGE: &str = "PRODUCTION ENVIRONMENT";

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);

/// Production warning configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProdWarning {
    pub enabled: bool,
    pub message: String,
}

impl Default for ProdWarning {
    fn default() -> Self {
        Self {
            enabled: false,
            message: DEFAULT_PROD_WARNING_MESSAGE.to_string(),
        }
    }
}

/// Immutable prompt configuration, constructed once at entry
#[derive(Debug, Clone)]
pub struct Settings {
    /// Master switch; when off the prompt renders nothing
    pub enabled: bool,
    pub prefix: String,
    pub suffix: String,
    pub separator: String,
    /// Segment template with `%project`/`%config`/`%separator` tokens
    pub format: String,
    pub colors: TierColors,
    pub patterns: TierPatterns,
    pub cache_ttl: Duration,
    pub prod_warning: ProdWarning,
    /// Directory mapping file; `None` when no config dir is available
    pub mapping_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: "[".to_string(),
            suffix: "]".to_string(),
            separator: "/".to_string(),
            format: DEFAULT_FORMAT.to_string(),
            colors: TierColors::default(),
            patterns: TierPatterns::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
            prod_warning: ProdWarning::default(),
            mapping_path: default_mapping_path(),
        }
    }
}

impl Settings {
    /// Build settings from an explicit environment snapshot.
    ///
    /// Unset and empty variables keep their defaults. Unparsable booleans
    /// and TTLs fall back to defaults with a warning rather than failing
    /// the prompt.
    pub fn from_env(env: &EnvMap) -> Self {
        let defaults = Self::default();

        let colors = TierColors {
            dev: string_or(env, ENV_COLOR_DEV, defaults.colors.dev),
            staging: string_or(env, ENV_COLOR_STAGING, defaults.colors.staging),
            prod: string_or(env, ENV_COLOR_PROD, defaults.colors.prod),
            unknown: string_or(env, ENV_COLOR_DEFAULT, defaults.colors.unknown),
        };

        let patterns = TierPatterns {
            prod: patterns_or(env, ENV_PATTERNS_PROD, defaults.patterns.prod),
            staging: patterns_or(env, ENV_PATTERNS_STAGING, defaults.patterns.staging),
            dev: patterns_or(env, ENV_PATTERNS_DEV, defaults.patterns.dev),
        };

        let prod_warning = ProdWarning {
            enabled: bool_or(env, ENV_PROD_WARNING, false),
            message: string_or(env, ENV_PROD_WARNING_MESSAGE, defaults.prod_warning.message),
        };

        Self {
            enabled: bool_or(env, ENV_ENABLED, true),
            prefix: string_or(env, ENV_PREFIX, defaults.prefix),
            suffix: string_or(env, ENV_SUFFIX, defaults.suffix),
            separator: string_or(env, ENV_SEPARATOR, defaults.separator),
            format: string_or(env, ENV_FORMAT, defaults.format),
            colors,
            patterns,
            cache_ttl: ttl_or(env, ENV_CACHE_TTL, defaults.cache_ttl),
            prod_warning,
            mapping_path: env_value(env, ENV_MAPPINGS)
                .map(PathBuf::from)
                .or(defaults.mapping_path),
        }
    }
}

/// Collect the current process environment into an [`EnvMap`].
pub fn snapshot_env() -> EnvMap {
    std::env::vars().collect()
}

fn default_mapping_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("secenv").join("mappings.yaml"))
}

/// Non-empty value of a variable, with empty strings treated as unset
fn env_value<'a>(env: &'a EnvMap, key: &str) -> Option<&'a str> {
    env.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn string_or(env: &EnvMap, key: &str, default: String) -> String {
    env_value(env, key).map(str::to_string).unwrap_or(default)
}

fn bool_or(env: &EnvMap, key: &str, default: bool) -> bool {
    let Some(raw) = env_value(env, key) else {
        return default;
    };
    match parse_bool(key, raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "falling back to default ({default})");
            default
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::Config {
            name: key.to_string(),
            message: format!("expected a boolean, got {raw:?}"),
        }),
    }
}

fn ttl_or(env: &EnvMap, key: &str, default: Duration) -> Duration {
    let Some(raw) = env_value(env, key) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(err) => {
            let err = Error::Config {
                name: key.to_string(),
                message: format!("expected whole seconds, got {raw:?}: {err}"),
            };
            tracing::warn!(%err, "falling back to default TTL");
            default
        }
    }
}

/// Comma-separated pattern list; whitespace trimmed, case-folded,
/// empty items dropped. An override that yields no patterns keeps the
/// defaults.
fn patterns_or(env: &EnvMap, key: &str, default: Vec<String>) -> Vec<String> {
    let Some(raw) = env_value(env, key) else {
        return default;
    };
    let patterns: Vec<String> = raw
        .split(',')
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    if patterns.is_empty() {
        tracing::warn!(key, "pattern override is empty, keeping defaults");
        default
    } else {
        patterns
    }
}
