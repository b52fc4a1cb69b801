//! Resolution and caching engine for the secenv prompt segment
//!
//! Given a working directory and a snapshot of the process environment,
//! this crate determines the active secrets-manager (project, config)
//! pair, classifies the config into a risk tier, and renders it into a
//! prompt segment string — fast enough to run on every prompt redraw.
//!
//! # Pipeline
//!
//! ```text
//!   PromptEngine
//!        |
//!   env override? --- yes --> identity
//!        | no
//!   ResolutionCache (TTL, keyed by normalized cwd)
//!        | miss
//!   Resolver -> DirIndex (longest-prefix lookup over the mapping file)
//!        |
//!   TierPatterns::classify -> RiskTier -> color token
//!        |
//!   format::render_segment -> "%F{green}[api/dev]%f"
//! ```
//!
//! Nothing here performs network I/O or talks to the secrets CLI; the only
//! external input is the declarative mapping file, and a missing or broken
//! file degrades to an empty lookup rather than an error. The engine never
//! propagates a failure into the prompt.
//!
//! # Example
//!
//! ```
//! use secenv_core::{EnvMap, NormalizedDir, PromptEngine, Settings};
//!
//! let mut env = EnvMap::new();
//! env.insert("SECENV_PROJECT".into(), "api".into());
//! env.insert("SECENV_CONFIG".into(), "dev".into());
//!
//! let engine = PromptEngine::new(Settings::from_env(&env));
//! let segment = engine.render_info(&NormalizedDir::new("/srv/api"), &env);
//! assert_eq!(segment.as_deref(), Some("%F{green}[api/dev]%f"));
//! ```

pub mod cache;
pub mod classify;
pub mod engine;
pub mod error;
pub mod format;
pub mod index;
pub mod path;
pub mod resolve;
pub mod settings;

pub use cache::ResolutionCache;
pub use classify::{RiskTier, TierColors, TierPatterns, color_code};
pub use engine::PromptEngine;
pub use error::{Error, Result};
pub use index::{ConfigMapping, DirIndex, MappingDocument, MappingFormat, MappingTarget};
pub use path::NormalizedDir;
pub use resolve::{Resolver, ResolvedIdentity, Source, env_override};
pub use settings::{EnvMap, ProdWarning, Settings, snapshot_env};
