//! Prompt entry point
//!
//! `PromptEngine` wires the pipeline together: settings snapshot,
//! environment override check, TTL-cached directory resolution, risk
//! classification and segment formatting. One engine instance is meant to
//! live as long as its host (a CLI invocation or an embedding process) and
//! be called once per prompt redraw.

use crate::cache::ResolutionCache;
use crate::classify::{RiskTier, color_code};
use crate::format;
use crate::path::NormalizedDir;
use crate::resolve::{Resolver, ResolvedIdentity, env_override};
use crate::settings::{EnvMap, Settings};

/// Orchestrates resolution, classification and formatting
#[derive(Debug)]
pub struct PromptEngine {
    settings: Settings,
    cache: ResolutionCache,
}

impl PromptEngine {
    /// Create an engine from a settings snapshot.
    pub fn new(settings: Settings) -> Self {
        let cache = ResolutionCache::new(settings.cache_ttl);
        Self { settings, cache }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Drop all cached resolutions.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Resolve the active identity for a working directory.
    ///
    /// Environment overrides are checked fresh on every call; only the
    /// directory-index path (file read, parse, prefix lookup) is memoized,
    /// keyed by the normalized directory. Within the TTL a changed mapping
    /// file is deliberately not observed.
    pub fn resolve(&self, cwd: &NormalizedDir, env: &EnvMap) -> Option<ResolvedIdentity> {
        if let Some(identity) = env_override(env) {
            return Some(identity);
        }
        self.cache.get_or_insert_with(cwd, || {
            let resolver = Resolver::from_mapping_path(self.settings.mapping_path.as_deref());
            resolver.resolve_directory(cwd)
        })
    }

    /// Classify an identity using the configured pattern sets.
    pub fn classify(&self, identity: &ResolvedIdentity) -> RiskTier {
        self.settings.patterns.classify(&identity.config)
    }

    /// Render the colored prompt segment.
    ///
    /// `None` means nothing to show — the enable switch is off or nothing
    /// resolved. Never an error; the prompt must stay intact.
    pub fn render_info(&self, cwd: &NormalizedDir, env: &EnvMap) -> Option<String> {
        if !self.settings.enabled {
            tracing::debug!("prompt disabled, rendering nothing");
            return None;
        }
        let identity = self.resolve(cwd, env)?;
        let tier = self.classify(&identity);
        Some(format::render_segment(&identity, tier, &self.settings))
    }

    /// Render the production warning banner, or nothing.
    ///
    /// Gated by its own flag, independent of the prompt enable switch.
    pub fn render_prod_warning(&self, cwd: &NormalizedDir, env: &EnvMap) -> Option<String> {
        let identity = self.resolve(cwd, env)?;
        let tier = self.classify(&identity);
        format::render_prod_warning(&identity, tier, &self.settings)
    }

    /// The undecorated segment pieces for palette-limited renderers:
    /// the decorated body plus the numeric color code for the tier.
    pub fn segment_parts(&self, cwd: &NormalizedDir, env: &EnvMap) -> Option<(String, String)> {
        if !self.settings.enabled {
            return None;
        }
        let identity = self.resolve(cwd, env)?;
        let tier = self.classify(&identity);
        let body = format::decorated_body(&identity, &self.settings);
        let code = color_code(self.settings.colors.token(tier));
        Some((body, code))
    }
}
