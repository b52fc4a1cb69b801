//! Risk-tier classification for config names
//!
//! A config name like `prod-eu` or `dev_personal` is classified into a risk
//! tier by case-insensitive substring matching against per-tier pattern
//! sets. Tiers are checked in a fixed priority order (prod, then staging,
//! then dev) so that ambiguous names such as `prod-test` land on the most
//! dangerous tier they could belong to.

/// Risk tier derived from a config name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Dev,
    Staging,
    Prod,
    Unknown,
}

impl RiskTier {
    /// Lowercase tier name, as used in configuration keys and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Dev => "dev",
            RiskTier::Staging => "staging",
            RiskTier::Prod => "prod",
            RiskTier::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tier pattern sets used by classification
///
/// Patterns are stored case-folded. A config name matches a tier when any
/// of the tier's patterns occurs as a substring of the folded name, so the
/// default `prd` also catches `prd-us` and `prod` catches `prod-eu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPatterns {
    pub prod: Vec<String>,
    pub staging: Vec<String>,
    pub dev: Vec<String>,
}

impl Default for TierPatterns {
    fn default() -> Self {
        Self {
            prod: to_owned(&["prod", "production", "live", "prd"]),
            staging: to_owned(&["staging", "stag", "test", "uat"]),
            dev: to_owned(&["dev", "development", "local"]),
        }
    }
}

fn to_owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

impl TierPatterns {
    /// Classify a config name into a risk tier.
    ///
    /// Pure and total: every input maps to exactly one tier, with
    /// `Unknown` as the fallthrough. Matching is case-insensitive and
    /// evaluated prod > staging > dev, first match wins.
    pub fn classify(&self, config: &str) -> RiskTier {
        let folded = config.to_lowercase();
        if matches_any(&self.prod, &folded) {
            RiskTier::Prod
        } else if matches_any(&self.staging, &folded) {
            RiskTier::Staging
        } else if matches_any(&self.dev, &folded) {
            RiskTier::Dev
        } else {
            RiskTier::Unknown
        }
    }

    /// Check whether a config name is production-tier.
    pub fn is_production(&self, config: &str) -> bool {
        self.classify(config) == RiskTier::Prod
    }
}

fn matches_any(patterns: &[String], folded: &str) -> bool {
    patterns
        .iter()
        .any(|p| !p.is_empty() && folded.contains(p.as_str()))
}

/// Color names assigned to each risk tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierColors {
    pub dev: String,
    pub staging: String,
    pub prod: String,
    pub unknown: String,
}

impl Default for TierColors {
    fn default() -> Self {
        Self {
            dev: "green".to_string(),
            staging: "yellow".to_string(),
            prod: "red".to_string(),
            unknown: "cyan".to_string(),
        }
    }
}

impl TierColors {
    /// Color token for a tier
    pub fn token(&self, tier: RiskTier) -> &str {
        match tier {
            RiskTier::Dev => &self.dev,
            RiskTier::Staging => &self.staging,
            RiskTier::Prod => &self.prod,
            RiskTier::Unknown => &self.unknown,
        }
    }
}

/// Convert a symbolic color name to its numeric palette code.
///
/// Inputs that are not one of the known names pass through unchanged;
/// already-numeric codes and custom names are the caller's problem, not an
/// error.
pub fn color_code(name: &str) -> String {
    let code = match name.to_ascii_lowercase().as_str() {
        "red" => "1",
        "green" => "2",
        "yellow" => "3",
        "blue" => "4",
        "magenta" => "5",
        "cyan" => "6",
        "white" => "7",
        _ => return name.to_string(),
    };
    code.to_string()
}
