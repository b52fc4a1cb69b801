//! Prompt segment formatting
//!
//! Rendering emits zsh prompt escapes (`%F{color}` / `%f`) as the color
//! markers; actual terminal escape handling belongs to the shell. The
//! default rendering of project `api` / config `dev` is
//! `%F{green}[api/dev]%f`.

use crate::classify::RiskTier;
use crate::resolve::ResolvedIdentity;
use crate::settings::Settings;

/// Substitute `%project`, `%config` and `%separator` in a template.
///
/// Single-pass and order-independent: tokens introduced by substituted
/// values are not re-expanded, and unknown `%` tokens are left untouched.
pub fn substitute(template: &str, identity: &ResolvedIdentity, separator: &str) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("%project") {
            out.push_str(&identity.project);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%config") {
            out.push_str(&identity.config);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%separator") {
            out.push_str(separator);
            rest = after;
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// The segment body: the format template applied to an identity.
pub fn segment_body(identity: &ResolvedIdentity, settings: &Settings) -> String {
    substitute(&settings.format, identity, &settings.separator)
}

/// The decorated segment body, wrapped in prefix and suffix.
pub fn decorated_body(identity: &ResolvedIdentity, settings: &Settings) -> String {
    format!(
        "{}{}{}",
        settings.prefix,
        segment_body(identity, settings),
        settings.suffix
    )
}

/// Wrap text in zsh color start/end markers.
pub fn color_wrap(text: &str, color: &str) -> String {
    format!("%F{{{color}}}{text}%f")
}

/// Render the full colored prompt segment for an identity.
pub fn render_segment(identity: &ResolvedIdentity, tier: RiskTier, settings: &Settings) -> String {
    color_wrap(&decorated_body(identity, settings), settings.colors.token(tier))
}

/// Render the production warning banner, or nothing.
///
/// Emits only when the warning is enabled and the tier is production; the
/// banner carries the configured marker phrase and the literal
/// `project/config` pair.
pub fn render_prod_warning(
    identity: &ResolvedIdentity,
    tier: RiskTier,
    settings: &Settings,
) -> Option<String> {
    if !settings.prod_warning.enabled || tier != RiskTier::Prod {
        return None;
    }
    Some(format!(
        "⚠️  {}: {}/{}",
        settings.prod_warning.message, identity.project, identity.config
    ))
}
