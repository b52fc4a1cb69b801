//! Prompt rendering commands: info, warning, segment
//!
//! These are the hot-path commands invoked from the shell prompt hook.
//! Their stdout is embedded directly into the prompt, so they print either
//! a single segment line or nothing at all — diagnostics go to tracing on
//! stderr. Callers distinguish "nothing to show" from "nothing mapped"
//! purely by the exit code.

use std::path::Path;

use secenv_core::{EnvMap, NormalizedDir, PromptEngine, Settings};

use crate::error::Result;

/// Exit code for a successful render (including "disabled, nothing shown")
pub const EXIT_OK: i32 = 0;
/// Exit code for "no project/config is active here"
pub const EXIT_NOT_FOUND: i32 = 1;

/// Run the info command: print the colored prompt segment
pub fn run_info(dir: &Path, env: &EnvMap) -> Result<i32> {
    let settings = Settings::from_env(env);
    if !settings.enabled {
        return Ok(EXIT_OK);
    }
    let engine = PromptEngine::new(settings);
    match engine.render_info(&NormalizedDir::new(dir), env) {
        Some(segment) => {
            println!("{segment}");
            Ok(EXIT_OK)
        }
        // The switch is on, so an empty render means nothing resolved
        None => Ok(EXIT_NOT_FOUND),
    }
}

/// Run the warning command: print the production warning banner, if due
pub fn run_warning(dir: &Path, env: &EnvMap) -> Result<i32> {
    let engine = PromptEngine::new(Settings::from_env(env));
    if let Some(banner) = engine.render_prod_warning(&NormalizedDir::new(dir), env) {
        println!("{banner}");
    }
    Ok(EXIT_OK)
}

/// Run the segment command: print body and numeric color, tab-separated
pub fn run_segment(dir: &Path, env: &EnvMap) -> Result<i32> {
    let settings = Settings::from_env(env);
    if !settings.enabled {
        return Ok(EXIT_OK);
    }
    let engine = PromptEngine::new(settings);
    match engine.segment_parts(&NormalizedDir::new(dir), env) {
        Some((body, code)) => {
            println!("{body}\t{code}");
            Ok(EXIT_OK)
        }
        None => Ok(EXIT_NOT_FOUND),
    }
}
