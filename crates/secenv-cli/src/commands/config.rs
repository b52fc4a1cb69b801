//! Config command implementation

use colored::Colorize;
use secenv_core::{DirIndex, EnvMap, Settings};

use crate::error::Result;

/// Run the config command: dump the effective settings
pub fn run_config(env: &EnvMap) -> Result<i32> {
    let settings = Settings::from_env(env);

    println!("{}", "Secenv Prompt Configuration".bold());
    println!();
    println!("{}:   {}", "Enabled".dimmed(), settings.enabled);
    println!("{}:    {:?}", "Prefix".dimmed(), settings.prefix);
    println!("{}:    {:?}", "Suffix".dimmed(), settings.suffix);
    println!("{}: {:?}", "Separator".dimmed(), settings.separator);
    println!("{}:    {}", "Format".dimmed(), settings.format);
    println!(
        "{}: {}s",
        "Cache TTL".dimmed(),
        settings.cache_ttl.as_secs()
    );
    println!();

    println!("{}:", "Environment Colors".bold());
    println!("  dev:      {}", settings.colors.dev.cyan());
    println!("  staging:  {}", settings.colors.staging.cyan());
    println!("  prod:     {}", settings.colors.prod.cyan());
    println!("  unknown:  {}", settings.colors.unknown.cyan());
    println!();

    println!("{}:", "Risk Patterns".bold());
    println!("  prod:     {}", settings.patterns.prod.join(", "));
    println!("  staging:  {}", settings.patterns.staging.join(", "));
    println!("  dev:      {}", settings.patterns.dev.join(", "));
    println!();

    println!("{}:", "Production Warning".bold());
    println!("  Enabled:  {}", settings.prod_warning.enabled);
    println!("  Message:  {}", settings.prod_warning.message);
    println!();

    println!("{}:", "Mappings".bold());
    match &settings.mapping_path {
        Some(path) if path.is_file() => {
            let index = DirIndex::load_or_empty(path);
            println!(
                "  {} ({} directories mapped)",
                path.display(),
                index.len()
            );
        }
        Some(path) => {
            println!("  {} ({})", path.display(), "not found".yellow());
        }
        None => {
            println!(
                "  {} (set {} to configure)",
                "None".dimmed(),
                "SECENV_MAPPINGS".cyan()
            );
        }
    }

    Ok(0)
}
