//! End-to-end engine scenarios: resolution, caching, rendering

use secenv_core::{EnvMap, NormalizedDir, PromptEngine, Settings};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> EnvMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn settings_with_mappings(path: PathBuf, cache_ttl: Duration) -> Settings {
    Settings {
        mapping_path: Some(path),
        cache_ttl,
        ..Settings::default()
    }
}

mod rendering {
    use super::*;

    #[test]
    fn env_override_renders_green_dev_segment() {
        let engine = PromptEngine::new(Settings::default());
        let rendered = engine.render_info(
            &NormalizedDir::new("/anywhere"),
            &env(&[("SECENV_PROJECT", "test-project"), ("SECENV_CONFIG", "dev")]),
        );
        assert_eq!(rendered.as_deref(), Some("%F{green}[test-project/dev]%f"));
    }

    #[test]
    fn production_renders_red_with_same_structure() {
        let engine = PromptEngine::new(Settings::default());
        let rendered = engine.render_info(
            &NormalizedDir::new("/anywhere"),
            &env(&[
                ("SECENV_PROJECT", "test-project"),
                ("SECENV_CONFIG", "production"),
            ]),
        );
        assert_eq!(
            rendered.as_deref(),
            Some("%F{red}[test-project/production]%f")
        );
    }

    #[test]
    fn disable_switch_suppresses_output_for_valid_resolution() {
        let settings = Settings::from_env(&env(&[("SECENV_PROMPT_ENABLED", "false")]));
        let engine = PromptEngine::new(settings);
        assert_eq!(
            engine.render_info(
                &NormalizedDir::new("/anywhere"),
                &env(&[("SECENV_PROJECT", "test-project"), ("SECENV_CONFIG", "dev")]),
            ),
            None
        );
    }

    #[test]
    fn mapped_directory_renders_via_index() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mappings.yaml");
        std::fs::write(
            &path,
            "directories:\n  /srv/shop: { project: shop, config: staging }\n",
        )
        .unwrap();

        let engine = PromptEngine::new(settings_with_mappings(path, Duration::from_secs(5)));
        let rendered = engine.render_info(&NormalizedDir::new("/srv/shop/web"), &EnvMap::new());
        assert_eq!(rendered.as_deref(), Some("%F{yellow}[shop/staging]%f"));
    }
}

mod caching {
    use super::*;

    #[test]
    fn repeated_calls_within_ttl_return_identical_results() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mappings.yaml");
        std::fs::write(
            &path,
            "directories:\n  /srv/api: { project: api, config: dev }\n",
        )
        .unwrap();

        let engine = PromptEngine::new(settings_with_mappings(path, Duration::from_secs(60)));
        let cwd = NormalizedDir::new("/srv/api");
        let first = engine.resolve(&cwd, &EnvMap::new());
        let second = engine.resolve(&cwd, &EnvMap::new());
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn mapping_changes_are_invisible_within_ttl() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mappings.yaml");
        std::fs::write(
            &path,
            "directories:\n  /srv/api: { project: api, config: dev }\n",
        )
        .unwrap();

        let engine =
            PromptEngine::new(settings_with_mappings(path.clone(), Duration::from_secs(60)));
        let cwd = NormalizedDir::new("/srv/api");
        let before = engine.resolve(&cwd, &EnvMap::new()).unwrap();

        std::fs::write(
            &path,
            "directories:\n  /srv/api: { project: api, config: prod }\n",
        )
        .unwrap();

        let after = engine.resolve(&cwd, &EnvMap::new()).unwrap();
        assert_eq!(before, after);
        assert_eq!(after.config, "dev");
    }

    #[test]
    fn mapping_changes_become_visible_after_ttl_elapses() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mappings.yaml");
        std::fs::write(
            &path,
            "directories:\n  /srv/api: { project: api, config: dev }\n",
        )
        .unwrap();

        let engine = PromptEngine::new(settings_with_mappings(
            path.clone(),
            Duration::from_millis(30),
        ));
        let cwd = NormalizedDir::new("/srv/api");
        assert_eq!(engine.resolve(&cwd, &EnvMap::new()).unwrap().config, "dev");

        std::fs::write(
            &path,
            "directories:\n  /srv/api: { project: api, config: prod }\n",
        )
        .unwrap();
        std::thread::sleep(Duration::from_millis(60));

        assert_eq!(engine.resolve(&cwd, &EnvMap::new()).unwrap().config, "prod");
    }

    #[test]
    fn clear_cache_forces_a_fresh_lookup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mappings.yaml");
        std::fs::write(
            &path,
            "directories:\n  /srv/api: { project: api, config: dev }\n",
        )
        .unwrap();

        let engine =
            PromptEngine::new(settings_with_mappings(path.clone(), Duration::from_secs(60)));
        let cwd = NormalizedDir::new("/srv/api");
        assert_eq!(engine.resolve(&cwd, &EnvMap::new()).unwrap().config, "dev");

        std::fs::write(
            &path,
            "directories:\n  /srv/api: { project: api, config: uat }\n",
        )
        .unwrap();
        engine.clear_cache();

        assert_eq!(engine.resolve(&cwd, &EnvMap::new()).unwrap().config, "uat");
    }

    #[test]
    fn env_overrides_bypass_the_cache_entirely() {
        let engine = PromptEngine::new(Settings {
            mapping_path: None,
            ..Settings::default()
        });
        let cwd = NormalizedDir::new("/srv/api");

        // Prime the cache with a not-found for this directory
        assert!(engine.resolve(&cwd, &EnvMap::new()).is_none());

        // A fresh override is honored immediately
        let identity = engine
            .resolve(
                &cwd,
                &env(&[("SECENV_PROJECT", "api"), ("SECENV_CONFIG", "dev")]),
            )
            .unwrap();
        assert_eq!(identity.project, "api");
    }
}

mod production_warning {
    use super::*;

    #[test]
    fn warning_fires_for_production_when_enabled() {
        let settings = Settings::from_env(&env(&[("SECENV_PROD_WARNING", "true")]));
        let engine = PromptEngine::new(settings);
        let banner = engine
            .render_prod_warning(
                &NormalizedDir::new("/anywhere"),
                &env(&[("SECENV_PROJECT", "myproject"), ("SECENV_CONFIG", "prod")]),
            )
            .unwrap();
        assert!(banner.contains("PRODUCTION ENVIRONMENT"));
        assert!(banner.contains("myproject/prod"));
    }

    #[test]
    fn warning_stays_silent_when_disabled_or_not_production() {
        let engine = PromptEngine::new(Settings::default());
        assert_eq!(
            engine.render_prod_warning(
                &NormalizedDir::new("/anywhere"),
                &env(&[("SECENV_PROJECT", "myproject"), ("SECENV_CONFIG", "prod")]),
            ),
            None
        );

        let settings = Settings::from_env(&env(&[("SECENV_PROD_WARNING", "true")]));
        let engine = PromptEngine::new(settings);
        assert_eq!(
            engine.render_prod_warning(
                &NormalizedDir::new("/anywhere"),
                &env(&[("SECENV_PROJECT", "myproject"), ("SECENV_CONFIG", "dev")]),
            ),
            None
        );
    }

    #[test]
    fn custom_message_appears_verbatim() {
        let settings = Settings::from_env(&env(&[
            ("SECENV_PROD_WARNING", "true"),
            ("SECENV_PROD_WARNING_MESSAGE", "DANGER ZONE"),
        ]));
        let engine = PromptEngine::new(settings);
        let banner = engine
            .render_prod_warning(
                &NormalizedDir::new("/anywhere"),
                &env(&[("SECENV_PROJECT", "myproject"), ("SECENV_CONFIG", "prod")]),
            )
            .unwrap();
        assert!(banner.contains("DANGER ZONE"));
    }
}
