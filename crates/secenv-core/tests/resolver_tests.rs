//! Tests for identity resolution precedence

use secenv_core::{DirIndex, EnvMap, NormalizedDir, Resolver, Source};
use std::collections::HashMap;
use tempfile::TempDir;

fn write_mappings(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("mappings.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

fn env(pairs: &[(&str, &str)]) -> EnvMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

mod precedence_laws {
    use super::*;

    #[test]
    fn override_wins_even_when_index_has_a_match() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_mappings(
            &temp_dir,
            "directories:\n  /srv/api: { project: mapped, config: prod }\n",
        );
        let resolver = Resolver::new(DirIndex::load(&path).unwrap());

        let identity = resolver
            .resolve(
                &NormalizedDir::new("/srv/api"),
                &env(&[
                    ("SECENV_PROJECT", "override"),
                    ("SECENV_CONFIG", "dev"),
                ]),
            )
            .unwrap();

        assert_eq!(identity.project, "override");
        assert_eq!(identity.config, "dev");
        assert_eq!(identity.source, Source::EnvOverride);
    }

    #[test]
    fn lone_project_variable_never_short_circuits() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_mappings(
            &temp_dir,
            "directories:\n  /srv/api: { project: mapped, config: uat }\n",
        );
        let resolver = Resolver::new(DirIndex::load(&path).unwrap());

        // Falls through to the index...
        let identity = resolver
            .resolve(
                &NormalizedDir::new("/srv/api"),
                &env(&[("SECENV_PROJECT", "override")]),
            )
            .unwrap();
        assert_eq!(identity.project, "mapped");
        assert_eq!(identity.source, Source::DirectoryIndex);

        // ...and to not-found when the index misses too.
        assert!(resolver
            .resolve(
                &NormalizedDir::new("/elsewhere"),
                &env(&[("SECENV_PROJECT", "override")]),
            )
            .is_none());
    }

    #[test]
    fn lone_config_variable_never_short_circuits() {
        let resolver = Resolver::new(DirIndex::empty());
        for key in ["SECENV_CONFIG", "SECENV_ENVIRONMENT"] {
            assert!(resolver
                .resolve(&NormalizedDir::new("/anywhere"), &env(&[(key, "dev")]))
                .is_none());
        }
    }
}

mod directory_lookup {
    use super::*;

    #[test]
    fn nested_directories_resolve_to_the_deepest_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_mappings(
            &temp_dir,
            r#"
directories:
  /work: { project: umbrella, config: dev }
  /work/billing: { project: billing, config: prod }
"#,
        );
        let resolver = Resolver::new(DirIndex::load(&path).unwrap());

        let identity = resolver
            .resolve(&NormalizedDir::new("/work/billing/src"), &HashMap::new())
            .unwrap();
        assert_eq!(identity.project, "billing");

        let identity = resolver
            .resolve(&NormalizedDir::new("/work/other"), &HashMap::new())
            .unwrap();
        assert_eq!(identity.project, "umbrella");
    }

    #[test]
    fn query_paths_are_normalized_before_matching() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_mappings(
            &temp_dir,
            "directories:\n  /srv/api: { project: api, config: dev }\n",
        );
        let resolver = Resolver::new(DirIndex::load(&path).unwrap());

        let identity = resolver
            .resolve(&NormalizedDir::new("/srv/api/"), &HashMap::new())
            .unwrap();
        assert_eq!(identity.project, "api");
    }

    #[test]
    fn broken_mapping_file_degrades_to_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_mappings(&temp_dir, "directories: [this, is, not, a, map]\n");
        let resolver = Resolver::from_mapping_path(Some(&path));

        assert!(resolver.index().is_empty());
        assert!(resolver
            .resolve(&NormalizedDir::new("/srv/api"), &HashMap::new())
            .is_none());
    }
}
