//! Directory mapping index
//!
//! The mapping document declares which project/config pair is active under
//! each directory subtree:
//!
//! ```yaml
//! directories:
//!   /home/user/work/api: { project: api, config: prod }
//!   /home/user/work/api/sandbox:
//!     project: api
//!     config: dev
//! ```
//!
//! Format is detected from the file extension (`.yaml`/`.yml`, `.toml`,
//! `.json`). Document order is preserved while parsing; after path
//! normalization, duplicate directory keys resolve first-inserted-wins.
//! Lookups select the entry whose directory is the longest boundary-aware
//! prefix of the query.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::error::{Error, Result};
use crate::path::NormalizedDir;

/// A project/config pair, the value side of a mapping entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingTarget {
    pub project: String,
    pub config: String,
}

/// Supported mapping document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingFormat {
    Yaml,
    Toml,
    Json,
}

impl MappingFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Json => "JSON",
        }
    }
}

/// Raw parsed mapping document, before normalization
#[derive(Debug, Default, Deserialize)]
pub struct MappingDocument {
    #[serde(default)]
    directories: DirectoryEntries,
}

impl MappingDocument {
    /// Parse a mapping document from text in the given format.
    pub fn parse(content: &str, format: MappingFormat, path: &Path) -> Result<Self> {
        let parsed = match format {
            MappingFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            MappingFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            MappingFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::MappingParse {
            path: path.to_path_buf(),
            format: format.name().to_string(),
            message,
        })
    }

    /// Entries in document order, unnormalized.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MappingTarget)> {
        self.directories.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Ordered entry list deserialized from the `directories` map.
///
/// A plain `HashMap` would lose document order, which the
/// first-inserted-wins duplicate rule depends on, so the map is visited
/// manually into a `Vec`.
#[derive(Debug, Default)]
struct DirectoryEntries(Vec<(String, MappingTarget)>);

impl<'de> Deserialize<'de> for DirectoryEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DirectoryEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of directory paths to project/config pairs")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, MappingTarget>()? {
                    entries.push((key, value));
                }
                Ok(DirectoryEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// One normalized mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMapping {
    pub directory: NormalizedDir,
    pub project: String,
    pub config: String,
}

/// Longest-prefix lookup index over the directory mappings
#[derive(Debug, Default, Clone)]
pub struct DirIndex {
    entries: Vec<ConfigMapping>,
}

impl DirIndex {
    /// An index with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and strictly validate a mapping file.
    ///
    /// Fails on unreadable files, malformed documents, and entries with an
    /// empty project or config. Duplicate directories (after
    /// normalization) are not an error: the first entry wins and the rest
    /// are logged and dropped.
    pub fn load(path: &Path) -> Result<Self> {
        let format = MappingFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let document = MappingDocument::parse(&content, format, path)?;
        Self::from_document(&document)
    }

    /// Load a mapping file, degrading to an empty index on any failure.
    ///
    /// This is the hot-path constructor: a missing or broken mapping file
    /// must never block the prompt, so problems are logged and lookups
    /// simply miss. Use [`DirIndex::load`] to surface the diagnostics.
    pub fn load_or_empty(path: &Path) -> Self {
        if !path.is_file() {
            tracing::debug!(?path, "no mapping file, using empty index");
            return Self::empty();
        }
        match Self::load(path) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(%err, ?path, "failed to load mappings, using empty index");
                Self::empty()
            }
        }
    }

    /// Build an index from a parsed document.
    pub fn from_document(document: &MappingDocument) -> Result<Self> {
        let mut entries: Vec<ConfigMapping> = Vec::new();
        for (raw_dir, target) in document.entries() {
            if target.project.is_empty() || target.config.is_empty() {
                return Err(Error::MappingInvalid {
                    directory: raw_dir.to_string(),
                    message: "project and config must both be non-empty".to_string(),
                });
            }
            let directory = NormalizedDir::new(raw_dir);
            if entries.iter().any(|e| e.directory == directory) {
                tracing::warn!(%directory, "duplicate mapping entry, keeping the first");
                continue;
            }
            entries.push(ConfigMapping {
                directory,
                project: target.project.clone(),
                config: target.config.clone(),
            });
        }
        Ok(Self { entries })
    }

    /// Find the entry with the longest directory prefix covering `dir`.
    pub fn lookup(&self, dir: &NormalizedDir) -> Option<&ConfigMapping> {
        let mut best: Option<&ConfigMapping> = None;
        for entry in &self.entries {
            if !entry.directory.covers(dir) {
                continue;
            }
            // Strict > keeps the earlier entry on equal-length matches
            if best.is_none_or(|b| entry.directory.as_str().len() > b.directory.as_str().len()) {
                best = Some(entry);
            }
        }
        match best {
            Some(entry) => {
                tracing::debug!(%dir, directory = %entry.directory, "mapping hit");
                Some(entry)
            }
            None => {
                tracing::debug!(%dir, "no mapping covers directory");
                None
            }
        }
    }

    /// All normalized entries, in load order.
    pub fn entries(&self) -> &[ConfigMapping] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
