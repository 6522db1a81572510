//! Local match cache.
//!
//! Matches are static entities, so every fetched match is kept as a JSON
//! file under `<root>/matches/<REGION>/<id>.json` and served from disk on
//! the next request. Writes go through a temp file renamed into place so a
//! concurrent reader never sees a half-written entry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{MatchReference, Region};

#[derive(Debug)]
pub enum CacheError {
    Io(std::io::Error),
    InvalidEntry { path: PathBuf, detail: String },
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::Io(e) => write!(f, "cache IO error: {}", e),
            CacheError::InvalidEntry { path, detail } => {
                write!(f, "invalid cache entry {}: {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for CacheError {}

impl From<std::io::Error> for CacheError {
    fn from(e: std::io::Error) -> Self {
        CacheError::Io(e)
    }
}

/// Default cache root: the platform cache directory plus `fetcher`.
pub fn default_root() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("fetcher"))
}

pub struct MatchCache {
    root: PathBuf,
}

impl MatchCache {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, region: Region, id: i64) -> PathBuf {
        self.root
            .join("matches")
            .join(region.token())
            .join(format!("{}.json", id))
    }

    /// Look up a cached match. `Ok(None)` means a clean miss; an entry that
    /// exists but no longer parses is an error, not a miss.
    pub fn get(&self, region: Region, id: i64) -> Result<Option<MatchReference>, CacheError> {
        let path = self.entry_path(region, id);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let reference = serde_json::from_str(&content).map_err(|e| CacheError::InvalidEntry {
            path: path.clone(),
            detail: e.to_string(),
        })?;
        Ok(Some(reference))
    }

    /// Store a match, replacing any previous entry for the same id.
    pub fn put(&self, reference: &MatchReference) -> Result<PathBuf, CacheError> {
        let path = self.entry_path(reference.region, reference.id);
        let dir = path.parent().expect("entry path always has a parent");
        fs::create_dir_all(dir)?;

        let content = serde_json::to_string_pretty(reference)
            .expect("domain match always serializes");
        let tmp = dir.join(format!(".{}.tmp", reference.id));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }

    /// All cached matches, ordered by (region, match id). An entry that
    /// fails to parse aborts the listing.
    pub fn entries(&self, region: Option<Region>) -> Result<Vec<MatchReference>, CacheError> {
        let matches_dir = self.root.join("matches");
        if !matches_dir.exists() {
            return Ok(Vec::new());
        }

        let mut regions: Vec<Region> = match region {
            Some(r) => vec![r],
            None => {
                let mut found = Vec::new();
                for entry in fs::read_dir(&matches_dir)? {
                    let entry = entry?;
                    if let Some(r) = entry.file_name().to_str().and_then(Region::parse) {
                        found.push(r);
                    }
                }
                found
            }
        };
        regions.sort_by_key(|r| r.token());

        let mut references = Vec::new();
        for r in regions {
            let region_dir = matches_dir.join(r.token());
            if !region_dir.exists() {
                continue;
            }

            let mut ids = Vec::new();
            for entry in fs::read_dir(&region_dir)? {
                let entry = entry?;
                let name = entry.file_name();
                let Some(name) = name.to_str() else { continue };
                if let Some(id) = name.strip_suffix(".json").and_then(|s| s.parse::<i64>().ok())
                {
                    ids.push(id);
                }
            }
            ids.sort();

            for id in ids {
                let path = region_dir.join(format!("{}.json", id));
                let content = fs::read_to_string(&path)?;
                let reference =
                    serde_json::from_str(&content).map_err(|e| CacheError::InvalidEntry {
                        path: path.clone(),
                        detail: e.to_string(),
                    })?;
                references.push(reference);
            }
        }
        Ok(references)
    }
}
