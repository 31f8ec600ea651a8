use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use shared::domain::Recipe;

/// Persistence adapter for the recipe collection: one JSON snapshot file,
/// read in full at startup and overwritten in full after every mutation.
/// No incremental diffs and no migration of older formats.
#[derive(Debug, Clone)]
pub struct SnapshotStorage {
    path: PathBuf,
}

impl SnapshotStorage {
    /// Binds the adapter to a snapshot path, creating the parent directory
    /// if it does not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_parent_dir_exists(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the previously stored collection, or `None` if no snapshot has
    /// been written yet. A snapshot that exists but cannot be read or parsed
    /// is an error; the caller decides how to surface it.
    pub fn load(&self) -> Result<Option<Vec<Recipe>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no recipe snapshot found");
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read snapshot '{}'", self.path.display()))?;
        let recipes: Vec<Recipe> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse snapshot '{}'", self.path.display()))?;
        debug!(count = recipes.len(), "loaded recipe snapshot");
        Ok(Some(recipes))
    }

    /// Overwrites the snapshot with the full collection. The new content is
    /// written to a sibling temp file first and renamed into place, so a
    /// failed write never leaves a truncated snapshot behind.
    pub fn save(&self, recipes: &[Recipe]) -> Result<()> {
        let text = serde_json::to_string_pretty(recipes).context("failed to serialize recipes")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, text)
            .with_context(|| format!("failed to write snapshot '{}'", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "failed to replace snapshot '{}' with '{}'",
                self.path.display(),
                tmp_path.display()
            )
        })?;
        debug!(count = recipes.len(), "saved recipe snapshot");
        Ok(())
    }
}

fn ensure_parent_dir_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for snapshot '{}'",
            parent.display(),
            path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
