//! The JSON mapping file consumed by `rebrand apply`.

use anyhow::{Context, Result};
use rebrand_core::{ColorMap, FontMap, ReplacementSession};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MappingFile {
    pub colors: ColorMap,
    pub fonts: FontMap,
    /// Resource uid (or media path) to replacement image file.
    pub images: BTreeMap<String, PathBuf>,
    /// Theme media path to replacement image file.
    pub theme_images: BTreeMap<String, PathBuf>,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl MappingFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping: {}", path.display()))?;
        let mut mapping: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid mapping file: {}", path.display()))?;
        mapping.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(mapping)
    }

    /// Read every referenced image into a fresh session. Relative image paths
    /// are resolved against the mapping file's directory.
    pub fn session(&self) -> Result<ReplacementSession> {
        let mut session = ReplacementSession::new();
        for (uid, file) in &self.images {
            session.persist_image(uid.clone(), self.read_image(file)?);
        }
        for (media_path, file) in &self.theme_images {
            session.persist_theme_image(media_path.clone(), self.read_image(file)?);
        }
        Ok(session)
    }

    fn read_image(&self, file: &Path) -> Result<Vec<u8>> {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.base_dir.join(file)
        };
        std::fs::read(&path).with_context(|| format!("Failed to read image: {}", path.display()))
    }
}
