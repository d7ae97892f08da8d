use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::player::Player;
use crate::core::constants::SAVE_FILE_NAME;

/// Persisted subset of the game state.
///
/// Combat is never part of a snapshot: loading one always lands the player
/// out of combat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSnapshot {
    pub player: Player,
    pub upgrade_price: u32,
    pub zone_index: usize,
    /// Absent in older saves; restore falls back to the default difficulty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl SaveSnapshot {
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No saved game found.")]
    NotFound,

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("save data is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and writes the JSON save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager pointing at the platform config directory.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "glimmering").ok_or(SaveError::NoConfigDir)?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Creates a SaveManager for an explicit file path.
    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Writes the snapshot as pretty JSON.
    ///
    /// The data goes to a sibling temp file first and is renamed over the
    /// save, so an interrupted write leaves the previous save intact.
    pub fn save(&self, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        let json = snapshot.to_json()?;

        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.save_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.save_path)?;

        info!(path = %self.save_path.display(), "game saved");
        Ok(())
    }

    /// Reads and parses the save file.
    pub fn load(&self) -> Result<SaveSnapshot, SaveError> {
        let json = match fs::read_to_string(&self.save_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(SaveError::NotFound),
            Err(e) => return Err(e.into()),
        };

        let snapshot = SaveSnapshot::from_json(&json)?;
        debug!(path = %self.save_path.display(), "save file read");
        Ok(snapshot)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}
