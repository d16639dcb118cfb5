use crate::error::{Result, TutorbookError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const DEFAULT_NOTE_PREVIEW_WIDTH: usize = 40;

/// Configuration for tutorbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TutorbookConfig {
    /// Name of the address book file, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How many characters of a note the person list shows
    #[serde(default = "default_note_preview_width")]
    pub note_preview_width: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_note_preview_width() -> usize {
    DEFAULT_NOTE_PREVIEW_WIDTH
}

impl Default for TutorbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            note_preview_width: default_note_preview_width(),
        }
    }
}

impl TutorbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TutorbookError::Io)?;
        let config: TutorbookConfig =
            serde_json::from_str(&content).map_err(TutorbookError::Serialization)?;
        Ok(config)
    }

    /// Full path of the address book file inside `data_dir`
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.data_file)
    }
}
