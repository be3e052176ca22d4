//! Picker configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};
use crate::locale::Locale;
use crate::month_grid::GridLayout;

fn is_false(b: &bool) -> bool {
    !*b
}

/// Configuration at ~/.config/checkin/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    pub locale: Locale,

    /// Fill the month grid out to six full weeks.
    #[serde(skip_serializing_if = "is_false")]
    pub pad_grid: bool,

    /// JSON file of hotel records for `checkin hotels`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels_file: Option<PathBuf>,
}

impl PickerConfig {
    pub fn config_path() -> PickerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PickerError::Config("Could not determine config directory".into()))?
            .join("checkin");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location; a missing file means defaults.
    pub fn load() -> PickerResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> PickerResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PickerError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> PickerResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| PickerError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| PickerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PickerResult<()> {
        let contents = "\
# checkin configuration

# Display language: \"zh-CN\" or \"en-US\"
# locale = \"zh-CN\"

# Show six full weeks, padded with days from the neighbouring months:
# pad_grid = false

# Hotel records used by `checkin hotels`:
# hotels_file = \"/home/me/hotels.json\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PickerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PickerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn grid_layout(&self) -> GridLayout {
        if self.pad_grid {
            GridLayout::Padded {
                week_start: self.locale.text().week_start,
            }
        } else {
            GridLayout::MonthOnly
        }
    }
}
