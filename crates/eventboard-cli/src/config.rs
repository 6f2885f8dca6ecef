//! Generator configuration.
//!
//! Settings are read from the first file found of:
//!
//! 1. the path given with `--config` (must exist)
//! 2. `eventboard.toml` in the working directory
//! 3. `~/.config/eventboard/config.toml`
//!
//! With no file at all the built-in defaults apply, which reproduce the
//! plain `events.csv` → `index.html` run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use eventboard_core::{
    BadgeLabels, CountdownOptions, SortOrder, Thresholds, UndatedPolicy, UrgencyScheme,
};
use eventboard_render::{PageSettings, DEFAULT_FOOTER, DEFAULT_LOCALE, DEFAULT_TITLE};
use eventboard_source::ColumnNames;
use serde::{Deserialize, Serialize};

use crate::commands::same_file;

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "eventboard.toml";

/// Longest page timer interval, in seconds. Browsers treat any delay above
/// `i32::MAX` milliseconds as 1 ms.
pub const MAX_INTERVAL_SECS: u64 = 2_147_483;

/// Configuration for the eventboard generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub output: OutputSettings,
    pub display: DisplaySettings,
    pub urgency: UrgencySettings,
    pub refresh: RefreshSettings,
}

/// Where records come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// CSV file, relative to the working directory.
    pub path: PathBuf,
    /// Header names of the required columns.
    pub columns: ColumnNames,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("events.csv"),
            columns: ColumnNames::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("index.html"),
        }
    }
}

/// Page text and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub title: String,

    /// Footer text; an empty string hides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    pub locale: String,

    pub default_sort: SortOrder,

    /// `ended` shows records without an end date as ended; `distinct` gives
    /// them their own badge, sorted last.
    pub undated: UndatedPolicy,

    pub labels: BadgeLabels,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            footer: Some(DEFAULT_FOOTER.to_string()),
            locale: DEFAULT_LOCALE.to_string(),
            default_sort: SortOrder::default(),
            undated: UndatedPolicy::default(),
            labels: BadgeLabels::default(),
        }
    }
}

/// Urgency tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencySettings {
    /// `tiered` (critical/warning/notice/safe) or the deprecated `legacy`
    /// (urgent/active).
    pub scheme: UrgencyScheme,
    pub critical_days: i64,
    pub warning_days: i64,
    pub notice_days: i64,
}

impl Default for UrgencySettings {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            scheme: UrgencyScheme::default(),
            critical_days: thresholds.critical_days,
            warning_days: thresholds.warning_days,
            notice_days: thresholds.notice_days,
        }
    }
}

impl UrgencySettings {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            critical_days: self.critical_days,
            warning_days: self.warning_days,
            notice_days: self.notice_days,
        }
    }
}

/// Page timer cadences, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    pub clock_secs: u64,
    pub refresh_secs: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            clock_secs: 1,
            refresh_secs: 60,
        }
    }
}

/// A configuration together with the file it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// `None` when built-in defaults are in use.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse {}: {}", path.display(), e))
    }

    /// Loads the explicit file if given, otherwise the first file found from
    /// the working directory, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, String> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(Path::new(".")),
        };

        match path {
            Some(path) => Ok(LoadedConfig {
                config: Self::load_from(&path)?,
                path: Some(path),
            }),
            None => Ok(LoadedConfig::default()),
        }
    }

    /// Finds the configuration file that applies in `dir`, if any.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        [dir.join(LOCAL_CONFIG_FILE), Self::default_path()]
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Returns the per-user configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventboard")
    }

    /// Checks values that parse but cannot work.
    ///
    /// Returns non-fatal warnings on success.
    pub fn validate(&self) -> Result<Vec<String>, String> {
        self.urgency
            .thresholds()
            .validate()
            .map_err(|e| format!("[urgency] {}", e))?;
        self.source
            .columns
            .validate()
            .map_err(|e| format!("[source.columns] {}", e.message()))?;

        for (name, secs) in [
            ("clock_secs", self.refresh.clock_secs),
            ("refresh_secs", self.refresh.refresh_secs),
        ] {
            if secs == 0 || secs > MAX_INTERVAL_SECS {
                return Err(format!(
                    "[refresh] {} must be between 1 and {} seconds, got {}",
                    name, MAX_INTERVAL_SECS, secs
                ));
            }
        }
        if self.display.locale.trim().is_empty() {
            return Err("[display] locale must not be empty".to_string());
        }

        if same_file(&self.source.path, &self.output.path) {
            return Err("[output] path must differ from the source path".to_string());
        }

        let mut warnings = Vec::new();
        if self.urgency.scheme == UrgencyScheme::Legacy {
            warnings.push(
                "[urgency] scheme \"legacy\" is deprecated; use \"tiered\"".to_string(),
            );
        }
        Ok(warnings)
    }

    pub fn countdown_options(&self) -> CountdownOptions {
        CountdownOptions {
            scheme: self.urgency.scheme,
            thresholds: self.urgency.thresholds(),
            undated: self.display.undated,
            labels: self.display.labels.clone(),
        }
    }

    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            title: self.display.title.clone(),
            footer: self.display.footer.clone(),
            locale: self.display.locale.clone(),
            default_sort: self.display.default_sort,
            countdown: self.countdown_options(),
            clock_interval: Duration::from_secs(self.refresh.clock_secs),
            refresh_interval: Duration::from_secs(self.refresh.refresh_secs),
        }
    }
}
