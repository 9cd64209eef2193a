use crate::core::report::ReportSettings;
use crate::core::trend::TrendOptions;
use crate::errors::{AppError, AppResult};
use crate::models::task_status::TaskDateField;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user")]
    pub default_user: i64,
    #[serde(default = "default_trend_days")]
    pub trend_days: i64,
    #[serde(default = "default_date_display_format")]
    pub date_display_format: String,
    #[serde(default = "default_course_placeholder")]
    pub course_placeholder: String,
    /// Task date that bounds completion-rate populations.
    #[serde(default)]
    pub completion_basis: TaskDateField,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_user() -> i64 {
    1
}
fn default_trend_days() -> i64 {
    7
}
fn default_date_display_format() -> String {
    "%b %d".to_string()
}
fn default_course_placeholder() -> String {
    "No course info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_user: default_user(),
            trend_days: default_trend_days(),
            date_display_format: default_date_display_format(),
            course_placeholder: default_course_placeholder(),
            completion_basis: TaskDateField::default(),
        }
    }
}

impl Config {
    /// ~/.focusflow (current directory if no home can be resolved)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".focusflow")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("focusflow.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("focusflow.sqlite")
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        if cfg.trend_days < 1 {
            return Err(AppError::Config(format!(
                "trend_days must be at least 1 (found {})",
                cfg.trend_days
            )));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn trend_options(&self) -> TrendOptions {
        TrendOptions {
            date_display_format: self.date_display_format.clone(),
            course_placeholder: self.course_placeholder.clone(),
        }
    }

    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            trend_days: self.trend_days,
            completion_basis: self.completion_basis,
            ..ReportSettings::default()
        }
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(config.to_yaml()?.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
