use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Lower bound for the event poll interval; zero would spin the draw loop
const MIN_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ui: UiConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub links: LinksConfig,
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Show each step's short summary under its title in the step list
    #[serde(default = "default_true")]
    pub show_summaries: bool,
    /// Percentage of the screen width used by the step list
    #[serde(default = "default_step_list_width")]
    pub step_list_width: u16,
}

fn default_true() -> bool {
    true
}

fn default_step_list_width() -> u16 {
    35
}

/// Where guide content comes from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// External content JSON file; the embedded guide is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// External link handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Whether resource links may be opened at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Command used instead of the platform opener (e.g., "firefox")
    #[serde(default)]
    pub command: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for session logs
    pub state: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

impl Config {
    /// Project-local config file
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".sopguide/config.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Embedded defaults so the guide runs without any config file
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // User config in ~/.config/sopguide/ (global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sopguide").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Project-local config
        let local_config = Self::local_config_path();
        if local_config.exists() {
            builder = builder.add_source(config::File::from(local_config));
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables, e.g. SOPGUIDE_UI__TICK_RATE_MS=100
        builder = builder.add_source(
            config::Environment::with_prefix("SOPGUIDE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Save config as TOML to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Save config to .sopguide/config.toml
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::local_config_path())
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.state);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }

    /// External content file, if configured
    pub fn content_path(&self) -> Option<PathBuf> {
        self.content
            .path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Event poll interval, never shorter than one frame at ~60 Hz
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Step list width clamped to a usable range
    pub fn step_list_width(&self) -> u16 {
        self.ui.step_list_width.clamp(20, 60)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                tick_rate_ms: 250,
                show_summaries: true,
                step_list_width: default_step_list_width(),
            },
            content: ContentConfig::default(),
            links: LinksConfig::default(),
            paths: PathsConfig {
                state: ".sopguide".to_string(), // Relative to cwd
            },
            logging: LoggingConfig::default(),
        }
    }
}
