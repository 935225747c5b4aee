use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_STORAGE_KEY: &str = "viewer_config";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_LOG_FILTER: &str = "info,viewport_viewer=debug";

/// Image endpoints offered by the rendering service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Svg,
    Png,
}

impl RenderFormat {
    pub fn endpoint(self) -> &'static str {
        match self {
            RenderFormat::Svg => "getsvg",
            RenderFormat::Png => "getimage",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid viewer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("api_base must not be empty")]
    EmptyApiBase,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub api_base: String,
    pub format: RenderFormat,
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            format: RenderFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: ViewerConfig = serde_json::from_str(raw)?;
        cfg.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let base = self.api_base.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        self.api_base = base.to_string();
        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
        Ok(self)
    }
}

/// Reads the config stored under [`CONFIG_STORAGE_KEY`], if any.
/// Runs before logging is up, so problems are returned alongside the defaults
/// and reported by the caller once the subscriber exists.
pub fn load_config() -> (ViewerConfig, Option<ConfigError>) {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
    match raw {
        None => (ViewerConfig::default(), None),
        Some(raw) => match ViewerConfig::from_json(&raw) {
            Ok(cfg) => (cfg, None),
            Err(e) => (ViewerConfig::default(), Some(e)),
        },
    }
}
