use log::{warn, Level};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::OnceLock};
use thiserror::Error;

const CONFIG_GLOBAL: &str = "__WEATHER_SCHEDULER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub app_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            app_name: "WeatherScheduler".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Unknown level names fall back to `Info`.
    pub fn level(&self) -> Level {
        Level::from_str(self.log_level.trim()).unwrap_or(Level::Info)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn snapshot_from_globals() -> Option<String> {
    // Expect optional global object: window.__WEATHER_SCHEDULER_CONFIG = { log_level: "debug" }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &CONFIG_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

fn resolve(raw: Option<&str>) -> RuntimeConfig {
    match raw {
        Some(raw) => RuntimeConfig::from_json(raw).unwrap_or_else(|err| {
            warn!("{err}; using defaults");
            RuntimeConfig::default()
        }),
        None => RuntimeConfig::default(),
    }
}

/// Reads the page-provided config once; later calls return the cached value.
pub fn init() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| resolve(snapshot_from_globals().as_deref()))
}

pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}
