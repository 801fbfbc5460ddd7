use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommend: RecommendSettings,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub vision: VisionSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String { "data/recipes.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendSettings {
    #[serde(default = "default_result_limit")]
    pub limit: usize,
    #[serde(default = "default_baseline_servings")]
    pub baseline_servings: u32,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            limit: default_result_limit(),
            baseline_servings: default_baseline_servings(),
        }
    }
}

fn default_result_limit() -> usize { 20 }
fn default_baseline_servings() -> u32 { 2 }

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    #[serde(default = "default_suggestion_limit")]
    pub limit: usize,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            limit: default_suggestion_limit(),
        }
    }
}

fn default_suggestion_limit() -> usize { 6 }

/// Where favorites and ratings live; in memory when no path is set
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSettings {
    pub path: Option<String>,
}

/// Remote classifier; image recognition is disabled without an endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct VisionSettings {
    pub endpoint: Option<String>,
    #[serde(default = "default_vision_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for VisionSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_vision_timeout(),
            top_n: default_top_n(),
        }
    }
}

fn default_vision_timeout() -> u64 { 30 }
fn default_top_n() -> usize { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_true() -> bool { true }
fn default_cache_capacity() -> u64 { 1000 }
fn default_cache_ttl() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

// e.g., RECIPE__SERVER__PORT -> server.port
fn environment() -> Environment {
    Environment::with_prefix("RECIPE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RECIPE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.recommend.limit, 20);
        assert_eq!(settings.recommend.baseline_servings, 2);
        assert_eq!(settings.suggestions.limit, 6);
        assert_eq!(settings.vision.top_n, 3);
        assert!(settings.vision.endpoint.is_none());
        assert!(settings.storage.path.is_none());
        assert!(settings.cache.enabled);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 9000\n\n[vision]\nendpoint = \"http://localhost:5000/classify\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.vision.endpoint.as_deref(), Some("http://localhost:5000/classify"));
        assert_eq!(settings.vision.timeout_secs, 30);
        assert_eq!(settings.catalog.path, "data/recipes.json");
    }

    #[test]
    fn test_environment_uses_double_underscore_prefix() {
        let vars: config::Map<String, String> = [
            ("RECIPE__SERVER__PORT", "9100"),
            ("RECIPE__CACHE__ENABLED", "false"),
            ("RECIPE_SERVER__HOST", "ignored"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings: Settings = Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9100);
        assert!(!settings.cache.enabled);
        assert_eq!(settings.server.host, "0.0.0.0");
    }
}
