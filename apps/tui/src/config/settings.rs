use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use pasture_core::{CountryAliases, VisibilityRules};
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "./public/data";
const LOG_FILE: &str = "pasture.log";

/// Runtime settings resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub taxonomy_path: Option<PathBuf>,
    pub map_enabled: bool,
    pub debug: bool,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            taxonomy_path: None,
            map_enabled: true,
            debug: false,
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn labeled_path(&self) -> PathBuf {
        self.data_dir.join(pasture_core::resources::LABELED_FILE)
    }

    pub fn origins_path(&self) -> PathBuf {
        self.data_dir.join(pasture_core::resources::ORIGINS_FILE)
    }
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir = env::current_dir()?;
    let data_dir = env::var("PASTURE_DATA_DIR")
        .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
    let data_dir = if data_dir.is_absolute() {
        data_dir
    } else {
        base_dir.join(data_dir)
    };

    let taxonomy_path = env::var("PASTURE_TAXONOMY").ok().map(PathBuf::from);
    let map_enabled = env::var("PASTURE_MAP").map_or(true, |value| !is_off(&value));
    let debug = env::var("DEBUG").is_ok_and(|value| !is_off(&value));
    let log_file = env::var("PASTURE_LOG_FILE")
        .map_or_else(|_| base_dir.join(LOG_FILE), PathBuf::from);

    Ok(AppConfig {
        data_dir,
        taxonomy_path,
        map_enabled,
        debug,
        log_file,
    })
}

fn is_off(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "off" | "false" | "no"
    )
}

/// Builtin taxonomy, or the override file named in the configuration.
pub fn load_visibility_rules(config: &AppConfig) -> color_eyre::eyre::Result<VisibilityRules> {
    let Some(path) = config.taxonomy_path.as_deref() else {
        return Ok(VisibilityRules::builtin());
    };

    let body = read_config_file(path)?;
    let rules = VisibilityRules::from_json(&body)
        .wrap_err_with(|| format!("Invalid taxonomy in {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        always_hidden = rules.always_hidden.len(),
        hidden_by_default = rules.hidden_by_default.len(),
        "loaded taxonomy override"
    );
    Ok(rules)
}

/// Builtin country alias table, or the override file at `path`.
pub fn load_country_aliases(path: Option<&Path>) -> color_eyre::eyre::Result<CountryAliases> {
    let Some(path) = path else {
        return Ok(CountryAliases::builtin());
    };

    let body = read_config_file(path)?;
    let aliases = CountryAliases::from_json(&body)
        .wrap_err_with(|| format!("Invalid country aliases in {}", path.display()))?;
    if aliases.is_empty() {
        return Err(eyre!("Country alias table {} is empty", path.display()));
    }
    Ok(aliases)
}

fn read_config_file(path: &Path) -> color_eyre::eyre::Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_values_disable_flags() {
        for value in ["off", "0", "false", "NO", ""] {
            assert!(is_off(value), "{value} should read as off");
        }
        assert!(!is_off("on"));
        assert!(!is_off("1"));
    }

    #[test]
    fn taxonomy_override_is_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxonomy.json");
        std::fs::write(&path, r#"{"always_hidden":["noise"],"hidden_by_default":[]}"#).unwrap();
        let config = AppConfig {
            taxonomy_path: Some(path),
            ..AppConfig::default()
        };

        let rules = load_visibility_rules(&config).unwrap();

        assert!(rules.is_hidden("noise", true));
        assert!(!rules.is_hidden("other", false));
    }

    #[test]
    fn missing_taxonomy_file_is_an_error() {
        let config = AppConfig {
            taxonomy_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..AppConfig::default()
        };

        let error = load_visibility_rules(&config).unwrap_err();

        assert!(error.to_string().contains("Failed to read"));
    }

    #[test]
    fn empty_alias_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(load_country_aliases(Some(&path)).is_err());
        assert!(!load_country_aliases(None).unwrap().is_empty());
    }

    #[test]
    fn resource_paths_live_in_data_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/srv/data"),
            ..AppConfig::default()
        };

        assert_eq!(config.labeled_path(), PathBuf::from("/srv/data/labeled.json"));
        assert_eq!(config.origins_path(), PathBuf::from("/srv/data/country_analysis.json"));
    }
}
