use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub source: Option<SourceConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Briefing root: an http(s) base URL or a local directory.
    pub root: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
    pub sidebar: Option<bool>,
}

/// Platform config directory path: `<config_dir>/daybrief/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("daybrief").join("config.toml"))
}

/// Load config by cascading CWD `.daybrief.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".daybrief.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        source: Some(SourceConfig {
            root: overlay
                .source
                .as_ref()
                .and_then(|s| s.root.clone())
                .or_else(|| base.source.as_ref().and_then(|s| s.root.clone())),
            timeout_secs: overlay
                .source
                .as_ref()
                .and_then(|s| s.timeout_secs)
                .or_else(|| base.source.as_ref().and_then(|s| s.timeout_secs)),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
            sidebar: overlay
                .display
                .as_ref()
                .and_then(|d| d.sidebar)
                .or_else(|| base.display.as_ref().and_then(|d| d.sidebar)),
        }),
    }
}

/// Save the current config to the platform config directory.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf, String> {
    let path = config_path().ok_or_else(|| "Could not determine config directory".to_string())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(&path, content).map_err(|e| format!("Failed to write config: {}", e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_round_trip_toml() {
        let config = ConfigFile {
            source: Some(SourceConfig {
                root: Some("https://example.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.source.unwrap().root.unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let toml_str = "[display]\ntheme = \"dark\"\n";
        let parsed: ConfigFile = toml::from_str(toml_str).unwrap();
        assert!(parsed.source.is_none());
        assert!(parsed.display.as_ref().unwrap().sidebar.is_none());
    }

    #[test]
    fn merge_overlay_wins() {
        let base = ConfigFile {
            source: Some(SourceConfig {
                root: Some("/base".to_string()),
                timeout_secs: Some(5),
            }),
            ..Default::default()
        };
        let overlay = ConfigFile {
            source: Some(SourceConfig {
                root: Some("/overlay".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = merge(base, overlay);
        let source = merged.source.unwrap();
        assert_eq!(source.root.unwrap(), "/overlay");
        // Base value preserved where the overlay is silent.
        assert_eq!(source.timeout_secs, Some(5));
    }
}
