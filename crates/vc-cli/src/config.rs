use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "vc.toml";

/// Which version scheme versions and constraints are parsed with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// major.minor.patch[-prerelease][+metadata]
    #[default]
    Semver,
    /// year.month[.day][-prerelease]
    Calver,
}

/// The vc configuration file structure (vc.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VcConfig {
    /// Version parsing configuration
    pub versions: VersionsConfig,

    /// Where the file was loaded from
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Version scheme, "semver" or "calver"
    pub scheme: Option<SchemeKind>,

    /// Require full X.Y.Z semantic versions without leading zeros
    pub strict: Option<bool>,
}

impl VcConfig {
    /// Load configuration from vc.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.is_file() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let mut config: VcConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                log::debug!("Loaded configuration from {}", config_path.display());
                config.path = Some(config_path);
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Self::load(&cwd)
    }
}

/// Effective settings after merging vc.toml with command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub scheme: SchemeKind,
    pub strict: bool,
}

impl Settings {
    /// Command-line flags take precedence over the config file
    pub fn resolve(config: Option<&VcConfig>, scheme: Option<SchemeKind>, strict: Option<bool>) -> Self {
        let versions = config.map(|c| &c.versions);

        Settings {
            scheme: scheme
                .or_else(|| versions.and_then(|v| v.scheme))
                .unwrap_or_default(),
            strict: strict.or_else(|| versions.and_then(|v| v.strict)).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config: VcConfig = toml::from_str("").unwrap();
        assert_eq!(config.versions.scheme, None);
        assert_eq!(config.versions.strict, None);
    }

    #[test]
    fn test_parse_versions_table() {
        let toml = r#"
[versions]
scheme = "calver"
strict = true
"#;
        let config: VcConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.versions.scheme, Some(SchemeKind::Calver));
        assert_eq!(config.versions.strict, Some(true));
    }

    #[test]
    fn test_parse_unknown_scheme() {
        let toml = r#"
[versions]
scheme = "romver"
"#;
        assert!(toml::from_str::<VcConfig>(toml).is_err());
    }

    #[test]
    fn test_load_searches_upward() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[versions]\nscheme = \"calver\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = VcConfig::load(&nested).unwrap().unwrap();
        assert_eq!(config.versions.scheme, Some(SchemeKind::Calver));
        assert_eq!(config.path, Some(dir.path().join(CONFIG_FILE)));
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[versions\n").unwrap();
        assert!(VcConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(
            Settings::resolve(None, None, None),
            Settings {
                scheme: SchemeKind::Semver,
                strict: false
            }
        );
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let config: VcConfig = toml::from_str("[versions]\nscheme = \"calver\"\nstrict = true\n").unwrap();

        let settings = Settings::resolve(Some(&config), None, None);
        assert_eq!(settings.scheme, SchemeKind::Calver);
        assert!(settings.strict);

        let settings = Settings::resolve(Some(&config), Some(SchemeKind::Semver), None);
        assert_eq!(settings.scheme, SchemeKind::Semver);

        // --no-strict switches off strict = true from the file
        assert!(!Settings::resolve(Some(&config), None, Some(false)).strict);

        let loose: VcConfig = toml::from_str("[versions]\nstrict = false\n").unwrap();
        assert!(Settings::resolve(Some(&loose), None, Some(true)).strict);
    }
}
