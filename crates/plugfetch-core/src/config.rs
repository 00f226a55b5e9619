use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/plugfetch/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root under which plugins are installed (`<base_path>/repos/<name>`).
    /// Defaults to `~/.local/share/plugfetch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
    /// Root for download blobs and extraction staging. If missing,
    /// `PLUGFETCH_TMPDIR` and then the system temp dir are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

impl Config {
    /// Configured base path, or the XDG data home default.
    pub fn resolved_base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(p.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("plugfetch")?;
                Ok(xdg_dirs.get_data_home())
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("plugfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Config::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<Config> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = Config::default();
        assert!(cfg.base_path.is_none());
        assert!(cfg.temp_dir.is_none());
    }

    #[test]
    fn explicit_base_path_is_used() {
        let cfg = Config {
            base_path: Some(PathBuf::from("/srv/plugins")),
            temp_dir: None,
        };
        assert_eq!(cfg.resolved_base_path().unwrap(), PathBuf::from("/srv/plugins"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config {
            base_path: Some(PathBuf::from("/srv/plugins")),
            temp_dir: Some(PathBuf::from("/var/tmp")),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_path = \"/opt/vim\"\ntemp_dir = \"/scratch\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.base_path.as_deref(), Some(Path::new("/opt/vim")));
        assert_eq!(cfg.temp_dir.as_deref(), Some(Path::new("/scratch")));
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_path = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
