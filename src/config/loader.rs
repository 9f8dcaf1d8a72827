// Configuration loader
// Loads daemon settings from ~/.syncping/config.toml or environment variable

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;

const DAEMON_ENV_VAR: &str = "SYNCPING_DAEMON";

/// Load configuration from the config file or environment.
///
/// Resolution order: ~/.syncping/config.toml if it exists, then the
/// SYNCPING_DAEMON environment variable as the daemon address, then
/// built-in defaults.
pub fn load_config() -> Result<Config> {
    let config_path = default_config_path()?;
    if config_path.exists() {
        return load_from_path(&config_path);
    }

    Ok(config_from_env().unwrap_or_default())
}

fn config_from_env() -> Option<Config> {
    let address = std::env::var(DAEMON_ENV_VAR).ok()?;
    if address.is_empty() {
        return None;
    }

    let mut config = Config::default();
    config.daemon.address = address;
    Some(config)
}

/// Default config file path (~/.syncping/config.toml)
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".syncping/config.toml"))
}

fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&contents).context("Failed to parse config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"
            [daemon]
            address = "127.0.0.1:11898"
            ssl = true
            timeout_seconds = 10
            "#
        )?;

        let config = load_from_path(file.path())?;
        assert_eq!(config.daemon.address, "127.0.0.1:11898");
        assert!(config.daemon.ssl);
        assert_eq!(config.daemon.timeout_seconds, Some(10));

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"
            [daemon]
            address = "10.0.0.5:17081"
            "#
        )?;

        let config = load_from_path(file.path())?;
        assert_eq!(config.daemon.address, "10.0.0.5:17081");
        assert!(!config.daemon.ssl);
        assert_eq!(config.daemon.timeout_seconds, None);

        Ok(())
    }

    #[test]
    fn test_empty_config_uses_defaults() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;

        let config = load_from_path(file.path())?;
        assert_eq!(config.daemon.address, "82.165.218.56:17081");

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_rejected() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "daemon = \"not a table\"")?;

        assert!(load_from_path(file.path()).is_err());

        Ok(())
    }

    // Keep this the only test that touches SYNCPING_DAEMON
    #[test]
    fn test_env_var_overrides_address() {
        std::env::set_var(DAEMON_ENV_VAR, "192.168.1.50:17081");
        let config = config_from_env().unwrap();
        assert_eq!(config.daemon.address, "192.168.1.50:17081");
        assert!(!config.daemon.ssl);

        std::env::remove_var(DAEMON_ENV_VAR);
        assert!(config_from_env().is_none());
    }
}
