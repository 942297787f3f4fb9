use mathcheck_solver::VerifyOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "mathcheck.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathcheckConfig {
    pub verify: VerifyOptions,
}

impl MathcheckConfig {
    /// Missing files mean defaults; unreadable or malformed ones are
    /// reported on stderr and defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => eprintln!(
                    "Error parsing config file {}: {}. Using defaults.",
                    path.display(),
                    e
                ),
            },
            Err(e) => eprintln!(
                "Error reading config file {}: {}. Using defaults.",
                path.display(),
                e
            ),
        }
        Self::default()
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MathcheckConfig::load(Some(&dir.path().join("absent.toml")));
        assert_eq!(config, MathcheckConfig::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "verify = [[[").unwrap();
        assert_eq!(MathcheckConfig::load(Some(&path)), MathcheckConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mathcheck.toml");
        let mut config = MathcheckConfig::default();
        config.verify.tolerance = 1e-6;
        config.verify.scan.max = 1000.0;
        config.save(&path).unwrap();
        assert_eq!(MathcheckConfig::load(Some(&path)), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mathcheck.toml");
        fs::write(&path, "[verify.scan]\nsteps = 800\n").unwrap();
        let config = MathcheckConfig::load(Some(&path));
        assert_eq!(config.verify.scan.steps, 800);
        assert_eq!(config.verify.tolerance, VerifyOptions::default().tolerance);
    }
}
