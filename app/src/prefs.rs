use common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Display theme chosen by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::ConfigError(format!(
                "unknown theme {:?}, expected \"light\" or \"dark\"",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PrefsFile {
    theme: Theme,
}

/// File-backed preference store. One JSON file, read and written whole.
pub struct Prefs {
    path: PathBuf,
}

impl Prefs {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the saved theme. `None` means no preference has been saved yet,
    /// which is not an error.
    pub fn load_theme(&self) -> Result<Option<Theme>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::ConfigError(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let prefs: PrefsFile = serde_json::from_str(&text).map_err(|e| {
            Error::ConfigError(format!("invalid preference file {}: {}", self.path.display(), e))
        })?;

        Ok(Some(prefs.theme))
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        let prefs = PrefsFile { theme };
        let text = serde_json::to_string_pretty(&prefs)
            .map_err(|e| Error::ConfigError(format!("failed to encode preferences: {}", e)))?;

        fs::write(&self.path, text).map_err(|e| {
            Error::ConfigError(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Prefs::new(dir.path().join("prefs.json"));
        assert_eq!(prefs.load_theme().unwrap(), None);
    }

    #[test]
    fn saved_theme_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Prefs::new(dir.path().join("prefs.json"));

        prefs.save_theme(Theme::Dark).unwrap();
        assert_eq!(prefs.load_theme().unwrap(), Some(Theme::Dark));

        prefs.save_theme(Theme::Light).unwrap();
        assert_eq!(prefs.load_theme().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn corrupt_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let prefs = Prefs::new(path);
        assert!(matches!(prefs.load_theme(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn theme_parses_from_cli_text() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
