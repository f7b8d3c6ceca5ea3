//! Startup configuration — read once, never written.
//!
//! User-level config: `~/.coursedesk/config.yaml`
//! Project-level config: `.coursedesk/config.yaml`
//!
//! Resolution: `--config <path>` (fatal on error) → project → user →
//! defaults. Project values override user values field by field. Broken
//! implicit files are logged and skipped.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::Directive;

use crate::catalog::Session;
use crate::error::{DeskError, DeskResult};

/// Default tracing directive when neither config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "coursedesk=info";

/// Which section the TUI opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartSection {
    #[default]
    CourseTypes,
    Courses,
    Offerings,
    Registrations,
}

/// Course types and courses pre-loaded into a fresh session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub course_types: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

/// One config file as written on disk. Every field optional so layers merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_rate_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_section: Option<StartSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedConfig>,
}

impl ConfigFile {
    /// Read and parse a config file. `Ok(None)` if it does not exist.
    pub fn read(path: &Path) -> DeskResult<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        let file: Self = serde_yaml::from_str(&content).map_err(|e| DeskError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        file.validate(path)?;
        Ok(Some(file))
    }

    fn validate(&self, path: &Path) -> DeskResult<()> {
        for (name, value) in [
            ("tick_rate_ms", self.tick_rate_ms),
            ("frame_rate_ms", self.frame_rate_ms),
        ] {
            if value == Some(0) {
                return Err(DeskError::Config {
                    path: path.to_path_buf(),
                    reason: format!("{name} must be greater than zero"),
                });
            }
        }
        if let Some(filter) = &self.log_filter {
            filter
                .parse::<Directive>()
                .map_err(|e| DeskError::Config {
                    path: path.to_path_buf(),
                    reason: format!("log_filter {filter:?}: {e}"),
                })?;
        }
        Ok(())
    }
}

/// An implicit config file that was skipped, with the reason.
pub type SkippedConfig = (PathBuf, DeskError);

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Interval between ticks (status flash expiry).
    pub tick_rate_ms: u64,
    /// Interval between frames.
    pub frame_rate_ms: u64,
    pub log_filter: String,
    pub log_file: PathBuf,
    pub start_section: StartSection,
    pub seed: SeedConfig,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate_ms: 33,
            log_filter: DEFAULT_LOG_FILTER.into(),
            log_file: PathBuf::from(".coursedesk").join("coursedesk.log"),
            start_section: StartSection::default(),
            seed: SeedConfig::default(),
        }
    }
}

/// Path to `~/.coursedesk/`.
fn dirs_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|p| PathBuf::from(p).join(".coursedesk"))
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".coursedesk"))
    }
}

/// Path to the user-level config file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs_path().map(|p| p.join("config.yaml"))
}

/// Path to the project-level config file (relative to the working directory).
pub fn project_config_path() -> PathBuf {
    PathBuf::from(".coursedesk").join("config.yaml")
}

impl DeskConfig {
    /// Load from the usual places. Never fails; broken files are skipped and
    /// returned so the caller can log them once logging is up.
    pub fn load() -> (Self, Vec<SkippedConfig>) {
        Self::load_layered(user_config_path().as_deref(), &project_config_path())
    }

    /// Load user then project layer over the defaults.
    pub fn load_layered(user: Option<&Path>, project: &Path) -> (Self, Vec<SkippedConfig>) {
        let mut config = Self::default();
        let mut skipped = Vec::new();
        for path in user.into_iter().chain(std::iter::once(project)) {
            match ConfigFile::read(path) {
                Ok(Some(file)) => config = config.merge(file),
                Ok(None) => {}
                Err(e) => skipped.push((path.to_path_buf(), e)),
            }
        }
        (config, skipped)
    }

    /// Load a single explicit file over the defaults. Missing or malformed
    /// files are errors.
    pub fn load_from(path: &Path) -> DeskResult<Self> {
        match ConfigFile::read(path)? {
            Some(file) => Ok(Self::default().merge(file)),
            None => Err(DeskError::Config {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }),
        }
    }

    /// Overlay the fields present in `file`.
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.tick_rate_ms {
            self.tick_rate_ms = v;
        }
        if let Some(v) = file.frame_rate_ms {
            self.frame_rate_ms = v;
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file.log_file {
            self.log_file = v;
        }
        if let Some(v) = file.start_section {
            self.start_section = v;
        }
        if let Some(v) = file.seed {
            self.seed = v;
        }
        self
    }

    /// Fresh session holding the configured seed.
    pub fn seeded_session(&self) -> Session {
        Session::seeded(
            self.seed.course_types.iter().cloned(),
            self.seed.courses.iter().cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_from_yaml_string() {
        let yaml = r#"
tick_rate_ms: 100
start_section: offerings
seed:
  course_types: [Math, Science]
  courses: [Algebra]
"#;
        let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        let config = DeskConfig::default().merge(file);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.frame_rate_ms, 33);
        assert_eq!(config.start_section, StartSection::Offerings);
        assert_eq!(config.seed.course_types, vec!["Math", "Science"]);
    }

    #[test]
    fn missing_files_give_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, skipped) = DeskConfig::load_layered(
            Some(dir.path().join("nope.yaml").as_path()),
            &dir.path().join("also-nope.yaml"),
        );
        assert_eq!(config, DeskConfig::default());
        assert!(skipped.is_empty());
    }

    #[test]
    fn project_overrides_user_per_field() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.yaml", "tick_rate_ms: 500\nlog_filter: coursedesk=debug\n");
        let project = write(&dir, "project.yaml", "tick_rate_ms: 100\n");
        let (config, _) = DeskConfig::load_layered(Some(user.as_path()), &project);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_filter, "coursedesk=debug");
    }

    #[test]
    fn broken_implicit_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.yaml", "frame_rate_ms: 50\n");
        let project = write(&dir, "project.yaml", "tick_rate_ms: [not, a, number]\n");
        let (config, skipped) = DeskConfig::load_layered(Some(user.as_path()), &project);
        assert_eq!(config.frame_rate_ms, 50);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].0, project);
    }

    #[test]
    fn bad_log_filter_in_implicit_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.yaml", "log_filter: coursedesk=debug\n");
        let project = write(&dir, "project.yaml", "log_filter: coursedesk=verbose\n");
        let (config, skipped) = DeskConfig::load_layered(Some(user.as_path()), &project);
        assert_eq!(config.log_filter, "coursedesk=debug");
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].1.to_string().contains("log_filter"));
        assert!(config.log_filter.parse::<Directive>().is_ok());
    }

    #[test]
    fn bad_log_filter_in_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "verbose.yaml", "log_filter: coursedesk=verbose\n");
        let err = DeskConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, DeskError::Config { .. }));
        assert!(err.to_string().contains("log_filter"));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = DeskConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, DeskError::Config { .. }));
    }

    #[test]
    fn explicit_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.yaml", "start_section: nowhere\n");
        let err = DeskConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "typo.yaml", "tick_rate: 10\n");
        assert!(DeskConfig::load_from(&path).is_err());
    }

    #[test]
    fn zero_rate_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "zero.yaml", "frame_rate_ms: 0\n");
        let err = DeskConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("frame_rate_ms"));
    }

    #[test]
    fn empty_file_is_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.yaml", "\n");
        assert_eq!(DeskConfig::load_from(&path).unwrap(), DeskConfig::default());
    }

    #[test]
    fn seed_applies_add_rules() {
        let config = DeskConfig {
            seed: SeedConfig {
                course_types: vec!["Math".into(), "".into(), "Math".into()],
                courses: vec!["Algebra".into()],
            },
            ..DeskConfig::default()
        };
        let session = config.seeded_session();
        assert_eq!(session.course_types().as_slice(), &["Math"]);
        assert_eq!(session.courses().as_slice(), &["Algebra"]);
        assert!(session.offerings().is_empty());
    }
}
