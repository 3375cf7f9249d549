//! Shared helper functions used across CLI subcommands.
//!
//! Includes tracing initialization, the optional settings file, and
//! content root resolution.

use std::path::{Path, PathBuf};

use nanopeaces_adapters::AgentType;
use nanopeaces_skills::SKILLS_DIR_ENV;
use tracing_subscriber::EnvFilter;

use crate::project::STATE_DIR;

/// Settings file inside the per-project state directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Log level used when neither `RUST_LOG`, `--log-level`, nor the
/// settings file names one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Content root used when nothing else names one.
pub const DEFAULT_SKILLS_DIR: &str = "skills";

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Initialize the tracing subscriber with the given default log level.
pub fn init_tracing(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Settings loaded from the `[cli]` section of `.nano-peaces/settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Agent used by `init` when `--agent` is not given.
    pub default_agent: Option<String>,
    /// Default log level.
    pub log_level: Option<String>,
    /// Log output format; `json` switches to JSON lines.
    pub log_format: Option<String>,
    /// Content root, relative paths resolved against the project root.
    pub skills_dir: Option<PathBuf>,
}

/// Load settings for the project at `project_root`.
///
/// Falls back to defaults if the file is missing, unparsable, or has no
/// `[cli]` section. Runs before tracing is initialized, so problems are
/// not logged.
pub fn load_settings(project_root: &Path) -> Settings {
    let path = project_root.join(STATE_DIR).join(SETTINGS_FILE);

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Settings::default(),
    };

    parse_settings(&content)
}

fn parse_settings(content: &str) -> Settings {
    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => return Settings::default(),
    };

    let cli = match table.get("cli") {
        Some(toml::Value::Table(c)) => c,
        _ => return Settings::default(),
    };

    let string = |key: &str| cli.get(key).and_then(|v| v.as_str()).map(str::to_owned);

    Settings {
        default_agent: string("default_agent"),
        log_level: string("log_level"),
        log_format: string("log_format"),
        skills_dir: string("skills_dir").map(PathBuf::from),
    }
}

impl Settings {
    /// Whether log output should be JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format.as_deref() == Some("json")
    }

    /// The configured default agent, if it names a known one.
    pub fn default_agent(&self) -> Option<AgentType> {
        let name = self.default_agent.as_deref()?;
        match name.parse() {
            Ok(agent) => Some(agent),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring default_agent from settings");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Pick the default log level: flag, then settings, then [`DEFAULT_LOG_LEVEL`].
pub fn resolve_log_level(flag: Option<&str>, settings: &Settings) -> String {
    flag.or(settings.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_owned()
}

/// Pick the skill content root.
///
/// Priority:
/// 1. `--skills-dir`
/// 2. `$NANO_PEACES_SKILLS_DIR`
/// 3. `skills_dir` from settings, relative to the project root
/// 4. `./skills`
pub fn resolve_skills_dir(
    flag: Option<&Path>,
    env: Option<PathBuf>,
    settings: &Settings,
    project_root: &Path,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = env {
        return dir;
    }
    if let Some(dir) = &settings.skills_dir {
        return project_root.join(dir);
    }
    PathBuf::from(DEFAULT_SKILLS_DIR)
}

/// Read the content root override from the environment.
pub fn skills_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(SKILLS_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_from_cli_section() {
        let settings = parse_settings(
            r#"
            [cli]
            default_agent = "cursor"
            log_level = "debug"
            log_format = "json"
            skills_dir = "vendor/skills"
            "#,
        );
        assert_eq!(settings.default_agent(), Some(AgentType::Cursor));
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
        assert!(settings.json_logs());
        assert_eq!(settings.skills_dir, Some(PathBuf::from("vendor/skills")));
    }

    #[test]
    fn settings_fall_back_to_defaults() {
        assert_eq!(parse_settings("not = [valid"), Settings::default());
        assert_eq!(parse_settings("[other]\nx = 1"), Settings::default());
        assert_eq!(parse_settings("cli = 3"), Settings::default());

        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(load_settings(tmp.path()), Settings::default());
    }

    #[test]
    fn settings_file_is_read_from_state_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(STATE_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SETTINGS_FILE), "[cli]\nlog_level = \"info\"\n").unwrap();
        assert_eq!(load_settings(tmp.path()).log_level.as_deref(), Some("info"));
    }

    #[test]
    fn unknown_default_agent_is_ignored() {
        let settings = Settings {
            default_agent: Some("vim".into()),
            ..Settings::default()
        };
        assert_eq!(settings.default_agent(), None);
    }

    #[test]
    fn log_level_priority() {
        let settings = Settings {
            log_level: Some("info".into()),
            ..Settings::default()
        };
        assert_eq!(resolve_log_level(Some("trace"), &settings), "trace");
        assert_eq!(resolve_log_level(None, &settings), "info");
        assert_eq!(resolve_log_level(None, &Settings::default()), "warn");
    }

    #[test]
    fn skills_dir_priority() {
        let root = Path::new("/work/app");
        let settings = Settings {
            skills_dir: Some(PathBuf::from("content")),
            ..Settings::default()
        };

        assert_eq!(
            resolve_skills_dir(
                Some(Path::new("/flag")),
                Some(PathBuf::from("/env")),
                &settings,
                root
            ),
            PathBuf::from("/flag")
        );
        assert_eq!(
            resolve_skills_dir(None, Some(PathBuf::from("/env")), &settings, root),
            PathBuf::from("/env")
        );
        assert_eq!(
            resolve_skills_dir(None, None, &settings, root),
            PathBuf::from("/work/app/content")
        );
        assert_eq!(
            resolve_skills_dir(None, None, &Settings::default(), root),
            PathBuf::from("skills")
        );
    }
}
