//! Environment-driven configuration, read once per process.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use once_cell::sync::Lazy;

/// Explicit path of the GL library to open.
pub const GL_LIBRARY_VAR: &str = "GLSHIM_GL_LIBRARY";
/// Where GL entry points are looked up: `library` or `context`.
pub const PROC_SOURCE_VAR: &str = "GLSHIM_PROC_SOURCE";
/// Tracing filter directives. Falls back to `RUST_LOG`.
pub const LOG_VAR: &str = "GLSHIM_LOG";

/// How GL entry point addresses are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcSource {
    /// Open the system GL library and look symbols up in it.
    #[default]
    Library,
    /// Use the platform context loader from the `gl_loader` crate.
    Context,
}

impl FromStr for ProcSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "library" | "" => Ok(ProcSource::Library),
            "context" => Ok(ProcSource::Context),
            _ => Err(ConfigError {
                var: PROC_SOURCE_VAR,
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.var)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub gl_library: Option<PathBuf>,
    pub proc_source: ProcSource,
    pub log_filter: Option<String>,
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::from_lookup(|var| std::env::var(var).ok()).unwrap_or_else(|err| {
        tracing::warn!("{err}, using defaults");
        Config::default()
    })
});

impl Config {
    /// The process-wide configuration, read from the environment on first use.
    pub fn get() -> &'static Config {
        &CONFIG
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let gl_library = lookup(GL_LIBRARY_VAR)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let proc_source = match lookup(PROC_SOURCE_VAR) {
            Some(raw) => raw.parse()?,
            None => ProcSource::default(),
        };
        let log_filter = lookup(LOG_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|s| !s.is_empty());

        Ok(Config {
            gl_library,
            proc_source,
            log_filter,
        })
    }
}
