//! Runtime server configuration.
//!
//! Layers, lowest precedence first: built-in defaults, the TOML file given
//! on the command line (optional), then `PERSONA_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Value of `database_path` that selects an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("database_path", "persona.db")?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("PERSONA"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn is_in_memory(&self) -> bool {
    self.database_path.as_os_str() == IN_MEMORY
  }

  /// `database_path` with a leading `~/` expanded to the home directory.
  pub fn resolved_database_path(&self) -> PathBuf {
    expand_tilde(&self.database_path)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
