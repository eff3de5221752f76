// Credential store: a two-field JSON file under the user's config
// directory. Created by `register`, read by every authenticated command,
// only ever overwritten as a whole.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::CliError;

/// Env var consulted when no credentials file is present.
pub const ENV_API_KEY: &str = "MOLTBOOK_API_KEY";

/// Env var overriding the config directory (tests point this at a tempdir).
pub const ENV_CONFIG_DIR: &str = "MOLTBOOK_CONFIG_DIR";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub agent_name: String,
}

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store rooted at `$MOLTBOOK_CONFIG_DIR` or the per-user config dir
    /// (`~/.config/moltbook` on Linux).
    pub fn from_env() -> Self {
        let dir = std::env::var_os(ENV_CONFIG_DIR)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join("moltbook")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join("credentials.json"))
    }

    pub fn new(path: PathBuf) -> Self {
        CredentialStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the pair as JSON, creating the config directory if needed and
    /// replacing any prior content.
    pub fn save(&self, creds: &Credentials) -> Result<(), CliError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(creds)?)?;
        Ok(())
    }

    /// A missing file and a file that is not valid JSON both read as
    /// absent; neither is fatal because the env var may still apply.
    pub fn load(&self) -> Option<Credentials> {
        let data = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Stored key first, `MOLTBOOK_API_KEY` second, otherwise absent and
    /// the caller aborts before any network call.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.load()
            .map(|c| c.api_key)
            .or_else(|| std::env::var(ENV_API_KEY).ok())
    }
}
