//! Data directory resolution for the prompt wallet.
//!
//! All commands locate their files through [`WalletContext`] so the prompt
//! collection, config and audit log always live side by side in one
//! per-user directory:
//!
//! ```text
//! <data_dir>/
//!   config.yaml      optional settings
//!   prompts.json     the prompt collection (name configurable)
//!   events.ndjson    append-only audit log
//! ```

use crate::config::Config;
use crate::error::{Result, WalletError};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const HOME_ENV_VAR: &str = "PROMPT_WALLET_HOME";

/// Directory name used under the platform data directory.
pub const DEFAULT_DATA_DIR_NAME: &str = "prompt-wallet";

/// Resolved paths for the wallet. All paths are absolute or as given.
#[derive(Debug, Clone)]
pub struct WalletContext {
    /// Directory holding the prompt file, config and event log.
    pub data_dir: PathBuf,
}

impl WalletContext {
    /// Resolve the data directory.
    ///
    /// Order of precedence:
    /// 1. `home` (the `--home` flag)
    /// 2. the `PROMPT_WALLET_HOME` environment variable
    /// 3. `<platform data dir>/prompt-wallet`
    pub fn resolve(home: Option<&Path>) -> Result<Self> {
        if let Some(home) = home {
            return Ok(Self::at(home));
        }

        if let Some(home) = env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::at(PathBuf::from(home)));
        }

        let base = dirs::data_dir().ok_or_else(|| {
            WalletError::UserError(format!(
                "could not determine a per-user data directory.\n\
                 Set {} or pass --home <DIR> to choose one.",
                HOME_ENV_VAR
            ))
        })?;

        Ok(Self::at(base.join(DEFAULT_DATA_DIR_NAME)))
    }

    /// Build a context rooted at a specific directory.
    pub fn at<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.yaml")
    }

    /// Get the path to the audit log.
    pub fn events_file(&self) -> PathBuf {
        self.data_dir.join("events.ndjson")
    }

    /// Get the path to the prompt collection for the given config.
    pub fn store_path(&self, config: &Config) -> PathBuf {
        self.data_dir.join(&config.store_file)
    }

    /// Load `config.yaml`, falling back to defaults when it does not exist.
    ///
    /// A config file that exists but fails to parse or validate is an error.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Config::load(&path)
    }
}
