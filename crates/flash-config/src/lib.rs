//! # flash-config
//!
//! Layered configuration loading for the flashcards trainer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FLASHCARDS_*` prefix, `__` as separator)
//! 2. Project-level `.flashcards/config.toml`
//! 3. User-level `~/.config/flashcards/config.toml`
//! 4. Built-in defaults
//!
//! `FLASHCARDS_SESSION__IMPORT_PATH` maps to `session.import_path`,
//! `FLASHCARDS_QUIZ__MAX_QUESTIONS` to `quiz.max_questions`.
//!
//! # Usage
//!
//! ```no_run
//! use flash_config::FlashConfig;
//!
//! let config = FlashConfig::load_with_dotenv().expect("config");
//! if let Some(path) = config.session.import_file() {
//!     println!("importing {}", path.display());
//! }
//! ```

mod error;
mod quiz;
mod session;

pub use error::ConfigError;
pub use quiz::QuizConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "FLASHCARDS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlashConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl FlashConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`load_with_dotenv`](Self::load_with_dotenv) for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the current directory, then [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.quiz.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".flashcards/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flashcards").join("config.toml"))
    }
}
