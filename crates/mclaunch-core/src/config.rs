//! Launch configuration.
//!
//! Defaults reproduce the fixed program: open the Minecraft launcher's
//! servers tab with the `open` verb in a normal window. A TOML file may
//! override any field; missing fields keep their defaults.

use std::ffi::CString;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::dispatch::{DEFAULT_HANDLER_NAME, DEFAULT_VERB, LaunchOptions, ShowMode};
use crate::error::{Error, Result};

pub const DEFAULT_URI: &str = "minecraft://openServersTab/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub uri: String,
    pub verb: String,
    pub show_mode: ShowMode,
    pub handler_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            verb: DEFAULT_VERB.to_string(),
            show_mode: ShowMode::Normal,
            handler_name: DEFAULT_HANDLER_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the dispatch step cannot carry.
    pub fn validate(&self) -> Result<()> {
        if self.uri.is_empty() {
            return Err(Error::InvalidUri("URI is empty".to_string()));
        }
        if self.uri.contains('\0') {
            return Err(Error::InvalidUri("URI contains a NUL character".to_string()));
        }
        if self.verb.is_empty() || self.verb.contains('\0') {
            return Err(Error::ConfigParseError(format!(
                "invalid verb '{}'",
                self.verb.escape_debug()
            )));
        }
        Ok(())
    }

    /// NUL-terminated copy of the URI, the backing store for a `SourceText`.
    pub fn source_text(&self) -> Result<CString> {
        CString::new(self.uri.as_str())
            .map_err(|_| Error::InvalidUri("URI contains a NUL character".to_string()))
    }

    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            verb: self.verb.clone(),
            show_mode: self.show_mode,
            handler_name: self.handler_name.clone(),
        }
    }
}
