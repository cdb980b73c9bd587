//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services. Request
//! handlers never read environment variables.

use crate::constants::{DEFAULT_LOGO_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_PORT};
use crate::{RecordError, RecordResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    output_dir: PathBuf,
    logo_path: PathBuf,
    retain_artifacts: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        output_dir: PathBuf,
        logo_path: PathBuf,
        retain_artifacts: bool,
    ) -> RecordResult<Self> {
        if output_dir.as_os_str().is_empty() {
            return Err(RecordError::InvalidInput(
                "output directory cannot be empty".into(),
            ));
        }

        Ok(Self {
            output_dir,
            logo_path,
            retain_artifacts,
        })
    }

    /// Build a config from optional raw environment values, applying defaults.
    ///
    /// Empty or whitespace-only values are treated as unset.
    pub fn from_env_values(
        output_dir: Option<String>,
        logo_path: Option<String>,
        retain_artifacts: Option<String>,
    ) -> RecordResult<Self> {
        let output_dir = non_blank(output_dir).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());
        let logo_path = non_blank(logo_path).unwrap_or_else(|| DEFAULT_LOGO_PATH.into());
        let retain_artifacts = retain_artifacts_from_env_value(retain_artifacts)?;

        Self::new(
            PathBuf::from(output_dir),
            PathBuf::from(logo_path),
            retain_artifacts,
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn logo_path(&self) -> &Path {
        &self.logo_path
    }

    /// Whether generated artifacts are kept after the response has been built.
    pub fn retain_artifacts(&self) -> bool {
        self.retain_artifacts
    }

    /// Whether the configured logo file is present on disk.
    pub fn logo_uploaded(&self) -> bool {
        self.logo_path.exists()
    }
}

/// Parse the listen port from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_PORT`].
pub fn port_from_env_value(value: Option<String>) -> RecordResult<u16> {
    match non_blank(value) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .parse::<u16>()
            .map_err(|_| RecordError::InvalidInput(format!("PORT is not a valid port: '{}'", v))),
    }
}

/// Parse the artifact retention flag from an optional string value.
///
/// Accepts `true`/`false`, `1`/`0` and `yes`/`no` in any case. Unset means `false`.
pub fn retain_artifacts_from_env_value(value: Option<String>) -> RecordResult<bool> {
    let Some(v) = non_blank(value) else {
        return Ok(false);
    };

    match v.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(RecordError::InvalidInput(format!(
            "LABREC_RETAIN_ARTIFACTS must be a boolean, got: '{}'",
            v
        ))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
