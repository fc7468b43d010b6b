use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::profile::HistoryPolicy;
use crate::tone::SamplerOptions;

pub const DEFAULT_PROFILE_PATH: &str = "style-profile.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Configuration {
    /// JSON key-value file holding the saved profile.
    pub profile_path: PathBuf,
    /// Number of most recent analyses kept in the profile.
    pub history_limit: usize,
    /// Points awarded for each saved analysis.
    pub points_per_analysis: u32,
    /// IANA time zone used to date analyses and pick the current season.
    pub timezone: Tz,
    /// Optional deterministic seed for the demo palette pick.
    pub demo_seed: Option<u64>,
    /// Maximum number of concurrent image decodes in batch mode.
    pub loader_max_concurrent_decodes: usize,
    /// Skin sampling window tunables.
    pub sampler: SamplerOptions,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Loads `path` when given, otherwise falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let cfg = match path {
            Some(path) => Self::from_yaml_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => Self::default(),
        };
        cfg.validated().context("invalid configuration values")
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.profile_path.as_os_str().is_empty(),
            "profile-path must not be empty"
        );
        ensure!(self.history_limit > 0, "history-limit must be greater than zero");
        ensure!(
            self.loader_max_concurrent_decodes > 0,
            "loader-max-concurrent-decodes must be greater than zero"
        );
        ensure!(self.sampler.stride > 0, "sampler.stride must be greater than zero");
        ensure!(
            self.sampler.radius_divisor > 0,
            "sampler.radius-divisor must be greater than zero"
        );
        Ok(self)
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        HistoryPolicy {
            limit: self.history_limit,
            points_per_analysis: self.points_per_analysis,
        }
    }

    /// Current wall-clock time in the configured zone.
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from(DEFAULT_PROFILE_PATH),
            history_limit: 10,
            points_per_analysis: 10,
            timezone: Tz::UTC,
            demo_seed: None,
            loader_max_concurrent_decodes: 4,
            sampler: SamplerOptions::default(),
        }
    }
}
