//! Downtime causes served from configuration

use super::traits::DowntimeCauseProvider;
use crate::config::TuiConfig;
use crate::state::DEFAULT_DOWNTIME_CAUSES;
use anyhow::{bail, Result};

/// Cause list taken from the user config, falling back to the built-in list
#[derive(Debug, Clone)]
pub struct ConfiguredCauses {
    causes: Option<Vec<String>>,
}

impl ConfiguredCauses {
    pub fn new(causes: Option<Vec<String>>) -> Self {
        Self { causes }
    }

    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(config.downtime_causes.clone())
    }
}

impl DowntimeCauseProvider for ConfiguredCauses {
    fn downtime_causes(&self) -> Result<Vec<String>> {
        match &self.causes {
            None => Ok(DEFAULT_DOWNTIME_CAUSES.iter().map(|s| s.to_string()).collect()),
            Some(causes) if causes.iter().any(|c| c.trim().is_empty()) => {
                bail!("downtime causes must not contain blank entries")
            }
            Some(causes) => Ok(causes.clone()),
        }
    }
}
