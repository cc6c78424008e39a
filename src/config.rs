// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the `ingressroute` binary, loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Name of the IngressRoute to create
    pub name: String,
    /// Namespace of the IngressRoute
    pub namespace: String,
    /// YAML file holding annotations, labels and the route spec
    pub options_file: PathBuf,
    /// Replace an existing object instead of failing with a conflict
    pub upsert: bool,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let name = lookup("INGRESSROUTE_NAME")
            .context("INGRESSROUTE_NAME environment variable not set")?;
        let options_file = lookup("INGRESSROUTE_OPTIONS_FILE")
            .map(PathBuf::from)
            .context("INGRESSROUTE_OPTIONS_FILE environment variable not set")?;
        let namespace = lookup("INGRESSROUTE_NAMESPACE").unwrap_or_else(|| "default".to_string());
        let upsert = lookup("INGRESSROUTE_UPSERT")
            .map(|s| {
                s.parse::<bool>()
                    .with_context(|| format!("Invalid INGRESSROUTE_UPSERT: {}", s))
            })
            .transpose()?
            .unwrap_or(false);
        let timeout = lookup("INGRESSROUTE_TIMEOUT_SECS")
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("Invalid INGRESSROUTE_TIMEOUT_SECS: {}", s))
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Config {
            name,
            namespace,
            options_file,
            upsert,
            timeout,
        })
    }
}
