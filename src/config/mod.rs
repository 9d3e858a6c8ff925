use anyhow::bail;
use serde::Deserialize;
use std::collections::HashMap;

use crate::command::Command;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub target: TargetConfig,
    pub run: RunConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TargetConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RunConfig {
    /// Upper bound on simultaneously in-flight requests.
    pub concurrency: usize,
    pub requests_per_command: usize,
    /// Per-verb request-count overrides, keyed by verb ("SET", "KEYS", ...).
    pub overrides: HashMap<String, usize>,
    /// Timeout for the startup reachability probe only; individual
    /// exchanges carry no timeout.
    pub connect_timeout_seconds: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6767,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            concurrency: 50,
            requests_per_command: 10_000,
            overrides: HashMap::new(),
            connect_timeout_seconds: 5,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.run.concurrency == 0 {
            bail!("run.concurrency must be at least 1");
        }
        for verb in self.run.overrides.keys() {
            if Command::from_verb(verb).is_none() {
                bail!("unknown command {:?} in run.overrides", verb);
            }
        }
        Ok(())
    }

    pub fn target_addr(&self) -> String {
        format!("{}:{}", self.target.host, self.target.port)
    }

    pub fn requests_for(&self, command: Command) -> usize {
        self.run
            .overrides
            .get(command.verb())
            .copied()
            .unwrap_or(self.run.requests_per_command)
    }
}
