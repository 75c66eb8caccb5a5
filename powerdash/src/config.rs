use anyhow::{bail, Context};
use powerapi::DEFAULT_ENDPOINT;
use powerdash::poller::DEFAULT_INTERVAL;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path, time::Duration};
use url::Url;

const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub endpoint: Option<Url>,

	/// Milliseconds between two polls.
	#[serde(default = "default_interval_ms")]
	pub interval_ms: u64,

	/// Milliseconds before a single request is abandoned.
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
}

fn default_interval_ms() -> u64 {
	DEFAULT_INTERVAL.as_millis() as u64
}

fn default_timeout_ms() -> u64 {
	DEFAULT_TIMEOUT_MS
}

impl Default for Config {
	fn default() -> Self {
		Self {
			endpoint: None,
			interval_ms: default_interval_ms(),
			timeout_ms: default_timeout_ms(),
		}
	}
}

impl Config {
	pub fn endpoint(&self) -> &str {
		self.endpoint
			.as_ref()
			.map(Url::as_str)
			.unwrap_or(DEFAULT_ENDPOINT)
	}

	pub fn interval(&self) -> Duration {
		Duration::from_millis(self.interval_ms)
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}

	fn validate(self) -> anyhow::Result<Self> {
		if self.interval_ms == 0 {
			bail!("interval_ms must be greater than zero");
		}
		if self.timeout_ms == 0 {
			bail!("timeout_ms must be greater than zero");
		}
		Ok(self)
	}
}

/// Reads the configuration file at `path`, or the defaults without one.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
	let Some(path) = path else {
		return Ok(Config::default());
	};
	let config_file =
		File::open(path).with_context(|| format!("opening config file {}", path.display()))?;
	parse_config(config_file, path.extension().and_then(|s| s.to_str()))
}

fn parse_config<R: Read>(reader: R, extension: Option<&str>) -> anyhow::Result<Config> {
	let config: Config = match extension {
		Some("yaml") | Some("yml") => serde_yaml::from_reader(reader)?,
		Some("json") => serde_json::from_reader(reader)?,
		None | Some(_) => bail!("unknown config file extension"),
	};
	config.validate()
}
