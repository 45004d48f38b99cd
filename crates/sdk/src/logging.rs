// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Builder for the `tracing` subscriber a module installs

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Output format of log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
	/// Single line text: level, target and message
	#[default]
	Compact,
	/// JSON lines for structured log collection
	Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
	/// `EnvFilter` directives, e.g. `info,modkit_catalog=trace`
	pub filter: String,
	pub format: LogFormat,
	pub with_target: bool,
	/// Prefer `RUST_LOG` over `filter` when it is set
	pub respect_env: bool,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
			format: LogFormat::Compact,
			with_target: true,
			respect_env: true,
		}
	}
}

/// Builder for configuring module logging
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
	config: LoggingConfig,
}

impl LoggingBuilder {
	/// Create a new logging builder with default settings
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(config: LoggingConfig) -> Self {
		Self {
			config,
		}
	}

	/// Set the filter directives
	pub fn filter(mut self, directives: impl Into<String>) -> Self {
		self.config.filter = directives.into();
		self
	}

	pub fn json(mut self) -> Self {
		self.config.format = LogFormat::Json;
		self
	}

	pub fn compact(mut self) -> Self {
		self.config.format = LogFormat::Compact;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.config.with_target = with_target;
		self
	}

	pub fn respect_env(mut self, respect_env: bool) -> Self {
		self.config.respect_env = respect_env;
		self
	}

	pub fn config(&self) -> &LoggingConfig {
		&self.config
	}

	pub fn into_config(self) -> LoggingConfig {
		self.config
	}

	pub fn env_filter(&self) -> EnvFilter {
		if self.config.respect_env {
			if let Ok(filter) = EnvFilter::try_from_default_env() {
				return filter;
			}
		}
		EnvFilter::new(&self.config.filter)
	}

	/// Installs the global subscriber. Returns `false` when one is already installed.
	pub fn init(self) -> bool {
		let filter = self.env_filter();
		let builder = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(self.config.with_target)
			.with_writer(std::io::stderr);
		let result = match self.config.format {
			LogFormat::Compact => builder.compact().try_init(),
			LogFormat::Json => builder.json().try_init(),
		};
		result.is_ok()
	}
}
