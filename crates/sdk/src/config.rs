// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_catalog::{ErrorReporting, def::{CaseConversionPolicy, MODULE_DEF_VERSION}};
use serde::{Deserialize, Serialize};

use crate::logging::{LoggingBuilder, LoggingConfig};

/// Settings of a module build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
	/// Version byte written in front of the schema document.
	pub version: u8,
	/// Omitted from the document when `None`.
	pub case_conversion_policy: Option<CaseConversionPolicy>,
	pub error_reporting: ErrorReporting,
	/// Prefix view results with the one byte result kind header.
	pub view_result_header: bool,
	pub logging: LoggingConfig,
}

impl Default for ModuleConfig {
	fn default() -> Self {
		Self {
			version: MODULE_DEF_VERSION,
			case_conversion_policy: None,
			error_reporting: ErrorReporting::default(),
			view_result_header: false,
			logging: LoggingConfig::default(),
		}
	}
}

impl ModuleConfig {
	pub fn builder() -> ModuleConfigBuilder {
		ModuleConfigBuilder {
			config: ModuleConfig::default(),
		}
	}

	pub fn logging_builder(&self) -> LoggingBuilder {
		LoggingBuilder::from_config(self.logging.clone())
	}
}

pub struct ModuleConfigBuilder {
	config: ModuleConfig,
}

impl ModuleConfigBuilder {
	pub fn version(mut self, version: u8) -> Self {
		self.config.version = version;
		self
	}

	pub fn case_conversion_policy(mut self, policy: CaseConversionPolicy) -> Self {
		self.config.case_conversion_policy = Some(policy);
		self
	}

	pub fn error_reporting(mut self, reporting: ErrorReporting) -> Self {
		self.config.error_reporting = reporting;
		self
	}

	pub fn view_result_header(mut self, enabled: bool) -> Self {
		self.config.view_result_header = enabled;
		self
	}

	/// Adjusts the logging settings through a configurator.
	pub fn logging<F>(mut self, configurator: F) -> Self
	where
		F: FnOnce(LoggingBuilder) -> LoggingBuilder,
	{
		self.config.logging = configurator(LoggingBuilder::from_config(self.config.logging)).into_config();
		self
	}

	pub fn build(self) -> ModuleConfig {
		self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::logging::LogFormat;

	#[test]
	fn test_defaults() {
		let config = ModuleConfig::default();
		assert_eq!(config.version, 1);
		assert_eq!(config.case_conversion_policy, None);
		assert_eq!(config.error_reporting, ErrorReporting::Precedence);
	}

	#[test]
	fn test_builder() {
		let config = ModuleConfig::builder()
			.case_conversion_policy(CaseConversionPolicy::CamelCase)
			.error_reporting(ErrorReporting::Collect)
			.logging(|logging| logging.filter("debug").json())
			.build();
		assert_eq!(config.case_conversion_policy, Some(CaseConversionPolicy::CamelCase));
		assert_eq!(config.error_reporting, ErrorReporting::Collect);
		assert_eq!(config.logging.format, LogFormat::Json);
		assert_eq!(config.logging_builder().config().filter, "debug");
	}

	#[test]
	fn test_deserialize_partial() {
		let config: ModuleConfig =
			serde_json::from_str(r#"{"case_conversion_policy": "snake_case", "error_reporting": "collect"}"#).unwrap();
		assert_eq!(config.version, 1);
		assert_eq!(config.case_conversion_policy, Some(CaseConversionPolicy::SnakeCase));
		assert_eq!(config.error_reporting, ErrorReporting::Collect);
		assert_eq!(config.logging, LoggingConfig::default());
	}
}
