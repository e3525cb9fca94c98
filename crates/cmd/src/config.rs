// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{env, time::Duration};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use starkinfra::{ClientConfig, Environment, User};

// Logging configuration constants
/// Default log level (can be overridden by RUST_LOG environment variable)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log directory component name
pub const LOG_COMPONENT_NAME: &str = "starkinfra";

/// Default console output enabled (can be overridden by LOG_TO_CONSOLE environment variable)
pub const DEFAULT_LOG_TO_CONSOLE: bool = false;

// API configuration constants
/// Default API environment (can be overridden by STARKINFRA_ENVIRONMENT)
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";

/// Default `Accept-Language` (can be overridden by STARKINFRA_LANGUAGE)
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default request timeout in seconds (can be overridden by STARKINFRA_TIMEOUT_SECS)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Credentials and API settings of the command line tool
///
/// Exactly one of `project_id` / `organization_id` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
	#[serde(default)]
	pub project_id: Option<String>,
	#[serde(default)]
	pub organization_id: Option<String>,
	#[serde(default)]
	pub workspace_id: Option<String>,
	/// Path to the secp256k1 private key in PEM form
	pub private_key_path: String,
	#[serde(default = "default_environment")]
	pub environment: String,
	#[serde(default = "default_language")]
	pub language: String,
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
	/// Overrides the environment host
	#[serde(default)]
	pub host: Option<String>,
}

fn default_environment() -> String {
	DEFAULT_ENVIRONMENT.to_string()
}

fn default_language() -> String {
	DEFAULT_LANGUAGE.to_string()
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}

impl CliConfig {
	/// Load configuration from `STARKINFRA_*` environment variables (and `.env`)
	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();

		let private_key_path = env::var("STARKINFRA_PRIVATE_KEY_PATH")
			.context("STARKINFRA_PRIVATE_KEY_PATH is not set")?;

		let environment =
			env::var("STARKINFRA_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

		let language =
			env::var("STARKINFRA_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

		let timeout_secs = env::var("STARKINFRA_TIMEOUT_SECS")
			.ok()
			.and_then(|v| v.parse().ok())
			.unwrap_or(DEFAULT_TIMEOUT_SECS);

		Ok(Self {
			project_id: env::var("STARKINFRA_PROJECT_ID").ok(),
			organization_id: env::var("STARKINFRA_ORGANIZATION_ID").ok(),
			workspace_id: env::var("STARKINFRA_WORKSPACE_ID").ok(),
			private_key_path,
			environment,
			language,
			timeout_secs,
			host: env::var("STARKINFRA_HOST").ok(),
		})
	}

	/// Load configuration from file, `STARKINFRA_*` variables taking precedence
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix("STARKINFRA"))
			.build()?;

		cfg.try_deserialize()
	}

	/// Build the API user, reading the private key from disk
	pub fn user(&self) -> Result<User> {
		let private_key = std::fs::read_to_string(&self.private_key_path)
			.with_context(|| format!("Failed to read private key: {}", self.private_key_path))?;

		match (&self.project_id, &self.organization_id) {
			(Some(project_id), None) => Ok(User::project(project_id, private_key)),
			(None, Some(organization_id)) => Ok(User::organization(
				organization_id,
				private_key,
				self.workspace_id.clone(),
			)),
			(Some(_), Some(_)) => bail!("set either a project id or an organization id, not both"),
			(None, None) => bail!("a project id or an organization id is required"),
		}
	}

	pub fn client_config(&self) -> Result<ClientConfig> {
		let environment: Environment = self
			.environment
			.parse()
			.with_context(|| format!("Invalid environment: {}", self.environment))?;

		Ok(ClientConfig {
			environment,
			host: self.host.clone(),
			language: self.language.clone(),
			timeout: Duration::from_secs(self.timeout_secs),
			..ClientConfig::default()
		})
	}
}
