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

use std::{sync::Arc, time::Duration};

use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{self, Error};
use crate::signing::{Authenticator, EcdsaAuthenticator};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default API version segment
pub const DEFAULT_API_VERSION: &str = "v2";

/// Default `Accept-Language` header
pub const DEFAULT_LANGUAGE: &str = "en-US";

const PRODUCTION_HOST: &str = "https://api.starkinfra.com";
const SANDBOX_HOST: &str = "https://sandbox.api.starkinfra.com";

/// API environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
	Production,
	#[default]
	Sandbox,
}

impl Environment {
	pub fn host(&self) -> &'static str {
		match self {
			Environment::Production => PRODUCTION_HOST,
			Environment::Sandbox => SANDBOX_HOST,
		}
	}
}

impl std::str::FromStr for Environment {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"production" => Ok(Environment::Production),
			"sandbox" => Ok(Environment::Sandbox),
			other => Err(Error::InvalidArgument(format!(
				"environment must be \"production\" or \"sandbox\", not {other:?}"
			))),
		}
	}
}

/// Credentials the API knows requests by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum User {
	Project {
		id: String,
		private_key: String,
	},
	Organization {
		id: String,
		private_key: String,
		workspace_id: Option<String>,
	},
}

impl User {
	pub fn project(id: impl Into<String>, private_key: impl Into<String>) -> Self {
		User::Project {
			id: id.into(),
			private_key: private_key.into(),
		}
	}

	pub fn organization(
		id: impl Into<String>,
		private_key: impl Into<String>,
		workspace_id: Option<String>,
	) -> Self {
		User::Organization {
			id: id.into(),
			private_key: private_key.into(),
			workspace_id,
		}
	}

	/// Value of the `Access-Id` header
	pub fn access_id(&self) -> String {
		match self {
			User::Project { id, .. } => format!("project/{}", id),
			User::Organization {
				id,
				workspace_id: Some(workspace_id),
				..
			} => format!("organization/{}/workspace/{}", id, workspace_id),
			User::Organization { id, .. } => format!("organization/{}", id),
		}
	}

	pub fn private_key(&self) -> &str {
		match self {
			User::Project { private_key, .. } | User::Organization { private_key, .. } => {
				private_key
			}
		}
	}
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub environment: Environment,
	/// Overrides the environment host, e.g. for a local mock server
	pub host: Option<String>,
	pub api_version: String,
	pub language: String,
	pub timeout: Duration,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			environment: Environment::default(),
			host: None,
			api_version: DEFAULT_API_VERSION.to_string(),
			language: DEFAULT_LANGUAGE.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

impl ClientConfig {
	fn base_url(&self) -> Result<Url, Error> {
		let host = self
			.host
			.as_deref()
			.unwrap_or_else(|| self.environment.host())
			.trim_end_matches('/');
		Ok(Url::parse(&format!("{}/{}/", host, self.api_version))?)
	}
}

/// Authenticated client for the REST API
///
/// Cheap to clone; resource operations borrow it, e.g.
/// `creditnote::get(&client, "5656565656565656")`.
#[derive(Clone)]
pub struct Client {
	base_url: Url,
	language: String,
	client: ReqwestClient,
	authenticator: Arc<dyn Authenticator>,
}

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("language", &self.language)
			.finish_non_exhaustive()
	}
}

impl Client {
	/// Create a sandbox client for the given user
	pub fn new(user: &User) -> Result<Self, Error> {
		Self::with_config(user, ClientConfig::default())
	}

	/// Create a new client with custom configuration
	pub fn with_config(user: &User, config: ClientConfig) -> Result<Self, Error> {
		let authenticator = EcdsaAuthenticator::from_pem(user.access_id(), user.private_key())?;
		Self::with_authenticator(Arc::new(authenticator), config)
	}

	/// Create a client that signs requests with a custom authenticator
	pub fn with_authenticator(
		authenticator: Arc<dyn Authenticator>,
		config: ClientConfig,
	) -> Result<Self, Error> {
		let client = ReqwestClient::builder().timeout(config.timeout).build()?;

		Ok(Self {
			base_url: config.base_url()?,
			language: config.language,
			client,
			authenticator,
		})
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Perform an authenticated request and return the decoded JSON body
	pub(crate) async fn fetch(
		&self,
		method: Method,
		path: &str,
		query: &[(String, String)],
		payload: Option<&Value>,
	) -> Result<Value, Error> {
		let mut url = self.base_url.join(path)?;
		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query);
		}

		let body = match payload {
			Some(payload) => serde_json::to_string(payload)?,
			None => String::new(),
		};
		let headers = self.authenticator.authenticate(&body)?;

		debug!(target: "starkinfra::rest", "{} {}", method, url);

		let mut request = self
			.client
			.request(method.clone(), url.clone())
			.header("User-Agent", concat!("Rust-SDK-", env!("CARGO_PKG_VERSION")))
			.header("Accept-Language", &self.language)
			.header("Content-Type", "application/json");
		for (name, value) in headers.iter() {
			request = request.header(name, value);
		}
		if payload.is_some() {
			request = request.body(body);
		}

		let response = request.send().await?;
		let status = response.status();
		let text = response.text().await?;

		if !status.is_success() {
			warn!(
				target: "starkinfra::rest",
				"{} {} failed with HTTP {}", method, url.path(), status
			);
			return Err(error::from_status(status.as_u16(), &text));
		}

		Ok(serde_json::from_str(&text)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_access_id() {
		assert_eq!(User::project("123", "").access_id(), "project/123");
		assert_eq!(
			User::organization("456", "", None).access_id(),
			"organization/456"
		);
		assert_eq!(
			User::organization("456", "", Some("789".to_string())).access_id(),
			"organization/456/workspace/789"
		);
	}

	#[test]
	fn test_base_url() {
		let config = ClientConfig::default();
		assert_eq!(
			config.base_url().unwrap().as_str(),
			"https://sandbox.api.starkinfra.com/v2/"
		);

		let config = ClientConfig {
			environment: Environment::Production,
			..ClientConfig::default()
		};
		assert_eq!(
			config.base_url().unwrap().as_str(),
			"https://api.starkinfra.com/v2/"
		);

		let config = ClientConfig {
			host: Some("http://localhost:8080/".to_string()),
			..ClientConfig::default()
		};
		assert_eq!(
			config.base_url().unwrap().as_str(),
			"http://localhost:8080/v2/"
		);
	}

	#[test]
	fn test_environment_from_str() {
		assert_eq!(
			"Production".parse::<Environment>().unwrap(),
			Environment::Production
		);
		assert!("staging".parse::<Environment>().is_err());
	}

	#[test]
	fn test_client_creation_rejects_bad_key() {
		let user = User::project("123", "garbage");
		assert!(matches!(Client::new(&user), Err(Error::Signing(_))));
	}
}
