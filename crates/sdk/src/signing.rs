// Copyright 2025 chenjjiaa
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

//! Request signing
//!
//! Every request carries three authentication headers:
//!
//! - `Access-Id`: `project/{id}`, `organization/{id}` or
//!   `organization/{id}/workspace/{workspace_id}`
//! - `Access-Time`: unix time in seconds with microsecond precision
//! - `Access-Signature`: base64 DER secp256k1 signature of
//!   `"{access_id}:{access_time}:{body}"`, hashed with SHA-256
//!
//! Authentication materials never travel in the JSON body.

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use k256::{
	SecretKey,
	ecdsa::{Signature, SigningKey, signature::DigestSigner},
	pkcs8::DecodePrivateKey,
};
use sha2::{Digest, Sha256};

use crate::error::Error;

pub const ACCESS_ID_HEADER: &str = "Access-Id";
pub const ACCESS_TIME_HEADER: &str = "Access-Time";
pub const ACCESS_SIGNATURE_HEADER: &str = "Access-Signature";

/// Authentication headers of a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessHeaders {
	pub access_id: String,
	pub access_time: String,
	pub access_signature: String,
}

impl AccessHeaders {
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		[
			(ACCESS_ID_HEADER, self.access_id.as_str()),
			(ACCESS_TIME_HEADER, self.access_time.as_str()),
			(ACCESS_SIGNATURE_HEADER, self.access_signature.as_str()),
		]
		.into_iter()
	}
}

/// Produces authentication headers for outgoing requests
///
/// The client ships with [`EcdsaAuthenticator`]; other schemes can be
/// plugged in without touching the resource modules.
pub trait Authenticator: Send + Sync {
	fn authenticate(&self, body: &str) -> Result<AccessHeaders, Error>;
}

/// Signs requests with a secp256k1 private key
pub struct EcdsaAuthenticator {
	access_id: String,
	signing_key: SigningKey,
}

impl std::fmt::Debug for EcdsaAuthenticator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EcdsaAuthenticator")
			.field("access_id", &self.access_id)
			.finish_non_exhaustive()
	}
}

impl EcdsaAuthenticator {
	/// Build from a PEM private key (SEC1 `EC PRIVATE KEY` or PKCS#8)
	pub fn from_pem(access_id: impl Into<String>, private_key_pem: &str) -> Result<Self, Error> {
		let secret = SecretKey::from_sec1_pem(private_key_pem)
			.or_else(|_| SecretKey::from_pkcs8_pem(private_key_pem))
			.map_err(|e| Error::Signing(format!("Invalid private key: {}", e)))?;

		Ok(Self {
			access_id: access_id.into(),
			signing_key: SigningKey::from(secret),
		})
	}

	pub fn access_id(&self) -> &str {
		&self.access_id
	}

	/// Sign an arbitrary message, returning the base64 DER signature
	pub fn sign(&self, message: &str) -> Result<String, Error> {
		let signature: Signature = self
			.signing_key
			.try_sign_digest(Sha256::new_with_prefix(message.as_bytes()))
			.map_err(|e| Error::Signing(format!("Signing failed: {}", e)))?;

		Ok(STANDARD.encode(signature.to_der().as_bytes()))
	}
}

impl Authenticator for EcdsaAuthenticator {
	fn authenticate(&self, body: &str) -> Result<AccessHeaders, Error> {
		let now = Utc::now();
		let access_time = format!(
			"{}.{:06}",
			now.timestamp(),
			now.timestamp_subsec_micros()
		);
		let message = format!("{}:{}:{}", self.access_id, access_time, body);

		Ok(AccessHeaders {
			access_id: self.access_id.clone(),
			access_signature: self.sign(&message)?,
			access_time,
		})
	}
}
