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

//! Error types returned by every SDK operation
//!
//! The API answers with the following shapes:
//!
//! - `2xx`: success, body is the JSON envelope of the requested resource
//! - `400`: input errors, body is `{"errors": [{"code": ..., "message": ...}]}`
//! - `500`: internal server error, body is not meaningful
//! - anything else: unknown error, body is kept verbatim

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for SDK operations
#[derive(Debug, Error)]
pub enum Error {
	#[error("Input errors: {}", format_elements(.0))]
	InputErrors(Vec<ErrorElement>),
	#[error("Houston, we have a problem.")]
	InternalServerError,
	#[error("Unknown error: {0}")]
	UnknownError(String),
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Signing error: {0}")]
	Signing(String),
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Invalid URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

impl Error {
	/// Error codes of an input error response, empty for every other kind
	pub fn codes(&self) -> Vec<&str> {
		match self {
			Error::InputErrors(elements) => elements.iter().map(|e| e.code.as_str()).collect(),
			_ => Vec::new(),
		}
	}
}

/// Single entry of an input error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorElement {
	pub code: String,
	pub message: String,
}

impl std::fmt::Display for ErrorElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.code, self.message)
	}
}

#[derive(Deserialize)]
struct ErrorEnvelope {
	#[serde(default)]
	errors: Vec<ErrorElement>,
}

fn format_elements(elements: &[ErrorElement]) -> String {
	elements
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}

/// Map a non-success HTTP status and its body to an [`Error`]
pub(crate) fn from_status(status: u16, body: &str) -> Error {
	match status {
		500 => Error::InternalServerError,
		400 => match serde_json::from_str::<ErrorEnvelope>(body) {
			Ok(envelope) if !envelope.errors.is_empty() => Error::InputErrors(envelope.errors),
			_ => Error::UnknownError(body.to_string()),
		},
		_ => Error::UnknownError(body.to_string()),
	}
}
