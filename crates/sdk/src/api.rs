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

//! Resource naming and JSON mapping
//!
//! Every entity exposed by the API is described by a [`Resource`]. Its
//! `NAME` drives the endpoint path and the JSON envelope keys:
//!
//! | NAME | endpoint | single key | list key |
//! |------|----------|------------|----------|
//! | `CreditNote` | `credit-note` | `note` | `notes` |
//! | `CreditNoteLog` | `credit-note/log` | `log` | `logs` |
//! | `IndividualIdentity` | `individual-identity` | `identity` | `identities` |

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::Error;

/// Entity served by the API under its own endpoint
pub trait Resource: Serialize + DeserializeOwned {
	/// CamelCase resource name, e.g. `CreditNote`
	const NAME: &'static str;

	/// Resolve fields whose schema depends on sibling fields
	fn normalize(self) -> Result<Self, Error> {
		Ok(self)
	}
}

fn camel_to_kebab(name: &str) -> String {
	let mut kebab = String::with_capacity(name.len() + 4);
	for (i, c) in name.chars().enumerate() {
		if c.is_ascii_uppercase() {
			if i > 0 {
				kebab.push('-');
			}
			kebab.push(c.to_ascii_lowercase());
		} else {
			kebab.push(c);
		}
	}
	kebab
}

/// Endpoint path of a resource, relative to the API root
pub fn endpoint(name: &str) -> String {
	camel_to_kebab(name).replace("-log", "/log")
}

/// Envelope key of a single entity response
pub fn last_name(name: &str) -> String {
	camel_to_kebab(name)
		.rsplit('-')
		.next()
		.unwrap_or_default()
		.to_string()
}

/// Envelope key of a list response
pub fn last_name_plural(name: &str) -> String {
	let base = last_name(name);
	if base.ends_with('s') {
		base
	} else if base.ends_with("ey") {
		format!("{base}s")
	} else if let Some(stem) = base.strip_suffix('y') {
		format!("{stem}ies")
	} else {
		format!("{base}s")
	}
}

/// Decode a camelCase JSON object into a typed entity
pub fn from_api_json<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
	Ok(serde_json::from_value(value)?)
}

/// Decode an API entity and normalize its nested sub-resources
pub fn decode<T: Resource>(value: Value) -> Result<T, Error> {
	from_api_json::<T>(value)?.normalize()
}

/// Encode an entity as camelCase JSON, absent fields omitted
pub fn to_api_json<T: Serialize>(entity: &T) -> Result<Value, Error> {
	Ok(serde_json::to_value(entity)?)
}

/// Either an already typed entity or a raw JSON mapping of one
///
/// Nested sub-resources accept both forms; [`Entity::resolve`] turns either
/// into the typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity<T> {
	Typed(T),
	Json(Value),
}

impl<T: DeserializeOwned> Entity<T> {
	pub fn resolve(self) -> Result<T, Error> {
		match self {
			Entity::Typed(entity) => Ok(entity),
			Entity::Json(value @ Value::Object(_)) => from_api_json(value).map_err(|e| {
				Error::InvalidArgument(format!(
					"could not decode {}: {}",
					std::any::type_name::<T>(),
					e
				))
			}),
			Entity::Json(other) => Err(Error::InvalidArgument(format!(
				"{} must be a JSON object, but not a {}",
				std::any::type_name::<T>(),
				json_type_name(&other)
			))),
		}
	}
}

impl<T> From<T> for Entity<T> {
	fn from(entity: T) -> Self {
		Entity::Typed(entity)
	}
}

/// Resolve a list of mixed typed/raw entities
pub fn resolve_all<T, I>(entities: I) -> Result<Vec<T>, Error>
where
	T: DeserializeOwned,
	I: IntoIterator<Item = Entity<T>>,
{
	entities.into_iter().map(Entity::resolve).collect()
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
