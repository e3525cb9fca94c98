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

//! Shared REST helpers
//!
//! Resource modules never talk HTTP themselves; they describe the entity
//! ([`Resource`]) and the filters ([`Query`]) and call one of:
//!
//! - [`post_multi`] / [`post_single`]: create
//! - [`get_id`] / [`delete_id`] / [`patch_id`]: single entity by id
//! - [`get_page`]: one bounded page plus the cursor to the next one
//! - [`get_stream`]: lazy sequence that keeps paging until the cursor runs out

use std::collections::VecDeque;

use futures::stream::{self, BoxStream, StreamExt};
use reqwest::Method;
use serde_json::{Map, Value};

use crate::api::{self, Resource};
use crate::checks::{DateInput, check_date};
use crate::client::Client;
use crate::error::Error;

/// Largest page the API serves, also its default page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of entities and the cursor to the next page
pub type Page<T> = (Vec<T>, Option<String>);

/// Query-string filters of a list endpoint
///
/// Keys are camelCase, lists are comma-joined, dates are `YYYY-MM-DD` and
/// absent values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
	pairs: Vec<(String, String)>,
}

impl Query {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn value<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
		if let Some(value) = value {
			self.set(key, value.to_string());
		}
		self
	}

	pub fn list(mut self, key: &str, values: &[String]) -> Self {
		if !values.is_empty() {
			self.set(key, values.join(","));
		}
		self
	}

	pub fn date(mut self, key: &str, value: Option<&DateInput>) -> Result<Self, Error> {
		if let Some(value) = value {
			let date = check_date(value)?;
			self.set(key, date.format("%Y-%m-%d").to_string());
		}
		Ok(self)
	}

	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}

	fn set(&mut self, key: &str, value: String) {
		match self.pairs.iter_mut().find(|(k, _)| k == key) {
			Some(pair) => pair.1 = value,
			None => self.pairs.push((key.to_string(), value)),
		}
	}

	fn with_page(&self, cursor: Option<&str>, limit: Option<u32>) -> Self {
		let mut query = self.clone();
		if let Some(limit) = limit {
			query.set("limit", limit.to_string());
		}
		if let Some(cursor) = cursor {
			query.set("cursor", cursor.to_string());
		}
		query
	}
}

fn take_field(json: &mut Value, key: &str) -> Result<Value, Error> {
	json.get_mut(key)
		.map(Value::take)
		.ok_or_else(|| Error::UnknownError(format!("response is missing the {key:?} field")))
}

fn decode_list<T: Resource>(json: &mut Value) -> Result<Vec<T>, Error> {
	match take_field(json, &api::last_name_plural(T::NAME))? {
		Value::Array(items) => items.into_iter().map(api::decode).collect(),
		other => Err(Error::UnknownError(format!(
			"expected a list of {} but got {}",
			T::NAME,
			api::json_type_name(&other)
		))),
	}
}

/// Create several entities in one request
pub async fn post_multi<T: Resource>(client: &Client, entities: &[T]) -> Result<Vec<T>, Error> {
	let items = entities
		.iter()
		.map(api::to_api_json)
		.collect::<Result<Vec<_>, _>>()?;
	let mut payload = Map::new();
	payload.insert(api::last_name_plural(T::NAME), Value::Array(items));

	let mut json = client
		.fetch(
			Method::POST,
			&api::endpoint(T::NAME),
			&[],
			Some(&Value::Object(payload)),
		)
		.await?;
	decode_list(&mut json)
}

/// Create a single entity
pub async fn post_single<T: Resource>(client: &Client, entity: &T) -> Result<T, Error> {
	let payload = api::to_api_json(entity)?;
	let mut json = client
		.fetch(Method::POST, &api::endpoint(T::NAME), &[], Some(&payload))
		.await?;
	api::decode(take_field(&mut json, &api::last_name(T::NAME))?)
}

/// Ids are sent as a single path segment
fn check_id(name: &str, id: &str) -> Result<(), Error> {
	if id.is_empty() {
		return Err(Error::InvalidArgument(format!("{name} id must not be empty")));
	}
	if id == "." || id == ".." || id.contains(['/', '\\', '?', '#', '%']) {
		return Err(Error::InvalidArgument(format!("invalid {name} id {id:?}")));
	}
	Ok(())
}

async fn by_id<T: Resource>(
	client: &Client,
	method: Method,
	id: &str,
	payload: Option<&Value>,
) -> Result<T, Error> {
	check_id(T::NAME, id)?;
	let path = format!("{}/{}", api::endpoint(T::NAME), id);
	let mut json = client.fetch(method, &path, &[], payload).await?;
	api::decode(take_field(&mut json, &api::last_name(T::NAME))?)
}

/// Fetch a single entity by id
pub async fn get_id<T: Resource>(client: &Client, id: &str) -> Result<T, Error> {
	by_id(client, Method::GET, id, None).await
}

/// Delete (or cancel) an entity by id, returning its final state
pub async fn delete_id<T: Resource>(client: &Client, id: &str) -> Result<T, Error> {
	by_id(client, Method::DELETE, id, None).await
}

/// Partially update an entity by id
pub async fn patch_id<T: Resource>(client: &Client, id: &str, payload: &Value) -> Result<T, Error> {
	by_id(client, Method::PATCH, id, Some(payload)).await
}

/// Fetch one page of entities
///
/// `limit` defaults to and may not exceed [`MAX_PAGE_SIZE`]. The returned
/// cursor is `None` once the last page has been served.
pub async fn get_page<T: Resource>(
	client: &Client,
	cursor: Option<&str>,
	limit: Option<u32>,
	query: &Query,
) -> Result<Page<T>, Error> {
	if let Some(limit) = limit
		&& !(1..=MAX_PAGE_SIZE).contains(&limit)
	{
		return Err(Error::InvalidArgument(format!(
			"limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
		)));
	}

	let query = query.with_page(cursor.filter(|c| !c.is_empty()), limit);
	let mut json = client
		.fetch(Method::GET, &api::endpoint(T::NAME), query.pairs(), None)
		.await?;

	let entities = decode_list(&mut json)?;
	let cursor = match json.get("cursor") {
		Some(Value::String(cursor)) if !cursor.is_empty() => Some(cursor.clone()),
		_ => None,
	};
	Ok((entities, cursor))
}

struct StreamState<T> {
	client: Client,
	query: Query,
	remaining: Option<u32>,
	cursor: Option<String>,
	buffer: VecDeque<T>,
	exhausted: bool,
}

/// Lazily stream every entity matching `query`
///
/// Pages are requested on demand with `min(remaining, 100)` items each. The
/// stream ends when the server stops returning a cursor or `limit` entities
/// have been yielded; `None` means unlimited.
pub fn get_stream<T>(client: &Client, limit: Option<u32>, query: Query) -> BoxStream<'static, Result<T, Error>>
where
	T: Resource + Send + 'static,
{
	let state = StreamState {
		client: client.clone(),
		query,
		remaining: limit,
		cursor: None,
		buffer: VecDeque::new(),
		exhausted: limit == Some(0),
	};

	stream::try_unfold(state, |mut state| async move {
		loop {
			if let Some(entity) = state.buffer.pop_front() {
				return Ok(Some((entity, state)));
			}
			if state.exhausted {
				return Ok(None);
			}

			let page_size = state
				.remaining
				.map_or(MAX_PAGE_SIZE, |remaining| remaining.min(MAX_PAGE_SIZE));
			let (mut entities, cursor) = get_page::<T>(
				&state.client,
				state.cursor.as_deref(),
				Some(page_size),
				&state.query,
			)
			.await?;

			if let Some(remaining) = state.remaining.as_mut() {
				entities.truncate(*remaining as usize);
				*remaining -= entities.len() as u32;
			}
			state.exhausted = cursor.is_none() || state.remaining == Some(0);
			state.cursor = cursor;
			state.buffer.extend(entities);
		}
	})
	.boxed()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_query_skips_absent_values() {
		let query = Query::new()
			.value("limit", None::<u32>)
			.list("tags", &[])
			.date("after", None)
			.unwrap();
		assert!(query.pairs().is_empty());
	}

	#[test]
	fn test_query_formats_values() {
		let query = Query::new()
			.list("status", &["created".to_string(), "signed".to_string()])
			.date("after", Some(&"2020-03-10T10:30:00+00:00".into()))
			.unwrap()
			.value("keyType", Some("cpf"));

		assert_eq!(
			query.pairs(),
			&[
				("status".to_string(), "created,signed".to_string()),
				("after".to_string(), "2020-03-10".to_string()),
				("keyType".to_string(), "cpf".to_string()),
			]
		);
	}

	#[test]
	fn test_query_rejects_invalid_date() {
		assert!(Query::new().date("before", Some(&"yesterday".into())).is_err());
	}

	#[test]
	fn test_check_id_rejects_path_changing_ids() {
		assert!(check_id("CreditNote", "5656565656565656").is_ok());
		for id in ["", ".", "..", "../webhook", "1/log", "1?limit=1", "1#x", "%2e%2e"] {
			assert!(
				matches!(check_id("CreditNote", id), Err(Error::InvalidArgument(_))),
				"{id:?} was accepted"
			);
		}
	}

	#[test]
	fn test_with_page_overrides_limit_and_cursor() {
		let query = Query::new().value("limit", Some(7));
		let paged = query.with_page(Some("abc"), Some(50));
		assert_eq!(
			paged.pairs(),
			&[
				("limit".to_string(), "50".to_string()),
				("cursor".to_string(), "abc".to_string()),
			]
		);
	}
}
