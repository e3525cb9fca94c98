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

//! IndividualIdentities
//!
//! An identity is created empty, receives its documents and is then moved
//! to `processing` with [`update`] to start the validation.

pub mod log;

use chrono::{DateTime, FixedOffset};
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::Resource;
use crate::checks::DateInput;
use crate::client::Client;
use crate::error::Error;
use crate::rest::{self, Page, Query};

pub use log::Log;

/// Identity of a natural person to be validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualIdentity {
	pub name: String,
	/// CPF, e.g. `"594.739.480-42"`
	pub tax_id: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// `created`, `canceled`, `processing`, `failed` or `success`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<DateTime<FixedOffset>>,
}

impl IndividualIdentity {
	pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			tax_id: tax_id.into(),
			..Self::default()
		}
	}
}

impl Resource for IndividualIdentity {
	const NAME: &'static str = "IndividualIdentity";
}

#[derive(Debug, Clone, Default)]
pub struct Filter {
	pub limit: Option<u32>,
	pub after: Option<DateInput>,
	pub before: Option<DateInput>,
	pub status: Vec<String>,
	pub tags: Vec<String>,
	pub ids: Vec<String>,
}

impl Filter {
	fn to_query(&self) -> Result<Query, Error> {
		Ok(Query::new()
			.date("after", self.after.as_ref())?
			.date("before", self.before.as_ref())?
			.list("status", &self.status)
			.list("tags", &self.tags)
			.list("ids", &self.ids))
	}
}

pub async fn create(
	client: &Client,
	identities: &[IndividualIdentity],
) -> Result<Vec<IndividualIdentity>, Error> {
	rest::post_multi(client, identities).await
}

pub async fn get(client: &Client, id: &str) -> Result<IndividualIdentity, Error> {
	rest::get_id(client, id).await
}

pub fn query(
	client: &Client,
	filter: &Filter,
) -> Result<BoxStream<'static, Result<IndividualIdentity, Error>>, Error> {
	Ok(rest::get_stream(client, filter.limit, filter.to_query()?))
}

pub async fn page(
	client: &Client,
	cursor: Option<&str>,
	filter: &Filter,
) -> Result<Page<IndividualIdentity>, Error> {
	rest::get_page(client, cursor, filter.limit, &filter.to_query()?).await
}

/// Move an identity forward, usually to `"processing"` once its documents are sent
pub async fn update(client: &Client, id: &str, status: &str) -> Result<IndividualIdentity, Error> {
	rest::patch_id(client, id, &json!({ "status": status })).await
}

pub async fn cancel(client: &Client, id: &str) -> Result<IndividualIdentity, Error> {
	rest::delete_id(client, id).await
}
