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

//! IssuingRestocks: orders of new cards for an IssuingStock

pub mod log;

use chrono::{DateTime, FixedOffset};
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::api::Resource;
use crate::checks::DateInput;
use crate::client::Client;
use crate::error::Error;
use crate::rest::{self, Page, Query};

pub use log::Log;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuingRestock {
	/// Number of cards to restock
	pub count: u32,
	pub stock_id: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// `created`, `processing` or `confirmed`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<DateTime<FixedOffset>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated: Option<DateTime<FixedOffset>>,
}

impl IssuingRestock {
	pub fn new(count: u32, stock_id: impl Into<String>) -> Self {
		Self {
			count,
			stock_id: stock_id.into(),
			..Self::default()
		}
	}
}

impl Resource for IssuingRestock {
	const NAME: &'static str = "IssuingRestock";
}

#[derive(Debug, Clone, Default)]
pub struct Filter {
	pub limit: Option<u32>,
	pub after: Option<DateInput>,
	pub before: Option<DateInput>,
	pub status: Vec<String>,
	pub stock_ids: Vec<String>,
	pub tags: Vec<String>,
	pub ids: Vec<String>,
}

impl Filter {
	fn to_query(&self) -> Result<Query, Error> {
		Ok(Query::new()
			.date("after", self.after.as_ref())?
			.date("before", self.before.as_ref())?
			.list("status", &self.status)
			.list("stockIds", &self.stock_ids)
			.list("tags", &self.tags)
			.list("ids", &self.ids))
	}
}

pub async fn create(
	client: &Client,
	restocks: &[IssuingRestock],
) -> Result<Vec<IssuingRestock>, Error> {
	rest::post_multi(client, restocks).await
}

pub async fn get(client: &Client, id: &str) -> Result<IssuingRestock, Error> {
	rest::get_id(client, id).await
}

pub fn query(
	client: &Client,
	filter: &Filter,
) -> Result<BoxStream<'static, Result<IssuingRestock, Error>>, Error> {
	Ok(rest::get_stream(client, filter.limit, filter.to_query()?))
}

pub async fn page(
	client: &Client,
	cursor: Option<&str>,
	filter: &Filter,
) -> Result<Page<IssuingRestock>, Error> {
	rest::get_page(client, cursor, filter.limit, &filter.to_query()?).await
}
