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

//! PixClaims
//!
//! A PixClaim requests the transfer of a Pix key from an account held in
//! another institution (portability) or from another owner (ownership).

pub mod log;

use chrono::{DateTime, FixedOffset};
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::Resource;
use crate::checks::DateInput;
use crate::client::Client;
use crate::error::Error;
use crate::rest::{self, Page, Query};

pub use log::Log;

/// PixClaim entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixClaim {
	/// Opening datetime of the claimer's account
	pub account_created: String,
	pub account_number: String,
	/// `checking`, `savings`, `salary` or `payment`
	pub account_type: String,
	pub branch_code: String,
	pub name: String,
	pub tax_id: String,
	/// Claimed Pix key, e.g. `"+5511989898989"`
	pub key_id: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// `ownership` or `portability`
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key_type: Option<String>,
	/// `in` when you are the claimed party, `out` when you are the claimer
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub flow: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub claimer_bank_code: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub claimed_bank_code: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<DateTime<FixedOffset>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated: Option<DateTime<FixedOffset>>,
}

impl Resource for PixClaim {
	const NAME: &'static str = "PixClaim";
}

/// Filters of [`query`] and [`page`]
#[derive(Debug, Clone, Default)]
pub struct Filter {
	pub limit: Option<u32>,
	pub after: Option<DateInput>,
	pub before: Option<DateInput>,
	pub status: Vec<String>,
	pub ids: Vec<String>,
	pub kind: Option<String>,
	pub flow: Option<String>,
	pub tags: Vec<String>,
	pub key_type: Option<String>,
	pub key_id: Option<String>,
}

impl Filter {
	fn to_query(&self) -> Result<Query, Error> {
		Ok(Query::new()
			.date("after", self.after.as_ref())?
			.date("before", self.before.as_ref())?
			.list("status", &self.status)
			.list("ids", &self.ids)
			.value("type", self.kind.as_ref())
			.value("flow", self.flow.as_ref())
			.list("tags", &self.tags)
			.value("keyType", self.key_type.as_ref())
			.value("keyId", self.key_id.as_ref()))
	}
}

/// Open a PixClaim
pub async fn create(client: &Client, claim: &PixClaim) -> Result<PixClaim, Error> {
	rest::post_single(client, claim).await
}

pub async fn get(client: &Client, id: &str) -> Result<PixClaim, Error> {
	rest::get_id(client, id).await
}

pub fn query(
	client: &Client,
	filter: &Filter,
) -> Result<BoxStream<'static, Result<PixClaim, Error>>, Error> {
	Ok(rest::get_stream(client, filter.limit, filter.to_query()?))
}

pub async fn page(
	client: &Client,
	cursor: Option<&str>,
	filter: &Filter,
) -> Result<Page<PixClaim>, Error> {
	rest::get_page(client, cursor, filter.limit, &filter.to_query()?).await
}

/// Confirm or cancel a PixClaim
///
/// `status` is `"confirmed"` or `"canceled"`; `reason` is one of `fraud`,
/// `userRequested`, `accountClosure`, `defaultOperation` or `reconciliation`.
pub async fn update(
	client: &Client,
	id: &str,
	status: &str,
	reason: Option<&str>,
) -> Result<PixClaim, Error> {
	let mut payload = Map::new();
	payload.insert("status".to_string(), Value::from(status));
	if let Some(reason) = reason {
		payload.insert("reason".to_string(), Value::from(reason));
	}
	rest::patch_id(client, id, &Value::Object(payload)).await
}
