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

//! CreditNote logs
//!
//! Every update of a CreditNote generates a log. Logs are never created by
//! the user, only retrieved.

use chrono::{DateTime, FixedOffset};
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use super::CreditNote;
use crate::api::Resource;
use crate::checks::DateInput;
use crate::client::Client;
use crate::error::Error;
use crate::rest::{self, Page, Query};

/// CreditNote event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
	pub id: String,
	pub note: CreditNote,
	#[serde(default)]
	pub errors: Vec<String>,
	/// `canceled`, `created`, `expired`, `failed`, `refunded`, `registered`,
	/// `sending`, `sent`, `signed` or `success`
	#[serde(rename = "type")]
	pub kind: String,
	pub created: DateTime<FixedOffset>,
}

impl Resource for Log {
	const NAME: &'static str = "CreditNoteLog";

	fn normalize(mut self) -> Result<Self, Error> {
		self.note = self.note.normalize()?;
		Ok(self)
	}
}

/// Filters of [`query`] and [`page`]
#[derive(Debug, Clone, Default)]
pub struct Filter {
	pub limit: Option<u32>,
	pub after: Option<DateInput>,
	pub before: Option<DateInput>,
	pub types: Vec<String>,
	pub note_ids: Vec<String>,
}

impl Filter {
	fn to_query(&self) -> Result<Query, Error> {
		Ok(Query::new()
			.date("after", self.after.as_ref())?
			.date("before", self.before.as_ref())?
			.list("types", &self.types)
			.list("noteIds", &self.note_ids))
	}
}

pub async fn get(client: &Client, id: &str) -> Result<Log, Error> {
	rest::get_id(client, id).await
}

pub fn query(client: &Client, filter: &Filter) -> Result<BoxStream<'static, Result<Log, Error>>, Error> {
	Ok(rest::get_stream(client, filter.limit, filter.to_query()?))
}

pub async fn page(client: &Client, cursor: Option<&str>, filter: &Filter) -> Result<Page<Log>, Error> {
	rest::get_page(client, cursor, filter.limit, &filter.to_query()?).await
}
