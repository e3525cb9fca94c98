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

//! Webhook subscriptions
//!
//! A webhook tells the API where to POST events of the subscribed
//! services, e.g. `"credit-note"`, `"pix-claim"` or `"issuing-card"`.

use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::api::Resource;
use crate::client::Client;
use crate::error::Error;
use crate::rest::{self, Page, Query};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
	pub url: String,
	pub subscriptions: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
}

impl Webhook {
	pub fn new<S: Into<String>>(url: impl Into<String>, subscriptions: impl IntoIterator<Item = S>) -> Self {
		Self {
			url: url.into(),
			subscriptions: subscriptions.into_iter().map(Into::into).collect(),
			id: None,
		}
	}
}

impl Resource for Webhook {
	const NAME: &'static str = "Webhook";
}

pub async fn create(client: &Client, webhook: &Webhook) -> Result<Webhook, Error> {
	rest::post_single(client, webhook).await
}

pub async fn get(client: &Client, id: &str) -> Result<Webhook, Error> {
	rest::get_id(client, id).await
}

pub fn query(client: &Client, limit: Option<u32>) -> BoxStream<'static, Result<Webhook, Error>> {
	rest::get_stream(client, limit, Query::new())
}

pub async fn page(
	client: &Client,
	cursor: Option<&str>,
	limit: Option<u32>,
) -> Result<Page<Webhook>, Error> {
	rest::get_page(client, cursor, limit, &Query::new()).await
}

pub async fn delete(client: &Client, id: &str) -> Result<Webhook, Error> {
	rest::delete_id(client, id).await
}
