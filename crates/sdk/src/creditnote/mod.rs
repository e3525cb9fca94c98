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

//! CreditNotes
//!
//! CreditNotes generate CCB contracts between you and your customers. A
//! locally built [`CreditNote`] is not sent anywhere until [`create`] posts
//! it; the API answers with the created entities, including their ids and
//! return-only fields.

pub mod invoice;
pub mod log;
pub mod payment;
pub mod signer;
pub mod transfer;

use chrono::{DateTime, FixedOffset};
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::api::{Entity, Resource, resolve_all};
use crate::checks::DateInput;
use crate::client::Client;
use crate::error::Error;
use crate::rest::{self, Page, Query};

pub use invoice::{Description, Discount, Invoice};
pub use log::Log;
pub use payment::Payment;
pub use signer::Signer;
pub use transfer::Transfer;

/// CreditNote entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditNote {
	/// Contract template the note is based on
	pub template_id: String,
	/// Credit receiver's full name
	pub name: String,
	/// Credit receiver's CPF or CNPJ
	pub tax_id: String,
	/// Amount in cents transferred to the receiver, before deductions
	pub nominal_amount: i64,
	/// Transfer execution date or datetime
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scheduled: Option<String>,
	#[serde(default)]
	pub invoices: Vec<Invoice>,
	pub payment: Payment,
	#[serde(default)]
	pub signers: Vec<Signer>,
	/// Unique among all your CreditNotes, prevents duplicates
	pub external_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payment_type: Option<String>,
	/// Credit analysis fee deducted from the lent amount
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rebate_amount: Option<i64>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expiration: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub document_id: Option<String>,
	/// `canceled`, `created`, `expired`, `failed`, `processing`, `signed` or `success`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub transaction_ids: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub workspace_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tax_amount: Option<i64>,
	/// Yearly effective interest rate, in percentage
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub interest: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<DateTime<FixedOffset>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated: Option<DateTime<FixedOffset>>,
}

impl Resource for CreditNote {
	const NAME: &'static str = "CreditNote";

	fn normalize(mut self) -> Result<Self, Error> {
		let (payment, payment_type) = payment::resolve(self.payment, self.payment_type)?;
		self.payment = payment;
		self.payment_type = payment_type;
		Ok(self)
	}
}

/// Input of [`CreditNote::new`]
///
/// Sub-resources may be given typed or as raw JSON mappings.
#[derive(Debug, Clone)]
pub struct NewCreditNote {
	pub template_id: String,
	pub name: String,
	pub tax_id: String,
	pub nominal_amount: i64,
	pub scheduled: Option<DateInput>,
	pub invoices: Vec<Entity<Invoice>>,
	pub payment: Payment,
	pub signers: Vec<Entity<Signer>>,
	pub external_id: String,
	pub payment_type: Option<String>,
	pub rebate_amount: Option<i64>,
	pub tags: Vec<String>,
}

impl CreditNote {
	/// Build a CreditNote ready for [`create`]
	pub fn new(input: NewCreditNote) -> Result<Self, Error> {
		let scheduled = input
			.scheduled
			.as_ref()
			.map(DateInput::to_api_string)
			.transpose()?;
		let (payment, payment_type) = payment::resolve(input.payment, input.payment_type)?;

		Ok(Self {
			template_id: input.template_id,
			name: input.name,
			tax_id: input.tax_id,
			nominal_amount: input.nominal_amount,
			scheduled,
			invoices: resolve_all(input.invoices)?,
			payment,
			signers: resolve_all(input.signers)?,
			external_id: input.external_id,
			payment_type,
			rebate_amount: input.rebate_amount,
			tags: input.tags,
			id: None,
			amount: None,
			expiration: None,
			document_id: None,
			status: None,
			transaction_ids: Vec::new(),
			workspace_id: None,
			tax_amount: None,
			interest: None,
			created: None,
			updated: None,
		})
	}
}

/// Filters of [`query`] and [`page`]
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

/// Create CreditNotes, returning them with their API-assigned fields
pub async fn create(client: &Client, notes: &[CreditNote]) -> Result<Vec<CreditNote>, Error> {
	rest::post_multi(client, notes).await
}

/// Retrieve a single CreditNote by id
pub async fn get(client: &Client, id: &str) -> Result<CreditNote, Error> {
	rest::get_id(client, id).await
}

/// Stream CreditNotes; `filter.limit` of `None` streams them all
pub fn query(
	client: &Client,
	filter: &Filter,
) -> Result<BoxStream<'static, Result<CreditNote, Error>>, Error> {
	Ok(rest::get_stream(client, filter.limit, filter.to_query()?))
}

/// Retrieve up to 100 CreditNotes and the cursor to the next page
pub async fn page(
	client: &Client,
	cursor: Option<&str>,
	filter: &Filter,
) -> Result<Page<CreditNote>, Error> {
	rest::get_page(client, cursor, filter.limit, &filter.to_query()?).await
}

/// Cancel a CreditNote, returning its final state
pub async fn cancel(client: &Client, id: &str) -> Result<CreditNote, Error> {
	rest::delete_id(client, id).await
}
