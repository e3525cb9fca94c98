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

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Invoice issued to the credit receiver as part of a CreditNote
///
/// Only `amount` is required; the remaining input fields default to the
/// API's own defaults when left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
	/// Amount in cents, e.g. 23571 (= R$ 235.71)
	pub amount: i64,
	/// Due datetime (RFC 3339)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub due: Option<String>,
	/// Seconds between due date and expiration
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expiration: Option<i64>,
	/// Late payment fine, in percentage
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fine: Option<f64>,
	/// Monthly late payment interest, in percentage
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub interest: Option<f64>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub descriptions: Vec<Description>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub discounts: Vec<Discount>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tax_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pdf: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nominal_amount: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fine_amount: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub interest_amount: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub discount_amount: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub brcode: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<DateTime<FixedOffset>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated: Option<DateTime<FixedOffset>>,
}

impl Invoice {
	pub fn new(amount: i64) -> Self {
		Self {
			amount,
			..Self::default()
		}
	}
}

/// Free-form line shown on the invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
	pub key: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

/// Discount applied when the invoice is paid before `due`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
	pub percentage: f64,
	pub due: String,
}
