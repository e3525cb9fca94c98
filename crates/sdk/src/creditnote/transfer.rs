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

/// Bank transfer that pays out a CreditNote to the credit receiver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
	pub name: String,
	pub tax_id: String,
	/// Receiver bank code (ISPB for Pix), e.g. `"20018183"`
	pub bank_code: String,
	pub branch_code: String,
	pub account_number: String,
	/// `"checking"`, `"savings"`, `"salary"` or `"payment"`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub account_type: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scheduled: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fee: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created: Option<DateTime<FixedOffset>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated: Option<DateTime<FixedOffset>>,
}

impl Transfer {
	pub fn new(
		name: impl Into<String>,
		tax_id: impl Into<String>,
		bank_code: impl Into<String>,
		branch_code: impl Into<String>,
		account_number: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			tax_id: tax_id.into(),
			bank_code: bank_code.into(),
			branch_code: branch_code.into(),
			account_number: account_number.into(),
			..Self::default()
		}
	}
}
