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

use serde::{Deserialize, Serialize};

/// Person asked to sign the CreditNote contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
	pub name: String,
	/// Address the signature request is delivered to, e.g. an e-mail
	pub contact: String,
	/// Delivery method, e.g. `"link"`
	pub method: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
}

impl Signer {
	pub fn new(
		name: impl Into<String>,
		contact: impl Into<String>,
		method: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			contact: contact.into(),
			method: method.into(),
			id: None,
		}
	}
}
