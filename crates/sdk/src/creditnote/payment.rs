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

//! CreditNote payment resolution
//!
//! The schema of `payment` is chosen by the sibling `paymentType` field:
//!
//! 1. JSON object with a known `payment_type` is decoded into that schema
//! 2. JSON object with an unknown or missing `payment_type` is kept as is
//! 3. Any payment with an explicit `payment_type` is otherwise kept as is
//! 4. A typed payment without `payment_type` gets it inferred
//! 5. Anything else is rejected

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::transfer::Transfer;
use crate::api::{self, json_type_name};
use crate::error::Error;

pub const TRANSFER: &str = "transfer";

/// Payment sent to the credit receiver
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payment {
	Transfer(Transfer),
	/// Undecoded payment, kept verbatim
	Json(Value),
}

impl Payment {
	/// Discriminator of the typed variants
	pub fn inferred_type(&self) -> Option<&'static str> {
		match self {
			Payment::Transfer(_) => Some(TRANSFER),
			Payment::Json(_) => None,
		}
	}

	pub fn as_transfer(&self) -> Option<&Transfer> {
		match self {
			Payment::Transfer(transfer) => Some(transfer),
			Payment::Json(_) => None,
		}
	}
}

impl From<Transfer> for Payment {
	fn from(transfer: Transfer) -> Self {
		Payment::Transfer(transfer)
	}
}

impl From<Value> for Payment {
	fn from(value: Value) -> Self {
		Payment::Json(value)
	}
}

// Decoding is deferred to `resolve`, which knows the discriminator.
impl<'de> Deserialize<'de> for Payment {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Value::deserialize(deserializer).map(Payment::Json)
	}
}

/// Pick the concrete schema of `payment` and return it with its discriminator
pub fn resolve(
	payment: Payment,
	payment_type: Option<String>,
) -> Result<(Payment, Option<String>), Error> {
	match (payment, payment_type) {
		(Payment::Json(value @ Value::Object(_)), Some(kind)) if kind == TRANSFER => {
			let transfer: Transfer = api::from_api_json(value).map_err(|e| {
				Error::InvalidArgument(format!("could not decode creditnote::Transfer: {e}"))
			})?;
			Ok((Payment::Transfer(transfer), Some(kind)))
		}
		(payment @ Payment::Json(Value::Object(_)), kind) => Ok((payment, kind)),
		(payment, Some(kind)) => Ok((payment, Some(kind))),
		(payment @ Payment::Transfer(_), None) => {
			let kind = payment.inferred_type().map(str::to_string);
			Ok((payment, kind))
		}
		(Payment::Json(other), None) => Err(Error::InvalidArgument(format!(
			"payment must be either a JSON object or a creditnote::Transfer, but not a {}",
			json_type_name(&other)
		))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn transfer_json() -> Value {
		json!({
			"name": "Jamie Lannister",
			"taxId": "20.018.183/0001-80",
			"bankCode": "00000000",
			"branchCode": "1234",
			"accountNumber": "129340-1",
		})
	}

	#[test]
	fn test_json_with_known_type_is_decoded() {
		let (payment, kind) = resolve(transfer_json().into(), Some("transfer".to_string())).unwrap();

		assert_eq!(kind.as_deref(), Some("transfer"));
		assert_eq!(payment.as_transfer().unwrap().branch_code, "1234");
	}

	#[test]
	fn test_malformed_transfer_is_invalid_argument() {
		let error = resolve(json!({"name": 1}).into(), Some("transfer".to_string())).unwrap_err();

		assert!(matches!(error, Error::InvalidArgument(_)));
		assert!(error.to_string().contains("creditnote::Transfer"));
	}

	#[test]
	fn test_json_with_unknown_type_passes_through() {
		let (payment, kind) = resolve(transfer_json().into(), Some("boleto".to_string())).unwrap();

		assert_eq!(payment, Payment::Json(transfer_json()));
		assert_eq!(kind.as_deref(), Some("boleto"));
	}

	#[test]
	fn test_json_without_type_passes_through() {
		let (payment, kind) = resolve(transfer_json().into(), None).unwrap();

		assert_eq!(payment, Payment::Json(transfer_json()));
		assert_eq!(kind, None);
	}

	#[test]
	fn test_explicit_type_with_non_object_passes_through() {
		let (payment, kind) = resolve(json!("opaque").into(), Some("custom".to_string())).unwrap();

		assert_eq!(payment, Payment::Json(json!("opaque")));
		assert_eq!(kind.as_deref(), Some("custom"));
	}

	#[test]
	fn test_typed_payment_infers_type() {
		let transfer = Transfer::new("Jon Snow", "012.345.678-90", "00000000", "1234", "1-0");
		let (payment, kind) = resolve(transfer.clone().into(), None).unwrap();

		assert_eq!(payment, Payment::Transfer(transfer));
		assert_eq!(kind.as_deref(), Some("transfer"));
	}

	#[test]
	fn test_untyped_non_object_is_rejected() {
		let error = resolve(json!(42).into(), None).unwrap_err();

		assert!(matches!(error, Error::InvalidArgument(_)));
		assert!(error.to_string().contains("but not a number"));
	}
}
