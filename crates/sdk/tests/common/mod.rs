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

//! Shared fixtures for the mock-server tests

#![allow(dead_code)]

use k256::{SecretKey, pkcs8::LineEnding};
use serde_json::{Value, json};
use starkinfra::{Client, ClientConfig, User};
use wiremock::MockServer;

pub const PROJECT_ID: &str = "5656565656565656";

/// Freshly generated secp256k1 key in SEC1 PEM form
pub fn private_key_pem() -> String {
	let secret = SecretKey::random(&mut rand::rngs::OsRng);
	secret
		.to_sec1_pem(LineEnding::LF)
		.expect("Failed to encode test key")
		.as_str()
		.to_string()
}

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> Client {
	let user = User::project(PROJECT_ID, private_key_pem());
	let config = ClientConfig {
		host: Some(server.uri()),
		..ClientConfig::default()
	};
	Client::with_config(&user, config).expect("Failed to create test client")
}

pub fn transfer_json() -> Value {
	json!({
		"name": "Jamie Lannister",
		"taxId": "012.345.678-90",
		"bankCode": "00000000",
		"branchCode": "1234",
		"accountNumber": "129340-1",
		"accountType": "checking",
	})
}

pub fn credit_note_json(id: &str) -> Value {
	json!({
		"id": id,
		"templateId": "0123456789101112",
		"name": "Jamie Lannister",
		"taxId": "012.345.678-90",
		"nominalAmount": 100000,
		"amount": 98000,
		"scheduled": "2020-03-11T00:00:00+00:00",
		"invoices": [{
			"id": "4545454545454545",
			"amount": 50000,
			"due": "2020-04-11T00:00:00+00:00",
			"status": "created",
		}],
		"signers": [{
			"id": "3434343434343434",
			"name": "Jamie Lannister",
			"contact": "jamie.lannister@gmail.com",
			"method": "link",
		}],
		"payment": transfer_json(),
		"paymentType": "transfer",
		"externalId": format!("external-{id}"),
		"status": "created",
		"tags": ["lannister"],
		"transactionIds": [],
		"created": "2020-03-10T10:30:00.000000+00:00",
		"updated": "2020-03-10T10:30:00.000000+00:00",
	})
}

pub fn credit_note_log_json(id: &str, note_id: &str) -> Value {
	json!({
		"id": id,
		"note": credit_note_json(note_id),
		"errors": [],
		"type": "created",
		"created": "2020-03-10T10:30:00.000000+00:00",
	})
}

pub fn pix_claim_json(id: &str) -> Value {
	json!({
		"id": id,
		"accountCreated": "2022-01-01T00:00:00+00:00",
		"accountNumber": "76543",
		"accountType": "salary",
		"branchCode": "1234",
		"name": "Random Name",
		"taxId": "012.345.678-90",
		"keyId": "+5511989898989",
		"status": "delivered",
		"type": "ownership",
		"keyType": "phone",
		"flow": "out",
		"created": "2022-01-02T00:00:00+00:00",
		"updated": "2022-01-02T00:00:00+00:00",
	})
}

pub fn identity_json(id: &str) -> Value {
	json!({
		"id": id,
		"name": "Jamie Lannister",
		"taxId": "594.739.480-42",
		"status": "created",
		"tags": [],
		"created": "2022-01-02T00:00:00+00:00",
	})
}

pub fn restock_json(id: &str) -> Value {
	json!({
		"id": id,
		"count": 100,
		"stockId": "5136459887542272",
		"status": "created",
		"created": "2022-01-02T00:00:00+00:00",
		"updated": "2022-01-02T00:00:00+00:00",
	})
}

/// List envelope with an optional continuation cursor
pub fn page_json(key: &str, items: Vec<Value>, cursor: Option<&str>) -> Value {
	let mut page = json!({ key: items });
	if let Some(cursor) = cursor {
		page["cursor"] = json!(cursor);
	}
	page
}
