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

//! CreditNote operations against a mock API
//!
//! These tests verify:
//! - Request shape (endpoint, envelope, camelCase body, auth headers)
//! - Normalization of nested invoices, signers and payment
//! - Error mapping of 400 / 500 / other responses

mod common;

use common::*;
use serde_json::json;
use starkinfra::{
	Entity, Error,
	creditnote::{self, CreditNote, Invoice, NewCreditNote, Payment, Signer, Transfer},
};
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn example_note() -> CreditNote {
	CreditNote::new(NewCreditNote {
		template_id: "0123456789101112".to_string(),
		name: "Jamie Lannister".to_string(),
		tax_id: "012.345.678-90".to_string(),
		nominal_amount: 100000,
		scheduled: Some("2020-03-11".into()),
		invoices: vec![Invoice::new(50000).into(), Entity::Json(json!({"amount": 50000}))],
		payment: Transfer::new(
			"Jamie Lannister",
			"012.345.678-90",
			"00000000",
			"1234",
			"129340-1",
		)
		.into(),
		signers: vec![Signer::new("Jamie Lannister", "jamie.lannister@gmail.com", "link").into()],
		external_id: "my-internal-id-123456".to_string(),
		payment_type: None,
		rebate_amount: None,
		tags: vec!["lannister".to_string()],
	})
	.expect("Failed to build credit note")
}

#[tokio::test]
async fn test_create_posts_signed_envelope() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/v2/credit-note"))
		.and(header("Access-Id", "project/5656565656565656"))
		.and(header_exists("Access-Time"))
		.and(header_exists("Access-Signature"))
		.and(header("Content-Type", "application/json"))
		.and(body_partial_json(json!({
			"notes": [{
				"templateId": "0123456789101112",
				"paymentType": "transfer",
				"payment": {"bankCode": "00000000"},
				"scheduled": "2020-03-11",
			}]
		})))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({"notes": [credit_note_json("5656565656565656")]})),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = test_client(&server);
	let created = creditnote::create(&client, &[example_note()]).await.unwrap();

	assert_eq!(created.len(), 1);
	assert_eq!(created[0].id.as_deref(), Some("5656565656565656"));
	assert_eq!(created[0].invoices[0].id.as_deref(), Some("4545454545454545"));
	assert!(matches!(created[0].payment, Payment::Transfer(_)));
}

#[tokio::test]
async fn test_get_and_cancel() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/v2/credit-note/5656565656565656"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({"note": credit_note_json("5656565656565656")})),
		)
		.expect(1)
		.mount(&server)
		.await;

	let mut canceled = credit_note_json("5656565656565656");
	canceled["status"] = json!("canceled");
	Mock::given(method("DELETE"))
		.and(path("/v2/credit-note/5656565656565656"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"note": canceled})))
		.expect(1)
		.mount(&server)
		.await;

	let client = test_client(&server);

	let note = creditnote::get(&client, "5656565656565656").await.unwrap();
	assert_eq!(note.status.as_deref(), Some("created"));
	assert_eq!(
		note.payment.as_transfer().map(|t| t.account_number.as_str()),
		Some("129340-1")
	);

	let note = creditnote::cancel(&client, "5656565656565656").await.unwrap();
	assert_eq!(note.status.as_deref(), Some("canceled"));
}

#[tokio::test]
async fn test_input_errors() {
	let server = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/v2/credit-note"))
		.respond_with(ResponseTemplate::new(400).set_body_json(json!({
			"errors": [
				{"code": "invalidTaxId", "message": "Invalid tax ID"},
				{"code": "invalidTemplateId", "message": "Template not found"},
			]
		})))
		.mount(&server)
		.await;

	let client = test_client(&server);
	let error = creditnote::create(&client, &[example_note()])
		.await
		.unwrap_err();

	assert_eq!(error.codes(), vec!["invalidTaxId", "invalidTemplateId"]);
}

#[tokio::test]
async fn test_server_errors() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/v2/credit-note/1"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/v2/credit-note/2"))
		.respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
		.mount(&server)
		.await;

	let client = test_client(&server);

	assert!(matches!(
		creditnote::get(&client, "1").await,
		Err(Error::InternalServerError)
	));
	assert!(matches!(
		creditnote::get(&client, "2").await,
		Err(Error::UnknownError(body)) if body == "forbidden"
	));
}

#[tokio::test]
async fn test_malformed_id_is_rejected_locally() {
	let server = MockServer::start().await;
	let client = test_client(&server);

	assert!(matches!(
		creditnote::get(&client, "").await,
		Err(Error::InvalidArgument(_))
	));
	assert!(matches!(
		creditnote::cancel(&client, "../webhook/1").await,
		Err(Error::InvalidArgument(_))
	));
}
