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

//! Cursor pagination and lazy streaming

mod common;

use common::*;
use futures::{StreamExt, TryStreamExt};
use starkinfra::{
	Error,
	creditnote::{self, CreditNote, Filter},
	webhook,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notes(range: std::ops::Range<u32>) -> Vec<serde_json::Value> {
	range.map(|i| credit_note_json(&i.to_string())).collect()
}

#[tokio::test]
async fn test_page_returns_cursor() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/v2/credit-note"))
		.and(query_param_is_missing("cursor"))
		.and(query_param("limit", "2"))
		.and(query_param("status", "created,signed"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(page_json("notes", notes(0..2), Some("next"))),
		)
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/v2/credit-note"))
		.and(query_param("cursor", "next"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(page_json("notes", notes(2..3), None)),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = test_client(&server);
	let filter = Filter {
		limit: Some(2),
		status: vec!["created".to_string(), "signed".to_string()],
		..Filter::default()
	};

	let (first, cursor) = creditnote::page(&client, None, &filter).await.unwrap();
	assert_eq!(first.len(), 2);
	assert_eq!(cursor.as_deref(), Some("next"));

	let (second, cursor) = creditnote::page(&client, cursor.as_deref(), &filter)
		.await
		.unwrap();
	assert_eq!(second.len(), 1);
	assert_eq!(second[0].id.as_deref(), Some("2"));
	assert!(cursor.is_none());
}

#[tokio::test]
async fn test_page_rejects_limit_out_of_range() {
	let server = MockServer::start().await;
	let client = test_client(&server);

	for limit in [0, 101] {
		let filter = Filter {
			limit: Some(limit),
			..Filter::default()
		};
		assert!(matches!(
			creditnote::page(&client, None, &filter).await,
			Err(Error::InvalidArgument(_))
		));
	}
}

#[tokio::test]
async fn test_stream_follows_cursor_until_exhausted() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/v2/credit-note"))
		.and(query_param_is_missing("cursor"))
		.and(query_param("limit", "100"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(page_json("notes", notes(0..3), Some("page-2"))),
		)
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/v2/credit-note"))
		.and(query_param("cursor", "page-2"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(page_json("notes", notes(3..5), Some(""))),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = test_client(&server);
	let all: Vec<CreditNote> = creditnote::query(&client, &Filter::default())
		.unwrap()
		.try_collect()
		.await
		.unwrap();

	let ids: Vec<_> = all.iter().filter_map(|n| n.id.as_deref()).collect();
	assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_stream_limit_spans_pages() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/v2/credit-note"))
		.and(query_param_is_missing("cursor"))
		.and(query_param("limit", "100"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(page_json("notes", notes(0..100), Some("page-2"))),
		)
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/v2/credit-note"))
		.and(query_param("cursor", "page-2"))
		.and(query_param("limit", "50"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(page_json("notes", notes(100..150), Some("page-3"))),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = test_client(&server);
	let filter = Filter {
		limit: Some(150),
		..Filter::default()
	};
	let all: Vec<CreditNote> = creditnote::query(&client, &filter)
		.unwrap()
		.try_collect()
		.await
		.unwrap();

	assert_eq!(all.len(), 150);
	assert_eq!(all[149].id.as_deref(), Some("149"));
}

#[tokio::test]
async fn test_stream_is_lazy() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/v2/credit-note"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(page_json("notes", notes(0..3), Some("more"))),
		)
		.expect(1)
		.mount(&server)
		.await;

	let client = test_client(&server);
	let mut stream = creditnote::query(&client, &Filter::default()).unwrap();

	// Only the first page is requested while its items are buffered
	for expected in ["0", "1", "2"] {
		let note = stream.next().await.unwrap().unwrap();
		assert_eq!(note.id.as_deref(), Some(expected));
	}
}

#[tokio::test]
async fn test_stream_with_zero_limit_is_empty() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(500))
		.expect(0)
		.mount(&server)
		.await;

	let client = test_client(&server);
	let count = webhook::query(&client, Some(0)).count().await;
	assert_eq!(count, 0);
}

#[tokio::test]
async fn test_stream_surfaces_errors() {
	let server = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/v2/webhook"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;

	let client = test_client(&server);
	let first = webhook::query(&client, None).next().await;
	assert!(matches!(first, Some(Err(Error::InternalServerError))));
}

#[tokio::test]
async fn test_query_rejects_invalid_date_before_requesting() {
	let server = MockServer::start().await;
	let client = test_client(&server);

	let filter = Filter {
		after: Some("not a date".into()),
		..Filter::default()
	};
	assert!(creditnote::query(&client, &filter).is_err());
}
