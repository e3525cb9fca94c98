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

//! Stark Infra SDK - Client library for the Stark Infra REST API
//!
//! This crate provides typed resources (CreditNotes, PixClaims,
//! IndividualIdentities, IssuingRestocks, their logs and Webhooks), the
//! shared REST helpers they delegate to, and request signing.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads
//! - No global user; every call borrows a [`Client`]
//! - No environment or configuration loading
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use starkinfra::{Client, User, creditnote};
//!
//! # async fn run(private_key: &str) -> Result<(), starkinfra::Error> {
//! let client = Client::new(&User::project("5656565656565656", private_key))?;
//! let notes: Vec<_> = creditnote::query(&client, &creditnote::Filter {
//!     limit: Some(10),
//!     ..Default::default()
//! })?
//! .try_collect()
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod checks;
pub mod client;
pub mod creditnote;
pub mod error;
pub mod individualidentity;
pub mod issuingrestock;
pub mod pixclaim;
pub mod rest;
pub mod signing;
pub mod webhook;

pub use api::{Entity, Resource};
pub use checks::DateInput;
pub use client::{Client, ClientConfig, Environment, User};
pub use creditnote::CreditNote;
pub use error::{Error, ErrorElement};
pub use individualidentity::IndividualIdentity;
pub use issuingrestock::IssuingRestock;
pub use pixclaim::PixClaim;
pub use signing::{AccessHeaders, Authenticator, EcdsaAuthenticator};
pub use webhook::Webhook;
