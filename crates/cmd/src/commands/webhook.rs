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

//! `starkinfra webhook` - Manage webhook subscriptions

use anyhow::Result;
use clap::{Args, Subcommand};
use starkinfra::{Client, Webhook, webhook};
use tracing::info;

use super::{print_json, print_stream};

#[derive(Args, Debug)]
pub struct WebhookArgs {
	#[command(subcommand)]
	pub command: WebhookCommand,
}

#[derive(Subcommand, Debug)]
pub enum WebhookCommand {
	/// Register a webhook.
	Create {
		/// Endpoint receiving the events.
		#[arg(long)]
		url: String,
		/// Subscribed services, e.g. `credit-note,pix-claim`.
		#[arg(long, value_delimiter = ',', required = true)]
		subscriptions: Vec<String>,
	},
	/// List registered webhooks.
	List {
		#[arg(short, long)]
		limit: Option<u32>,
	},
	/// Remove a webhook.
	Delete { id: String },
}

pub async fn run(client: &Client, args: &WebhookArgs) -> Result<()> {
	match &args.command {
		WebhookCommand::Create { url, subscriptions } => {
			let created = webhook::create(client, &Webhook::new(url, subscriptions)).await?;
			info!(target: "cli", "Created webhook {:?} for {}", created.id, url);
			print_json(&created)?;
		}
		WebhookCommand::List { limit } => {
			print_stream(webhook::query(client, *limit)).await?;
		}
		WebhookCommand::Delete { id } => {
			let deleted = webhook::delete(client, id).await?;
			info!(target: "cli", "Deleted webhook {}", id);
			print_json(&deleted)?;
		}
	}
	Ok(())
}
