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

mod commands;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use starkinfra::Client;
use tracing::info;

use config::CliConfig;
use logging::init_logging;

/// Command line access to the Stark Infra API.
#[derive(Parser, Debug)]
#[command(name = "starkinfra", version, about, long_about = None)]
struct Cli {
	/// Configuration file; `STARKINFRA_*` environment variables otherwise.
	#[arg(short, long, global = true)]
	config: Option<String>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Inspect and cancel CreditNotes.
	CreditNote(commands::creditnote::CreditNoteArgs),
	/// Manage webhook subscriptions.
	Webhook(commands::webhook::WebhookArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	init_logging()?;

	let config = match &cli.config {
		Some(path) => CliConfig::from_file(path)
			.with_context(|| format!("Failed to load configuration: {}", path))?,
		None => CliConfig::from_env()?,
	};
	let client = Client::with_config(&config.user()?, config.client_config()?)?;
	info!(target: "cli", "Using {} ({})", client.base_url(), config.environment);

	match &cli.command {
		Commands::CreditNote(args) => commands::creditnote::run(&client, args).await,
		Commands::Webhook(args) => commands::webhook::run(&client, args).await,
	}
}
