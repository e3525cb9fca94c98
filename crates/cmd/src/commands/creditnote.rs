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

//! `starkinfra credit-note` - Inspect and cancel CreditNotes

use anyhow::Result;
use clap::{Args, Subcommand};
use starkinfra::{Client, DateInput, creditnote};
use tracing::info;

use super::{print_json, print_stream};

#[derive(Args, Debug)]
pub struct CreditNoteArgs {
	#[command(subcommand)]
	pub command: CreditNoteCommand,
}

#[derive(Subcommand, Debug)]
pub enum CreditNoteCommand {
	/// Stream CreditNotes as JSON lines.
	List(ListArgs),
	/// Show a single CreditNote.
	Get { id: String },
	/// Cancel a CreditNote.
	Cancel { id: String },
	/// Stream CreditNote logs as JSON lines.
	Logs(LogArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
	/// Maximum number of notes; all of them when omitted.
	#[arg(short, long)]
	pub limit: Option<u32>,
	/// Only notes created on or after this date (YYYY-MM-DD).
	#[arg(long)]
	pub after: Option<String>,
	/// Only notes created on or before this date (YYYY-MM-DD).
	#[arg(long)]
	pub before: Option<String>,
	#[arg(long, value_delimiter = ',')]
	pub status: Vec<String>,
	#[arg(long, value_delimiter = ',')]
	pub tags: Vec<String>,
	#[arg(long, value_delimiter = ',')]
	pub ids: Vec<String>,
}

impl ListArgs {
	fn to_filter(&self) -> creditnote::Filter {
		creditnote::Filter {
			limit: self.limit,
			after: self.after.as_deref().map(DateInput::from),
			before: self.before.as_deref().map(DateInput::from),
			status: self.status.clone(),
			tags: self.tags.clone(),
			ids: self.ids.clone(),
		}
	}
}

#[derive(Args, Debug)]
pub struct LogArgs {
	#[arg(short, long)]
	pub limit: Option<u32>,
	/// Only logs of these notes.
	#[arg(long = "note-id", value_delimiter = ',')]
	pub note_ids: Vec<String>,
	/// Only logs of these types, e.g. `signed,canceled`.
	#[arg(long, value_delimiter = ',')]
	pub types: Vec<String>,
}

impl LogArgs {
	fn to_filter(&self) -> creditnote::log::Filter {
		creditnote::log::Filter {
			limit: self.limit,
			types: self.types.clone(),
			note_ids: self.note_ids.clone(),
			..Default::default()
		}
	}
}

pub async fn run(client: &Client, args: &CreditNoteArgs) -> Result<()> {
	match &args.command {
		CreditNoteCommand::List(list) => {
			let count = print_stream(creditnote::query(client, &list.to_filter())?).await?;
			info!(target: "cli", "Listed {} credit notes", count);
		}
		CreditNoteCommand::Get { id } => print_json(&creditnote::get(client, id).await?)?,
		CreditNoteCommand::Cancel { id } => {
			let note = creditnote::cancel(client, id).await?;
			info!(target: "cli", "Canceled credit note {}", id);
			print_json(&note)?;
		}
		CreditNoteCommand::Logs(logs) => {
			let count = print_stream(creditnote::log::query(client, &logs.to_filter())?).await?;
			info!(target: "cli", "Listed {} credit note logs", count);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	#[derive(Parser, Debug)]
	struct TestCli {
		#[command(subcommand)]
		command: CreditNoteCommand,
	}

	#[test]
	fn test_list_args_build_filter() {
		let cli = TestCli::parse_from([
			"test",
			"list",
			"--limit",
			"5",
			"--after",
			"2020-03-01",
			"--status",
			"created,signed",
		]);
		let CreditNoteCommand::List(list) = cli.command else {
			panic!("expected list");
		};
		let filter = list.to_filter();

		assert_eq!(filter.limit, Some(5));
		assert_eq!(filter.status, vec!["created", "signed"]);
		assert!(filter.after.is_some());
		assert!(filter.before.is_none());
	}

	#[test]
	fn test_log_args_build_filter() {
		let cli = TestCli::parse_from(["test", "logs", "--note-id", "1,2"]);
		let CreditNoteCommand::Logs(logs) = cli.command else {
			panic!("expected logs");
		};
		assert_eq!(logs.to_filter().note_ids, vec!["1", "2"]);
	}
}
