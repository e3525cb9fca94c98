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

pub mod creditnote;
pub mod webhook;

use anyhow::Result;
use futures::{Stream, TryStreamExt};
use serde::Serialize;

/// Print one entity as pretty JSON on stdout
pub fn print_json<T: Serialize>(entity: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(entity)?);
	Ok(())
}

/// Print every streamed entity as it arrives, returning how many were printed
pub async fn print_stream<T, S>(mut stream: S) -> Result<usize>
where
	T: Serialize,
	S: Stream<Item = Result<T, starkinfra::Error>> + Unpin,
{
	let mut count = 0;
	while let Some(entity) = stream.try_next().await? {
		println!("{}", serde_json::to_string(&entity)?);
		count += 1;
	}
	Ok(count)
}
