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

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::error::Error;

/// Date accepted by filters and scheduling fields
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
	Date(NaiveDate),
	DateTime(DateTime<FixedOffset>),
	Text(String),
}

impl From<NaiveDate> for DateInput {
	fn from(date: NaiveDate) -> Self {
		DateInput::Date(date)
	}
}

impl From<DateTime<FixedOffset>> for DateInput {
	fn from(datetime: DateTime<FixedOffset>) -> Self {
		DateInput::DateTime(datetime)
	}
}

impl From<DateTime<Utc>> for DateInput {
	fn from(datetime: DateTime<Utc>) -> Self {
		DateInput::DateTime(datetime.fixed_offset())
	}
}

impl From<&str> for DateInput {
	fn from(text: &str) -> Self {
		DateInput::Text(text.to_string())
	}
}

impl From<String> for DateInput {
	fn from(text: String) -> Self {
		DateInput::Text(text)
	}
}

impl DateInput {
	/// Wire form: `YYYY-MM-DD` for dates, RFC 3339 for datetimes
	pub fn to_api_string(&self) -> Result<String, Error> {
		match self {
			DateInput::Date(date) => Ok(date.format("%Y-%m-%d").to_string()),
			DateInput::DateTime(datetime) => {
				Ok(datetime.to_rfc3339_opts(SecondsFormat::Micros, false))
			}
			DateInput::Text(text) => {
				if let Ok(date) = parse_date(text) {
					return Ok(date.format("%Y-%m-%d").to_string());
				}
				check_datetime(text).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Micros, false))
			}
		}
	}
}

fn parse_date(text: &str) -> Result<NaiveDate, Error> {
	NaiveDate::parse_from_str(text, "%Y-%m-%d")
		.map_err(|e| Error::InvalidArgument(format!("invalid date {text:?}: {e}")))
}

/// Reduce a date filter to its calendar date
pub fn check_date(input: &DateInput) -> Result<NaiveDate, Error> {
	match input {
		DateInput::Date(date) => Ok(*date),
		DateInput::DateTime(datetime) => Ok(datetime.date_naive()),
		DateInput::Text(text) => parse_date(text).or_else(|_| {
			check_datetime(text)
				.map(|dt| dt.date_naive())
				.map_err(|_| Error::InvalidArgument(format!("invalid date {text:?}")))
		}),
	}
}

/// Parse an API datetime string (RFC 3339, or naive and assumed UTC)
pub fn check_datetime(text: &str) -> Result<DateTime<FixedOffset>, Error> {
	if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
		return Ok(datetime);
	}
	chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
		.or_else(|_| chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
		.map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
		.map_err(|e| Error::InvalidArgument(format!("invalid datetime {text:?}: {e}")))
}
