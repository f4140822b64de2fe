// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::{
	error::TypeError,
	value::date::{Date, parse_ymd},
};

/// A calendar date with second precision time of day.
///
/// Internally packed as the decimal number `YYYYMMDDhhmmss`, so the natural
/// order of the unsigned integer is the chronological order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(u64);

impl DateTime {
	pub fn new(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		if !Date::is_valid_ymd(year, month, day) || hour > 23 || minute > 59 || second > 59 {
			return None;
		}
		let date = year as u64 * 10_000 + month as u64 * 100 + day as u64;
		let time = hour as u64 * 10_000 + minute as u64 * 100 + second as u64;
		Some(Self(date * 1_000_000 + time))
	}

	/// Wraps an already packed value as read from storage.
	pub const fn from_packed(packed: u64) -> Self {
		Self(packed)
	}

	pub const fn to_packed(&self) -> u64 {
		self.0
	}

	pub fn date(&self) -> Date {
		let date = self.0 / 1_000_000;
		Date::new((date / 10_000) as u32, ((date / 100) % 100) as u32, (date % 100) as u32).unwrap_or_default()
	}

	pub fn hour(&self) -> u32 {
		((self.0 / 10_000) % 100) as u32
	}

	pub fn minute(&self) -> u32 {
		((self.0 / 100) % 100) as u32
	}

	pub fn second(&self) -> u32 {
		(self.0 % 100) as u32
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {:02}:{:02}:{:02}", self.date(), self.hour(), self.minute(), self.second())
	}
}

fn parse_hms(text: &str) -> Option<(u32, u32, u32)> {
	let mut parts = text.split(':');
	let hour = parts.next()?.parse::<u32>().ok()?;
	let minute = parts.next()?.parse::<u32>().ok()?;
	let second = parts.next()?.parse::<u32>().ok()?;
	if parts.next().is_some() {
		return None;
	}
	Some((hour, minute, second))
}

impl FromStr for DateTime {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || TypeError::InvalidDateTime {
			text: s.to_string(),
		};

		let trimmed = s.trim();
		let (date, time) = trimmed.split_once([' ', 'T']).unwrap_or((trimmed, "00:00:00"));
		let (year, month, day) = parse_ymd(date).ok_or_else(invalid)?;
		let (hour, minute, second) = parse_hms(time).ok_or_else(invalid)?;
		DateTime::new(year, month, day, hour, minute, second).ok_or_else(invalid)
	}
}

impl Serialize for DateTime {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
	type Value = DateTime;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a datetime in the format YYYY-MM-DD hh:mm:ss")
	}

	fn visit_str<E>(self, value: &str) -> Result<DateTime, E>
	where
		E: de::Error,
	{
		DateTime::from_str(value).map_err(|e| E::custom(e.to_string()))
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateTimeVisitor)
	}
}
