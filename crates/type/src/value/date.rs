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

use crate::error::TypeError;

/// A calendar date (year, month, day) without time information.
///
/// Internally packed as `year * 512 + month * 32 + day`, an unsigned integer
/// whose natural order is the calendar order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(u64);

// Calendar utilities
impl Date {
	pub const MAX_YEAR: u32 = 9999;

	/// Check if a year is a leap year
	#[inline]
	pub(crate) fn is_leap_year(year: u32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	/// Get the number of days in a month
	#[inline]
	pub(crate) fn days_in_month(year: u32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	pub(crate) fn is_valid_ymd(year: u32, month: u32, day: u32) -> bool {
		year <= Self::MAX_YEAR && (1..=12).contains(&month) && day >= 1 && day <= Self::days_in_month(year, month)
	}
}

impl Date {
	pub fn new(year: u32, month: u32, day: u32) -> Option<Self> {
		if !Self::is_valid_ymd(year, month, day) {
			return None;
		}
		Some(Self(year as u64 * 512 + month as u64 * 32 + day as u64))
	}

	/// Wraps an already packed value as read from storage.
	pub const fn from_packed(packed: u64) -> Self {
		Self(packed)
	}

	pub const fn to_packed(&self) -> u64 {
		self.0
	}

	pub fn year(&self) -> u32 {
		(self.0 / 512) as u32
	}

	pub fn month(&self) -> u32 {
		((self.0 / 32) % 16) as u32
	}

	pub fn day(&self) -> u32 {
		(self.0 % 32) as u32
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
	}
}

pub(crate) fn parse_ymd(text: &str) -> Option<(u32, u32, u32)> {
	let mut parts = text.split('-');
	let year = parts.next()?.parse::<u32>().ok()?;
	let month = parts.next()?.parse::<u32>().ok()?;
	let day = parts.next()?.parse::<u32>().ok()?;
	if parts.next().is_some() {
		return None;
	}
	Some((year, month, day))
}

impl FromStr for Date {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_ymd(s.trim()).and_then(|(year, month, day)| Date::new(year, month, day)).ok_or_else(|| {
			TypeError::InvalidDate {
				text: s.to_string(),
			}
		})
	}
}

// Serde implementation for ISO 8601 format
impl Serialize for Date {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a date in ISO 8601 format (YYYY-MM-DD)")
	}

	fn visit_str<E>(self, value: &str) -> Result<Date, E>
	where
		E: de::Error,
	{
		Date::from_str(value).map_err(|e| E::custom(e.to_string()))
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateVisitor)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_date_display_standard_dates() {
		let date = Date::new(2024, 3, 15).unwrap();
		assert_eq!(format!("{}", date), "2024-03-15");

		let date = Date::new(2000, 1, 1).unwrap();
		assert_eq!(format!("{}", date), "2000-01-01");

		let date = Date::new(1999, 12, 31).unwrap();
		assert_eq!(format!("{}", date), "1999-12-31");
	}

	#[test]
	fn test_leap_years() {
		assert!(Date::new(2024, 2, 29).is_some());
		assert!(Date::new(2000, 2, 29).is_some());
		assert!(Date::new(1900, 2, 29).is_none());
		assert!(Date::new(2023, 2, 29).is_none());
	}

	#[test]
	fn test_invalid_components() {
		assert!(Date::new(2024, 0, 1).is_none());
		assert!(Date::new(2024, 13, 1).is_none());
		assert!(Date::new(2024, 4, 31).is_none());
		assert!(Date::new(10000, 1, 1).is_none());
	}

	#[test]
	fn test_packed_order_follows_calendar() {
		let dates = ["1969-12-31", "1970-01-01", "1970-01-02", "1970-02-01", "2024-02-29", "2024-03-01"];
		let packed: Vec<u64> = dates.iter().map(|d| d.parse::<Date>().unwrap().to_packed()).collect();
		assert!(packed.windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn test_parse_invalid() {
		assert!("2024-02".parse::<Date>().is_err());
		assert!("2024-02-30".parse::<Date>().is_err());
		assert!("2024-02-01-01".parse::<Date>().is_err());
		assert!("yesterday".parse::<Date>().is_err());
	}

	#[test]
	fn test_serde_roundtrip() {
		let date = Date::new(2024, 3, 15).unwrap();
		let json = serde_json::to_string(&date).unwrap();
		assert_eq!(json, "\"2024-03-15\"");
		assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), date);
	}
}
