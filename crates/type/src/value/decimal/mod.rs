// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod parse;

pub use parse::parse_decimal;

/// A fixed point decimal made of an integer part and a fractional part
/// counted in billionths.
///
/// Both parts carry the sign of the value, e.g. `-1.5` is stored as
/// `integer = -1, fraction = -500_000_000`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
	integer: i64,
	fraction: i32,
}

impl Decimal {
	pub const SCALE: i64 = 1_000_000_000;
	pub const FRACTION_DIGITS: usize = 9;

	pub const fn new(integer: i64, fraction: i32) -> Self {
		Self {
			integer,
			fraction,
		}
	}

	pub const fn integer(&self) -> i64 {
		self.integer
	}

	pub const fn fraction(&self) -> i32 {
		self.fraction
	}

	/// The value as a single integer scaled by 10^9.
	#[inline]
	pub const fn to_i128(&self) -> i128 {
		self.integer as i128 * Self::SCALE as i128 + self.fraction as i128
	}

	pub fn from_i128(scaled: i128) -> Option<Self> {
		let integer = i64::try_from(scaled / Self::SCALE as i128).ok()?;
		let fraction = (scaled % Self::SCALE as i128) as i32;
		Some(Self::new(integer, fraction))
	}
}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.to_i128().cmp(&other.to_i128())
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let scaled = self.to_i128();
		let sign = if scaled < 0 {
			"-"
		} else {
			""
		};
		let magnitude = scaled.unsigned_abs();
		let integer = magnitude / Self::SCALE as u128;
		let fraction = magnitude % Self::SCALE as u128;
		if fraction == 0 {
			return write!(f, "{sign}{integer}");
		}
		let digits = format!("{:09}", fraction);
		write!(f, "{sign}{integer}.{}", digits.trim_end_matches('0'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_i128() {
		assert_eq!(Decimal::new(1, 500_000_000).to_i128(), 1_500_000_000);
		assert_eq!(Decimal::new(-1, -500_000_000).to_i128(), -1_500_000_000);
		assert_eq!(Decimal::new(0, 0).to_i128(), 0);
	}

	#[test]
	fn test_from_i128() {
		assert_eq!(Decimal::from_i128(-1_500_000_000), Some(Decimal::new(-1, -500_000_000)));
		assert_eq!(Decimal::from_i128(i128::MAX), None);
	}

	#[test]
	fn test_ordering() {
		let mut values = vec![
			Decimal::new(2, 0),
			Decimal::new(-1, -500_000_000),
			Decimal::new(0, 1),
			Decimal::new(-1, 0),
			Decimal::new(0, 0),
		];
		values.sort();
		assert_eq!(
			values,
			vec![
				Decimal::new(-1, -500_000_000),
				Decimal::new(-1, 0),
				Decimal::new(0, 0),
				Decimal::new(0, 1),
				Decimal::new(2, 0),
			]
		);
	}

	#[test]
	fn test_display() {
		assert_eq!(Decimal::new(12, 500_000_000).to_string(), "12.5");
		assert_eq!(Decimal::new(0, -250_000_000).to_string(), "-0.25");
		assert_eq!(Decimal::new(7, 0).to_string(), "7");
		assert_eq!(Decimal::new(0, 1).to_string(), "0.000000001");
	}
}
