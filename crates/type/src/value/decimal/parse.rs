// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use crate::{error::TypeError, value::decimal::Decimal};

pub fn parse_decimal(text: &str) -> Result<Decimal, TypeError> {
	let invalid = || TypeError::InvalidDecimal {
		text: text.to_string(),
	};

	let value = if text.as_bytes().contains(&b'_') {
		Cow::Owned(text.trim().replace('_', ""))
	} else {
		Cow::Borrowed(text.trim())
	};

	let (negative, unsigned) = match value.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, value.strip_prefix('+').unwrap_or(&*value)),
	};

	let (integer_digits, fraction_digits) = match unsigned.split_once('.') {
		Some((integer, fraction)) => (integer, fraction),
		None => (unsigned, ""),
	};

	if integer_digits.is_empty() && fraction_digits.is_empty() {
		return Err(invalid());
	}
	if fraction_digits.len() > Decimal::FRACTION_DIGITS {
		return Err(invalid());
	}
	if !integer_digits.bytes().chain(fraction_digits.bytes()).all(|b| b.is_ascii_digit()) {
		return Err(invalid());
	}

	// sign applied before parsing so i64::MIN stays representable
	let integer = match (integer_digits.is_empty(), negative) {
		(true, _) => 0,
		(false, false) => i64::from_str(integer_digits).map_err(|_| invalid())?,
		(false, true) => i64::from_str(&format!("-{integer_digits}")).map_err(|_| invalid())?,
	};
	let mut fraction = 0i32;
	for (i, digit) in fraction_digits.bytes().enumerate() {
		fraction += (digit - b'0') as i32 * 10i32.pow((Decimal::FRACTION_DIGITS - 1 - i) as u32);
	}

	Ok(if negative {
		Decimal::new(integer, -fraction)
	} else {
		Decimal::new(integer, fraction)
	})
}

impl FromStr for Decimal {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_decimal(s)
	}
}
