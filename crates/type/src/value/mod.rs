// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod date;
mod datetime;
pub mod decimal;
mod r#type;

pub use date::Date;
pub use datetime::DateTime;
pub use decimal::Decimal;
pub use r#type::Type;

/// A cell value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A fixed point decimal
	Decimal(Decimal),
	/// A calendar date
	Date(Date),
	/// A calendar date and time of day
	DateTime(DateTime),
	/// A fixed length string
	Char(String),
	/// A variable length string
	Varchar(String),
	/// The serialized payload of a composite value
	Blob(Vec<u8>),
}

impl Value {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// The logical type of the value. `Blob` payloads report `Object`, the
	/// most general composite kind.
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Decimal(_) => Type::Decimal,
			Value::Date(_) => Type::Date,
			Value::DateTime(_) => Type::DateTime,
			Value::Char(_) => Type::Char,
			Value::Varchar(_) => Type::Varchar,
			Value::Blob(_) => Type::Object,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::Date(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
			Value::Char(value) | Value::Varchar(value) => write!(f, "'{value}'"),
			Value::Blob(bytes) => {
				f.write_str("0x")?;
				for byte in bytes {
					write!(f, "{byte:02x}")?;
				}
				Ok(())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_type() {
		assert_eq!(Value::Undefined.get_type(), Type::Undefined);
		assert_eq!(Value::Int16(-1).get_type(), Type::Int16);
		assert_eq!(Value::Decimal(Decimal::new(1, 0)).get_type(), Type::Decimal);
		assert_eq!(Value::Varchar("abc".to_string()).get_type(), Type::Varchar);
		assert_eq!(Value::Blob(vec![1, 2]).get_type(), Type::Object);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Undefined.to_string(), "undefined");
		assert_eq!(Value::Float8(-0.5).to_string(), "-0.5");
		assert_eq!(Value::Varchar("abc".to_string()).to_string(), "'abc'");
		assert_eq!(Value::Blob(vec![0x0a, 0xff]).to_string(), "0x0aff");
	}
}
