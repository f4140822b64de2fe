// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// All logical column types a row can carry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// Type is not defined
	Undefined,
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A fixed point decimal with nine fractional digits
	Decimal,
	/// A packed calendar date
	Date,
	/// A packed calendar date and time of day
	DateTime,
	/// A fixed length byte string
	Char,
	/// A variable length byte string
	Varchar,
	Object,
	Hll,
	Struct,
	Array,
	Map,
}

impl Type {
	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_string(&self) -> bool {
		matches!(self, Type::Char | Type::Varchar)
	}

	/// Composite kinds carry opaque payloads that have no scalar ordering.
	pub fn is_composite(&self) -> bool {
		matches!(self, Type::Object | Type::Hll | Type::Struct | Type::Array | Type::Map)
	}
}

impl Type {
	/// Byte size used to pick the width of the shared representation.
	///
	/// Strings report 0 since only a prefix of them ever takes part in a
	/// comparison, composites report 0 since they are not comparable at all.
	/// Temporal types and decimals report 16 to claim the widest representation.
	pub fn natural_byte_size(&self) -> usize {
		match self {
			Type::Object | Type::Hll | Type::Struct | Type::Array | Type::Map => 0,
			Type::Char | Type::Varchar => 0,
			Type::Undefined | Type::Boolean | Type::Int1 | Type::Uint1 => 1,
			Type::Int2 | Type::Uint2 => 2,
			Type::Float4 | Type::Int4 | Type::Uint4 => 4,
			Type::Float8 | Type::Int8 | Type::Uint8 => 8,
			Type::Decimal | Type::Int16 | Type::Date | Type::DateTime => 16,
		}
	}

	/// Number of bytes the type occupies in the static section of an
	/// encoded row.
	pub fn size(&self) -> usize {
		match self {
			Type::Undefined => 0,
			Type::Boolean => 1,
			Type::Int1 => 1,
			Type::Int2 => 2,
			Type::Int4 => 4,
			Type::Int8 => 8,
			Type::Int16 => 16,
			Type::Uint1 => 1,
			Type::Uint2 => 2,
			Type::Uint4 => 4,
			Type::Uint8 => 8,
			Type::Float4 => 4,
			Type::Float8 => 8,
			Type::Decimal => 12, // integer: i64 + fraction: i32
			Type::Date => 8,
			Type::DateTime => 8,
			// offset: u32 + length: u32
			Type::Char | Type::Varchar => 8,
			Type::Object | Type::Hll | Type::Struct | Type::Array | Type::Map => 8,
		}
	}

	pub fn alignment(&self) -> usize {
		match self {
			Type::Undefined => 1,
			Type::Boolean => 1,
			Type::Int1 => 1,
			Type::Int2 => 2,
			Type::Int4 => 4,
			Type::Int8 => 8,
			Type::Int16 => 16,
			Type::Uint1 => 1,
			Type::Uint2 => 2,
			Type::Uint4 => 4,
			Type::Uint8 => 8,
			Type::Float4 => 4,
			Type::Float8 => 8,
			Type::Decimal => 8,
			Type::Date => 8,
			Type::DateTime => 8,
			Type::Char | Type::Varchar => 4,
			Type::Object | Type::Hll | Type::Struct | Type::Array | Type::Map => 4,
		}
	}
}

impl Type {
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Undefined => 0x00,
			Type::Boolean => 0x01,
			Type::Int1 => 0x02,
			Type::Int2 => 0x03,
			Type::Int4 => 0x04,
			Type::Int8 => 0x05,
			Type::Int16 => 0x06,
			Type::Uint1 => 0x07,
			Type::Uint2 => 0x08,
			Type::Uint4 => 0x09,
			Type::Uint8 => 0x0A,
			Type::Float4 => 0x0B,
			Type::Float8 => 0x0C,
			Type::Decimal => 0x0D,
			Type::Date => 0x0E,
			Type::DateTime => 0x0F,
			Type::Char => 0x10,
			Type::Varchar => 0x11,
			Type::Object => 0x12,
			Type::Hll => 0x13,
			Type::Struct => 0x14,
			Type::Array => 0x15,
			Type::Map => 0x16,
		}
	}
}

impl TryFrom<u8> for Type {
	type Error = TypeError;

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		Ok(match code {
			0x00 => Type::Undefined,
			0x01 => Type::Boolean,
			0x02 => Type::Int1,
			0x03 => Type::Int2,
			0x04 => Type::Int4,
			0x05 => Type::Int8,
			0x06 => Type::Int16,
			0x07 => Type::Uint1,
			0x08 => Type::Uint2,
			0x09 => Type::Uint4,
			0x0A => Type::Uint8,
			0x0B => Type::Float4,
			0x0C => Type::Float8,
			0x0D => Type::Decimal,
			0x0E => Type::Date,
			0x0F => Type::DateTime,
			0x10 => Type::Char,
			0x11 => Type::Varchar,
			0x12 => Type::Object,
			0x13 => Type::Hll,
			0x14 => Type::Struct,
			0x15 => Type::Array,
			0x16 => Type::Map,
			code => {
				return Err(TypeError::UnknownTypeCode {
					code,
				});
			}
		})
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Decimal => f.write_str("Decimal"),
			Type::Date => f.write_str("Date"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Char => f.write_str("Char"),
			Type::Varchar => f.write_str("Varchar"),
			Type::Object => f.write_str("Object"),
			Type::Hll => f.write_str("Hll"),
			Type::Struct => f.write_str("Struct"),
			Type::Array => f.write_str("Array"),
			Type::Map => f.write_str("Map"),
		}
	}
}

impl FromStr for Type {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"undefined" | "none" => Ok(Type::Undefined),
			"boolean" | "bool" => Ok(Type::Boolean),
			"int1" | "tinyint" => Ok(Type::Int1),
			"int2" | "smallint" => Ok(Type::Int2),
			"int4" | "int" => Ok(Type::Int4),
			"int8" | "bigint" => Ok(Type::Int8),
			"int16" | "largeint" => Ok(Type::Int16),
			"uint1" => Ok(Type::Uint1),
			"uint2" => Ok(Type::Uint2),
			"uint4" => Ok(Type::Uint4),
			"uint8" => Ok(Type::Uint8),
			"float4" | "float" => Ok(Type::Float4),
			"float8" | "double" => Ok(Type::Float8),
			"decimal" => Ok(Type::Decimal),
			"date" => Ok(Type::Date),
			"datetime" => Ok(Type::DateTime),
			"char" => Ok(Type::Char),
			"varchar" | "utf8" => Ok(Type::Varchar),
			"object" => Ok(Type::Object),
			"hll" => Ok(Type::Hll),
			"struct" => Ok(Type::Struct),
			"array" => Ok(Type::Array),
			"map" => Ok(Type::Map),
			_ => Err(TypeError::UnknownTypeName {
				name: s.to_string(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [Type; 23] = [
		Type::Undefined,
		Type::Boolean,
		Type::Int1,
		Type::Int2,
		Type::Int4,
		Type::Int8,
		Type::Int16,
		Type::Uint1,
		Type::Uint2,
		Type::Uint4,
		Type::Uint8,
		Type::Float4,
		Type::Float8,
		Type::Decimal,
		Type::Date,
		Type::DateTime,
		Type::Char,
		Type::Varchar,
		Type::Object,
		Type::Hll,
		Type::Struct,
		Type::Array,
		Type::Map,
	];

	mod natural_byte_size {
		use super::ALL;
		use crate::Type;

		#[test]
		fn test_composites_and_strings_are_zero() {
			for ty in [Type::Object, Type::Hll, Type::Struct, Type::Array, Type::Map, Type::Char, Type::Varchar]
			{
				assert_eq!(ty.natural_byte_size(), 0, "{ty}");
			}
		}

		#[test]
		fn test_wide_types() {
			for ty in [Type::Decimal, Type::Int16, Type::Date, Type::DateTime] {
				assert_eq!(ty.natural_byte_size(), 16, "{ty}");
			}
		}

		#[test]
		fn test_never_exceeds_sixteen() {
			for ty in ALL {
				assert!(matches!(ty.natural_byte_size(), 0 | 1 | 2 | 4 | 8 | 16), "{ty}");
			}
		}
	}

	mod codes {
		use super::ALL;
		use crate::{Type, TypeError};

		#[test]
		fn test_every_code_resolves_back() {
			for ty in ALL {
				assert_eq!(Type::try_from(ty.to_u8()), Ok(ty));
			}
		}

		#[test]
		fn test_unknown_code() {
			assert_eq!(
				Type::try_from(0x7f_u8),
				Err(TypeError::UnknownTypeCode {
					code: 0x7f
				})
			);
		}
	}

	mod from_str {
		use crate::Type;

		#[test]
		fn test_aliases() {
			assert_eq!("INT4".parse::<Type>().unwrap(), Type::Int4);
			assert_eq!("largeint".parse::<Type>().unwrap(), Type::Int16);
			assert_eq!("double".parse::<Type>().unwrap(), Type::Float8);
			assert_eq!("utf8".parse::<Type>().unwrap(), Type::Varchar);
		}

		#[test]
		fn test_display_parses_back() {
			for ty in super::ALL {
				assert_eq!(ty.to_string().parse::<Type>().unwrap(), ty);
			}
		}

		#[test]
		fn test_unknown() {
			assert!("quaternion".parse::<Type>().is_err());
		}
	}
}
