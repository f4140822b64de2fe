// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zcluster_type::{Date, DateTime, Decimal, Type, Value};

/// A read-only view of a single cell of a row.
///
/// Fixed size payloads are copied out, variable length payloads borrow from
/// the row they were read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
	Null,
	Boolean(bool),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Int16(i128),
	Uint1(u8),
	Uint2(u16),
	Uint4(u32),
	Uint8(u64),
	Float4(f32),
	Float8(f64),
	Decimal(Decimal),
	Date(Date),
	DateTime(DateTime),
	/// Bytes of a `Char` or `Varchar` cell
	Bytes(&'a [u8]),
	/// Serialized payload of a composite cell
	Opaque(&'a [u8]),
}

impl<'a> Cell<'a> {
	#[inline]
	pub fn is_null(&self) -> bool {
		matches!(self, Cell::Null)
	}

	/// Whether the payload kind is one a column of type `ty` can hold.
	pub fn matches(&self, ty: Type) -> bool {
		match self {
			Cell::Null => true,
			Cell::Boolean(_) => ty == Type::Boolean,
			Cell::Int1(_) => ty == Type::Int1,
			Cell::Int2(_) => ty == Type::Int2,
			Cell::Int4(_) => ty == Type::Int4,
			Cell::Int8(_) => ty == Type::Int8,
			Cell::Int16(_) => ty == Type::Int16,
			Cell::Uint1(_) => ty == Type::Uint1,
			Cell::Uint2(_) => ty == Type::Uint2,
			Cell::Uint4(_) => ty == Type::Uint4,
			Cell::Uint8(_) => ty == Type::Uint8,
			Cell::Float4(_) => ty == Type::Float4,
			Cell::Float8(_) => ty == Type::Float8,
			Cell::Decimal(_) => ty == Type::Decimal,
			Cell::Date(_) => ty == Type::Date,
			Cell::DateTime(_) => ty == Type::DateTime,
			Cell::Bytes(_) => ty.is_string(),
			Cell::Opaque(_) => ty.is_composite(),
		}
	}
}

impl<'a> From<&'a Value> for Cell<'a> {
	fn from(value: &'a Value) -> Self {
		match value {
			Value::Undefined => Cell::Null,
			Value::Boolean(v) => Cell::Boolean(*v),
			Value::Int1(v) => Cell::Int1(*v),
			Value::Int2(v) => Cell::Int2(*v),
			Value::Int4(v) => Cell::Int4(*v),
			Value::Int8(v) => Cell::Int8(*v),
			Value::Int16(v) => Cell::Int16(*v),
			Value::Uint1(v) => Cell::Uint1(*v),
			Value::Uint2(v) => Cell::Uint2(*v),
			Value::Uint4(v) => Cell::Uint4(*v),
			Value::Uint8(v) => Cell::Uint8(*v),
			Value::Float4(v) => Cell::Float4(*v),
			Value::Float8(v) => Cell::Float8(*v),
			Value::Decimal(v) => Cell::Decimal(*v),
			Value::Date(v) => Cell::Date(*v),
			Value::DateTime(v) => Cell::DateTime(*v),
			Value::Char(v) | Value::Varchar(v) => Cell::Bytes(v.as_bytes()),
			Value::Blob(v) => Cell::Opaque(v.as_slice()),
		}
	}
}
