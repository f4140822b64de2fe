// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zcluster_type::{Type, Value};

use crate::{
	Cell,
	row::{EncodedRow, EncodedRowLayout, Row},
};

impl EncodedRowLayout {
	/// Encodes a full row of values into a freshly allocated buffer.
	pub fn encode_values(&self, values: &[Value]) -> EncodedRow {
		let mut row = self.allocate_row();
		self.set_values(&mut row, values);
		row
	}

	pub fn set_values(&self, row: &mut EncodedRow, values: &[Value]) {
		debug_assert_eq!(values.len(), self.fields.len());
		for (idx, value) in values.iter().enumerate() {
			self.set_value(row, idx, value)
		}
	}

	pub fn set_value(&self, row: &mut EncodedRow, index: usize, val: &Value) {
		let field = &self.fields[index];

		match (field.ty, val) {
			(_, Value::Undefined) => self.set_undefined(row, index),
			(Type::Boolean, Value::Boolean(v)) => self.set_bool(row, index, *v),
			(Type::Int1, Value::Int1(v)) => self.set_i8(row, index, *v),
			(Type::Int2, Value::Int2(v)) => self.set_i16(row, index, *v),
			(Type::Int4, Value::Int4(v)) => self.set_i32(row, index, *v),
			(Type::Int8, Value::Int8(v)) => self.set_i64(row, index, *v),
			(Type::Int16, Value::Int16(v)) => self.set_i128(row, index, *v),
			(Type::Uint1, Value::Uint1(v)) => self.set_u8(row, index, *v),
			(Type::Uint2, Value::Uint2(v)) => self.set_u16(row, index, *v),
			(Type::Uint4, Value::Uint4(v)) => self.set_u32(row, index, *v),
			(Type::Uint8, Value::Uint8(v)) => self.set_u64(row, index, *v),
			(Type::Float4, Value::Float4(v)) => self.set_f32(row, index, *v),
			(Type::Float8, Value::Float8(v)) => self.set_f64(row, index, *v),
			(Type::Decimal, Value::Decimal(v)) => self.set_decimal(row, index, *v),
			(Type::Date, Value::Date(v)) => self.set_date(row, index, *v),
			(Type::DateTime, Value::DateTime(v)) => self.set_datetime(row, index, *v),
			(Type::Char | Type::Varchar, Value::Char(v) | Value::Varchar(v)) => {
				self.set_str(row, index, v)
			}
			(ty, Value::Blob(v)) if ty.is_composite() => self.set_bytes(row, index, v),
			(ty, v) => unreachable!("value {v} does not fit column of type {ty}"),
		}
	}
}

/// A row held as owned values, the cursor side counterpart of `EncodedRow`.
#[derive(Debug, Clone, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	pub fn new(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl From<Vec<Value>> for Values {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl Row for Values {
	fn len(&self) -> usize {
		self.0.len()
	}

	fn cell(&self, index: usize) -> Cell<'_> {
		Cell::from(&self.0[index])
	}
}

impl Row for [Value] {
	fn len(&self) -> usize {
		<[Value]>::len(self)
	}

	fn cell(&self, index: usize) -> Cell<'_> {
		Cell::from(&self[index])
	}
}

#[cfg(test)]
mod tests {
	use zcluster_type::{Date, Decimal, Type, Value};

	use crate::{Cell, Row, Schema, Values, row::BoundRow};

	#[test]
	fn test_values_row() {
		let row = Values::new(vec![Value::Int4(1), Value::Undefined, Value::Varchar("ab".to_string())]);
		assert_eq!(row.len(), 3);
		assert_eq!(row.cell(0), Cell::Int4(1));
		assert!(row.is_null(1));
		assert_eq!(row.cell(2), Cell::Bytes(b"ab"));
	}

	#[test]
	fn test_slice_row() {
		let values = [Value::Float8(0.5), Value::Undefined];
		let row: &[Value] = &values;
		assert_eq!(Row::len(row), 2);
		assert_eq!(row.cell(0), Cell::Float8(0.5));
		assert!(row.is_null(1));
	}

	#[test]
	fn test_encoded_row_reads_like_values() {
		let schema = Schema::testing(&[Type::Int8, Type::Decimal, Type::Date, Type::Varchar, Type::Uint2]);
		let values = vec![
			Value::Int8(-42),
			Value::Decimal(Decimal::new(3, 140_000_000)),
			Value::Date(Date::new(2024, 1, 31).unwrap()),
			Value::Varchar("zorder".to_string()),
			Value::Undefined,
		];
		let layout = schema.layout().unwrap();
		let encoded = layout.encode_values(&values);
		let flat = BoundRow::new(layout, &encoded);
		let cursor = Values::new(values);

		assert_eq!(flat.len(), cursor.len());
		for index in 0..cursor.len() {
			assert_eq!(flat.cell(index), cursor.cell(index), "cell {index}");
		}
	}
}
