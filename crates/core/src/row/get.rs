// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zcluster_type::{Date, DateTime, Decimal, Type};

use crate::{
	Cell,
	row::{EncodedRow, EncodedRowLayout},
};

impl EncodedRowLayout {
	/// Reads the cell at `index` as a typed view.
	///
	/// An undefined field reads as `Cell::Null` regardless of its type.
	pub fn cell<'a>(&self, row: &'a EncodedRow, index: usize) -> Cell<'a> {
		if !row.is_defined(index) {
			return Cell::Null;
		}

		let field = &self.fields[index];
		let offset = field.offset;
		match field.ty {
			Type::Undefined => Cell::Null,
			Type::Boolean => Cell::Boolean(row[offset] != 0),
			Type::Int1 => Cell::Int1(i8::from_le_bytes(row.read(offset))),
			Type::Int2 => Cell::Int2(i16::from_le_bytes(row.read(offset))),
			Type::Int4 => Cell::Int4(i32::from_le_bytes(row.read(offset))),
			Type::Int8 => Cell::Int8(i64::from_le_bytes(row.read(offset))),
			Type::Int16 => Cell::Int16(i128::from_le_bytes(row.read(offset))),
			Type::Uint1 => Cell::Uint1(row[offset]),
			Type::Uint2 => Cell::Uint2(u16::from_le_bytes(row.read(offset))),
			Type::Uint4 => Cell::Uint4(u32::from_le_bytes(row.read(offset))),
			Type::Uint8 => Cell::Uint8(u64::from_le_bytes(row.read(offset))),
			Type::Float4 => Cell::Float4(f32::from_le_bytes(row.read(offset))),
			Type::Float8 => Cell::Float8(f64::from_le_bytes(row.read(offset))),
			Type::Decimal => Cell::Decimal(Decimal::new(
				i64::from_le_bytes(row.read(offset)),
				i32::from_le_bytes(row.read(offset + 8)),
			)),
			Type::Date => Cell::Date(Date::from_packed(u64::from_le_bytes(row.read(offset)))),
			Type::DateTime => Cell::DateTime(DateTime::from_packed(u64::from_le_bytes(row.read(offset)))),
			Type::Char | Type::Varchar => Cell::Bytes(self.dynamic_bytes(row, offset)),
			Type::Object | Type::Hll | Type::Struct | Type::Array | Type::Map => {
				Cell::Opaque(self.dynamic_bytes(row, offset))
			}
		}
	}

	/// Resolves an `[offset: u32][length: u32]` reference stored at
	/// `offset` against the dynamic section.
	fn dynamic_bytes<'a>(&self, row: &'a EncodedRow, offset: usize) -> &'a [u8] {
		let dynamic_offset = u32::from_le_bytes(row.read(offset)) as usize;
		let length = u32::from_le_bytes(row.read(offset + 4)) as usize;

		let start = self.dynamic_section_start() + dynamic_offset;
		&row.as_slice()[start..start + length]
	}
}

#[cfg(test)]
mod tests {
	use zcluster_type::{Date, DateTime, Decimal, Type};

	use crate::{Cell, row::EncodedRowLayout};

	#[test]
	fn test_fixed_width_cells() {
		let layout = EncodedRowLayout::new(&[
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
		]);
		let mut row = layout.allocate_row();
		layout.set_bool(&mut row, 0, true);
		layout.set_i8(&mut row, 1, -8i8);
		layout.set_i16(&mut row, 2, -16i16);
		layout.set_i32(&mut row, 3, -32i32);
		layout.set_i64(&mut row, 4, -64i64);
		layout.set_i128(&mut row, 5, i128::MIN);
		layout.set_u8(&mut row, 6, 8u8);
		layout.set_u16(&mut row, 7, 16u16);
		layout.set_u32(&mut row, 8, u32::MAX);
		layout.set_u64(&mut row, 9, 64u64);
		layout.set_f32(&mut row, 10, -1.5f32);
		layout.set_f64(&mut row, 11, f64::INFINITY);

		assert_eq!(layout.cell(&row, 0), Cell::Boolean(true));
		assert_eq!(layout.cell(&row, 1), Cell::Int1(-8));
		assert_eq!(layout.cell(&row, 2), Cell::Int2(-16));
		assert_eq!(layout.cell(&row, 3), Cell::Int4(-32));
		assert_eq!(layout.cell(&row, 4), Cell::Int8(-64));
		assert_eq!(layout.cell(&row, 5), Cell::Int16(i128::MIN));
		assert_eq!(layout.cell(&row, 6), Cell::Uint1(8));
		assert_eq!(layout.cell(&row, 7), Cell::Uint2(16));
		assert_eq!(layout.cell(&row, 8), Cell::Uint4(u32::MAX));
		assert_eq!(layout.cell(&row, 9), Cell::Uint8(64));
		assert_eq!(layout.cell(&row, 10), Cell::Float4(-1.5));
		assert_eq!(layout.cell(&row, 11), Cell::Float8(f64::INFINITY));
		assert!(layout.all_defined(&row));
	}

	#[test]
	fn test_decimal_and_temporal_cells() {
		let layout = EncodedRowLayout::new(&[Type::Decimal, Type::Date, Type::DateTime]);
		let mut row = layout.allocate_row();
		let date = Date::new(2024, 2, 29).unwrap();
		let datetime = DateTime::new(2024, 2, 29, 12, 30, 0).unwrap();

		layout.set_decimal(&mut row, 0, Decimal::new(-3, -250_000_000));
		layout.set_date(&mut row, 1, date);
		layout.set_datetime(&mut row, 2, datetime);

		assert_eq!(layout.cell(&row, 0), Cell::Decimal(Decimal::new(-3, -250_000_000)));
		assert_eq!(layout.cell(&row, 1), Cell::Date(date));
		assert_eq!(layout.cell(&row, 2), Cell::DateTime(datetime));
	}

	#[test]
	fn test_variable_length_cells() {
		let layout = EncodedRowLayout::new(&[Type::Varchar, Type::Int4, Type::Char, Type::Struct]);
		let mut row = layout.allocate_row();
		layout.set_str(&mut row, 0, "hello");
		layout.set_i32(&mut row, 1, 7i32);
		layout.set_str(&mut row, 2, "");
		layout.set_bytes(&mut row, 3, &[0xde, 0xad]);

		assert_eq!(layout.cell(&row, 0), Cell::Bytes(b"hello"));
		assert_eq!(layout.cell(&row, 1), Cell::Int4(7));
		assert_eq!(layout.cell(&row, 2), Cell::Bytes(b""));
		assert_eq!(layout.cell(&row, 3), Cell::Opaque(&[0xde_u8, 0xad]));
		assert_eq!(layout.dynamic_section_size(&row), 7);
	}

	#[test]
	fn test_undefined_reads_null() {
		let layout = EncodedRowLayout::new(&[Type::Int4, Type::Varchar]);
		let mut row = layout.allocate_row();
		assert_eq!(layout.cell(&row, 0), Cell::Null);
		assert_eq!(layout.cell(&row, 1), Cell::Null);

		layout.set_i32(&mut row, 0, 12345i32);
		layout.set_undefined(&mut row, 0);
		assert_eq!(layout.cell(&row, 0), Cell::Null);
	}
}
