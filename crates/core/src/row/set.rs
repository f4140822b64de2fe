// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zcluster_type::{Date, DateTime, Decimal, Type};

use crate::row::{EncodedRow, EncodedRowLayout};

macro_rules! set_fixed {
	($($name:ident($t:ty) => $($ty:ident)|+;)*) => {
		$(
			pub fn $name(&self, row: &mut EncodedRow, index: usize, value: impl Into<$t>) {
				let field = &self.fields[index];
				debug_assert!(row.len() >= self.total_static_size());
				debug_assert!(matches!(field.ty, $(Type::$ty)|+));
				let value: $t = value.into();
				row.write(field.offset, &value.to_le_bytes());
				row.set_valid(index, true);
			}
		)*
	};
}

impl EncodedRowLayout {
	set_fixed! {
		set_i8(i8) => Int1;
		set_i16(i16) => Int2;
		set_i32(i32) => Int4;
		set_i64(i64) => Int8;
		set_i128(i128) => Int16;
		set_u8(u8) => Uint1;
		set_u16(u16) => Uint2;
		set_u32(u32) => Uint4;
		set_u64(u64) => Uint8;
		set_f32(f32) => Float4;
		set_f64(f64) => Float8;
	}

	pub fn set_bool(&self, row: &mut EncodedRow, index: usize, value: impl Into<bool>) {
		let field = &self.fields[index];
		debug_assert_eq!(field.ty, Type::Boolean);
		row.write(field.offset, &[value.into() as u8]);
		row.set_valid(index, true);
	}

	pub fn set_decimal(&self, row: &mut EncodedRow, index: usize, value: Decimal) {
		let field = &self.fields[index];
		debug_assert_eq!(field.ty, Type::Decimal);
		row.write(field.offset, &value.integer().to_le_bytes());
		row.write(field.offset + 8, &value.fraction().to_le_bytes());
		row.set_valid(index, true);
	}

	pub fn set_date(&self, row: &mut EncodedRow, index: usize, value: Date) {
		let field = &self.fields[index];
		debug_assert_eq!(field.ty, Type::Date);
		row.write(field.offset, &value.to_packed().to_le_bytes());
		row.set_valid(index, true);
	}

	pub fn set_datetime(&self, row: &mut EncodedRow, index: usize, value: DateTime) {
		let field = &self.fields[index];
		debug_assert_eq!(field.ty, Type::DateTime);
		row.write(field.offset, &value.to_packed().to_le_bytes());
		row.set_valid(index, true);
	}

	/// Appends the bytes of a string or composite field to the dynamic
	/// section and stores an `[offset: u32][length: u32]` reference to them.
	pub fn set_bytes(&self, row: &mut EncodedRow, index: usize, value: &[u8]) {
		let field = &self.fields[index];
		debug_assert!(field.ty.is_string() || field.ty.is_composite());
		debug_assert!(!row.is_defined(index), "variable length field {} already set", index);

		// Calculate offset in dynamic section (relative to start of
		// dynamic section)
		let dynamic_offset = self.dynamic_section_size(row);
		row.0.extend_from_slice(value);

		row.write(field.offset, &(dynamic_offset as u32).to_le_bytes());
		row.write(field.offset + 4, &(value.len() as u32).to_le_bytes());
		row.set_valid(index, true);
	}

	pub fn set_str(&self, row: &mut EncodedRow, index: usize, value: &str) {
		self.set_bytes(row, index, value.as_bytes())
	}

	pub fn set_undefined(&self, row: &mut EncodedRow, index: usize) {
		let field = &self.fields[index];
		row.0[field.offset..field.offset + field.size].fill(0);
		row.set_valid(index, false);
	}
}
