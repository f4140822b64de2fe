// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use zcluster_type::Type;

use crate::row::EncodedRow;

#[derive(Debug, Clone)]
pub struct EncodedRowLayout(Arc<EncodedRowLayoutInner>);

impl Deref for EncodedRowLayout {
	type Target = EncodedRowLayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedRowLayout {
	pub fn new(types: &[Type]) -> Self {
		Self(Arc::new(EncodedRowLayoutInner::new(types)))
	}
}

#[derive(Debug)]
pub struct EncodedRowLayoutInner {
	pub fields: Vec<Field>,
	/// size of data in bytes
	pub static_section_size: usize,
	/// size of bitvec part in bytes
	pub bitvec_size: usize,
	pub alignment: usize,
}

#[derive(Debug)]
pub struct Field {
	pub offset: usize,
	pub size: usize,
	pub align: usize,
	pub ty: Type,
}

impl EncodedRowLayoutInner {
	fn new(types: &[Type]) -> Self {
		assert!(!types.is_empty());

		let num_fields = types.len();
		let bitvec_bytes = num_fields.div_ceil(8);

		let mut offset = bitvec_bytes;
		let mut fields = Vec::with_capacity(num_fields);
		let mut max_align = 1;

		for &ty in types {
			let size = ty.size();
			let align = ty.alignment();

			offset = align_up(offset, align);
			fields.push(Field {
				offset,
				size,
				align,
				ty,
			});

			offset += size;
			max_align = max_align.max(align);
		}

		// Calculate the static section size
		let static_section_size = align_up(offset, max_align) - bitvec_bytes;

		EncodedRowLayoutInner {
			fields,
			static_section_size,
			alignment: max_align,
			bitvec_size: bitvec_bytes,
		}
	}

	/// Allocate a row with every field undefined.
	pub fn allocate_row(&self) -> EncodedRow {
		EncodedRow(vec![0u8; self.total_static_size()])
	}

	pub const fn total_static_size(&self) -> usize {
		self.bitvec_size + self.static_section_size
	}

	pub const fn dynamic_section_start(&self) -> usize {
		self.total_static_size()
	}

	pub fn dynamic_section_size(&self, row: &EncodedRow) -> usize {
		row.len().saturating_sub(self.total_static_size())
	}

	pub fn all_defined(&self, row: &EncodedRow) -> bool {
		(0..self.fields.len()).all(|index| row.is_defined(index))
	}
}

fn align_up(offset: usize, align: usize) -> usize {
	(offset + align - 1) & !(align - 1)
}

#[cfg(test)]
mod tests {
	mod new {
		use zcluster_type::Type;

		use crate::row::EncodedRowLayout;

		#[test]
		fn test_single_field_bool() {
			let layout = EncodedRowLayout::new(&[Type::Boolean]);
			assert_eq!(layout.bitvec_size, 1);
			assert_eq!(layout.fields.len(), 1);
			assert_eq!(layout.fields[0].offset, 1);
			assert_eq!(layout.alignment, 1);
			assert_eq!(layout.total_static_size(), 2);
		}

		#[test]
		fn test_multiple_fields() {
			let layout = EncodedRowLayout::new(&[Type::Int1, Type::Int2, Type::Int4]);
			assert_eq!(layout.bitvec_size, 1); // 3 fields = 1 byte
			assert_eq!(layout.fields.len(), 3);

			assert_eq!(layout.fields[0].offset, 1);
			assert_eq!(layout.fields[1].offset, 2);
			assert_eq!(layout.fields[2].offset, 4);

			assert_eq!(layout.alignment, 4);
			assert_eq!(layout.total_static_size(), 8);
		}

		#[test]
		fn test_wide_and_reference_fields() {
			let layout = EncodedRowLayout::new(&[Type::Uint1, Type::Decimal, Type::Int16, Type::Varchar]);

			assert_eq!(layout.fields[0].offset, 1);
			assert_eq!(layout.fields[1].offset, 8);
			assert_eq!(layout.fields[1].size, 12);
			assert_eq!(layout.fields[2].offset, 32);
			assert_eq!(layout.fields[3].offset, 48);

			assert_eq!(layout.alignment, 16);
			assert_eq!(layout.total_static_size(), 64);
		}

		#[test]
		fn test_nine_fields_bitvec_size_two() {
			let types = vec![Type::Boolean; 9];
			let layout = EncodedRowLayout::new(&types);

			// 9 fields → ceil(9/8) = 2 bytes of bitvec bitmap
			assert_eq!(layout.bitvec_size, 2);
			assert_eq!(layout.fields[0].offset, 2);
			for field in &layout.fields {
				assert!(field.offset >= 2);
				assert_eq!(field.offset % field.align, 0);
			}
		}
	}

	mod allocate_row {
		use zcluster_type::Type;

		use crate::row::EncodedRowLayout;

		#[test]
		fn test_initial_state() {
			let layout = EncodedRowLayout::new(&[Type::Boolean, Type::Int1, Type::Uint2]);
			let row = layout.allocate_row();

			assert!(row.as_slice().iter().all(|byte| *byte == 0));
			assert_eq!(row.len(), layout.total_static_size());
			assert!(!layout.all_defined(&row));
			assert_eq!(layout.dynamic_section_size(&row), 0);
		}
	}
}
