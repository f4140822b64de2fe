// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A row encoded into one contiguous buffer.
// [bitvec]:[static_values]:[dynamic_values]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedRow(pub Vec<u8>);

impl Deref for EncodedRow {
	type Target = Vec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedRow {
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	#[inline]
	pub fn is_defined(&self, index: usize) -> bool {
		let byte = index / 8;
		let bit = index % 8;
		(self.0[byte] & (1 << bit)) != 0
	}

	pub(crate) fn set_valid(&mut self, index: usize, valid: bool) {
		let byte = index / 8;
		let bit = index % 8;
		if valid {
			self.0[byte] |= 1 << bit;
		} else {
			self.0[byte] &= !(1 << bit);
		}
	}

	/// Copies `N` bytes starting at `offset`.
	#[inline]
	pub(crate) fn read<const N: usize>(&self, offset: usize) -> [u8; N] {
		let mut bytes = [0u8; N];
		bytes.copy_from_slice(&self.0[offset..offset + N]);
		bytes
	}

	#[inline]
	pub(crate) fn write(&mut self, offset: usize, bytes: &[u8]) {
		self.0[offset..offset + bytes.len()].copy_from_slice(bytes);
	}
}

#[cfg(test)]
mod tests {
	use crate::EncodedRow;

	#[test]
	fn test_valid_bits() {
		let mut row = EncodedRow(vec![0u8; 4]);
		row.set_valid(0, true);
		row.set_valid(9, true);
		assert!(row.is_defined(0));
		assert!(!row.is_defined(1));
		assert!(row.is_defined(9));
		assert_eq!(row.as_slice()[..2], [0b0000_0001, 0b0000_0010]);

		row.set_valid(0, false);
		assert!(!row.is_defined(0));
	}

	#[test]
	fn test_read_write() {
		let mut row = EncodedRow(vec![0u8; 8]);
		row.write(2, &0x0102_0304u32.to_le_bytes());
		assert_eq!(u32::from_le_bytes(row.read::<4>(2)), 0x0102_0304);
	}
}
