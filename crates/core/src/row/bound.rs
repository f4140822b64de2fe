// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	Cell,
	row::{EncodedRow, EncodedRowLayout, Row},
};

/// An encoded row paired with the layout needed to read it.
#[derive(Debug, Clone, Copy)]
pub struct BoundRow<'a> {
	layout: &'a EncodedRowLayout,
	row: &'a EncodedRow,
}

impl<'a> BoundRow<'a> {
	pub fn new(layout: &'a EncodedRowLayout, row: &'a EncodedRow) -> Self {
		Self {
			layout,
			row,
		}
	}
}

impl Row for BoundRow<'_> {
	fn len(&self) -> usize {
		self.layout.fields.len()
	}

	fn cell(&self, index: usize) -> Cell<'_> {
		self.layout.cell(self.row, index)
	}
}
