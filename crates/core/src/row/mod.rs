// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use bound::BoundRow;
pub use layout::{EncodedRowLayout, EncodedRowLayoutInner, Field};
pub use row::EncodedRow;
pub use value::Values;

use crate::Cell;

mod bound;
mod get;
mod layout;
mod row;
mod set;
mod value;

/// Read access to the cells of one row, independent of how the row is
/// stored.
pub trait Row {
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the cell at `index`. Panics if `index >= self.len()`.
	fn cell(&self, index: usize) -> Cell<'_>;

	fn is_null(&self, index: usize) -> bool {
		self.cell(index).is_null()
	}
}

impl<R: Row + ?Sized> Row for &R {
	fn len(&self) -> usize {
		(**self).len()
	}

	fn cell(&self, index: usize) -> Cell<'_> {
		(**self).cell(index)
	}
}
