// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tracing::{debug, error, instrument, warn};
use zcluster_core::{BoundRow, EncodedRow, EncodedRowLayout, Row, Schema};

use crate::{Result, SharedRepr, Width, ZOrderConfig, ZOrderError, encode, max_column_size};

/// Whether the most significant set bit of `y` is above that of `x`.
#[inline]
pub fn less_msb<U: SharedRepr>(x: U, y: U) -> bool {
	x < y && x < (x ^ y)
}

/// An ordering over rows, pluggable into any sort or merge routine.
pub trait RowComparator {
	fn compare<L, R>(&self, lhs: &L, rhs: &R) -> Ordering
	where
		L: Row + ?Sized,
		R: Row + ?Sized;
}

/// Orders rows along the Z-order curve through their leading columns.
///
/// The width of the shared representation is fixed at construction, so a
/// comparator never changes after it was built and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct ZOrderComparator {
	schema: Schema,
	layout: EncodedRowLayout,
	sort_columns: usize,
	max_column_size: usize,
	width: Width,
}

impl ZOrderComparator {
	#[instrument(name = "zorder::comparator::new", level = "debug", skip(schema))]
	pub fn new(schema: Schema, sort_columns: usize) -> Result<Self> {
		Self::with_config(schema, ZOrderConfig::new(sort_columns))
	}

	#[instrument(name = "zorder::comparator::with_config", level = "debug", skip(schema))]
	pub fn with_config(schema: Schema, config: ZOrderConfig) -> Result<Self> {
		let Some(layout) = schema.layout().cloned() else {
			return Err(ZOrderError::EmptySchema);
		};

		let sort_columns = config.sort_columns;
		if sort_columns == 0 {
			return Err(ZOrderError::NoSortColumns);
		}
		if sort_columns > schema.len() {
			return Err(ZOrderError::SortColumnsOutOfRange {
				requested: sort_columns,
				available: schema.len(),
			});
		}

		let max_column_size = max_column_size(&schema, sort_columns);
		let required = Width::for_byte_size(max_column_size);
		let width = match config.width {
			Some(width) if width < required => {
				return Err(ZOrderError::WidthTooNarrow {
					requested: width.bits(),
					required: required.bits(),
				});
			}
			Some(width) => width,
			None => required,
		};

		let unsupported: Vec<&str> = schema.columns()[..sort_columns]
			.iter()
			.filter(|column| column.ty.is_composite())
			.map(|column| column.name.as_str())
			.collect();
		if !unsupported.is_empty() {
			warn!(?unsupported, "sort columns of composite type compare as equal");
		}

		debug!(width = width.bits(), max_column_size, sort_columns, "selected shared representation width");

		Ok(Self {
			schema,
			layout,
			sort_columns,
			max_column_size,
			width,
		})
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	pub fn sort_columns(&self) -> usize {
		self.sort_columns
	}

	pub fn width(&self) -> Width {
		self.width
	}

	pub fn max_column_size(&self) -> usize {
		self.max_column_size
	}

	pub fn compare<L, R>(&self, lhs: &L, rhs: &R) -> Ordering
	where
		L: Row + ?Sized,
		R: Row + ?Sized,
	{
		match self.width {
			Width::W32 => self.compare_as::<u32, L, R>(lhs, rhs),
			Width::W64 => self.compare_as::<u64, L, R>(lhs, rhs),
			Width::W128 => self.compare_as::<u128, L, R>(lhs, rhs),
		}
	}

	/// Same as [`compare`](Self::compare) as -1, 0 or +1.
	pub fn compare_sign<L, R>(&self, lhs: &L, rhs: &R) -> i32
	where
		L: Row + ?Sized,
		R: Row + ?Sized,
	{
		match self.compare(lhs, rhs) {
			Ordering::Less => -1,
			Ordering::Equal => 0,
			Ordering::Greater => 1,
		}
	}

	/// Compares two flat rows encoded with the layout of the bound schema.
	pub fn compare_encoded(&self, lhs: &EncodedRow, rhs: &EncodedRow) -> Ordering {
		self.compare(&BoundRow::new(&self.layout, lhs), &BoundRow::new(&self.layout, rhs))
	}

	/// Sorts `rows` into Z-order.
	pub fn sort<R: Row>(&self, rows: &mut [R]) {
		rows.sort_by(|lhs, rhs| self.compare(lhs, rhs));
	}

	fn compare_as<U, L, R>(&self, lhs: &L, rhs: &R) -> Ordering
	where
		U: SharedRepr,
		L: Row + ?Sized,
		R: Row + ?Sized,
	{
		let columns = &self.schema.columns()[..self.sort_columns];
		debug_assert!(lhs.len() >= self.sort_columns && rhs.len() >= self.sort_columns);

		let first = &columns[0];
		let mut msd_lhs: U = encode(lhs.cell(first.index), first.ty);
		let mut msd_rhs: U = encode(rhs.cell(first.index), first.ty);

		for column in &columns[1..] {
			let l: U = encode(lhs.cell(column.index), column.ty);
			let r: U = encode(rhs.cell(column.index), column.ty);
			// an earlier column keeps precedence on a tie
			if less_msb(msd_lhs ^ msd_rhs, l ^ r) {
				msd_lhs = l;
				msd_rhs = r;
			}
		}

		msd_lhs.cmp(&msd_rhs)
	}
}

impl RowComparator for ZOrderComparator {
	fn compare<L, R>(&self, lhs: &L, rhs: &R) -> Ordering
	where
		L: Row + ?Sized,
		R: Row + ?Sized,
	{
		ZOrderComparator::compare(self, lhs, rhs)
	}
}

/// The comparator a clustering job holds, which may not be configured yet.
#[derive(Debug, Clone, Default)]
pub enum Comparator {
	#[default]
	Unconfigured,
	ZOrder(ZOrderComparator),
}

impl Comparator {
	pub fn is_configured(&self) -> bool {
		matches!(self, Comparator::ZOrder(_))
	}

	/// Compares two rows, failing if no ordering was configured.
	pub fn compare<L, R>(&self, lhs: &L, rhs: &R) -> Result<Ordering>
	where
		L: Row + ?Sized,
		R: Row + ?Sized,
	{
		match self {
			Comparator::Unconfigured => {
				error!("row comparison requested from an unconfigured comparator");
				Err(ZOrderError::Unconfigured)
			}
			Comparator::ZOrder(comparator) => Ok(comparator.compare(lhs, rhs)),
		}
	}
}

impl From<ZOrderComparator> for Comparator {
	fn from(comparator: ZOrderComparator) -> Self {
		Comparator::ZOrder(comparator)
	}
}
