// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use zcluster_core::Schema;

use crate::ZOrderError;

/// Bit width of the shared representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Width {
	W32,
	W64,
	W128,
}

impl Width {
	pub const fn bits(&self) -> u32 {
		match self {
			Width::W32 => 32,
			Width::W64 => 64,
			Width::W128 => 128,
		}
	}

	pub const fn bytes(&self) -> usize {
		self.bits() as usize / 8
	}

	/// Narrowest width holding a value of `size` bytes.
	pub const fn for_byte_size(size: usize) -> Self {
		if size <= 4 {
			Width::W32
		} else if size <= 8 {
			Width::W64
		} else {
			Width::W128
		}
	}
}

impl Display for Width {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.bits())
	}
}

impl TryFrom<u32> for Width {
	type Error = ZOrderError;

	fn try_from(bits: u32) -> Result<Self, Self::Error> {
		match bits {
			32 => Ok(Width::W32),
			64 => Ok(Width::W64),
			128 => Ok(Width::W128),
			bits => Err(ZOrderError::InvalidConfig(format!("width must be 32, 64 or 128 bits, got {bits}"))),
		}
	}
}

impl From<Width> for u32 {
	fn from(width: Width) -> Self {
		width.bits()
	}
}

/// Largest natural byte size among the first `sort_columns` columns.
pub fn max_column_size(schema: &Schema, sort_columns: usize) -> usize {
	schema.columns().iter().take(sort_columns).map(|column| column.ty.natural_byte_size()).max().unwrap_or(0)
}

/// Smallest width covering every one of the first `sort_columns` columns.
///
/// Columns without a natural byte size never widen the result, so a schema
/// of only strings or composites resolves to 32 bits.
pub fn select_width(schema: &Schema, sort_columns: usize) -> Width {
	Width::for_byte_size(max_column_size(schema, sort_columns))
}
