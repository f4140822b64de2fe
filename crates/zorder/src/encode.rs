// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zcluster_core::Cell;
use zcluster_type::Type;

use crate::SharedRepr;

/// Maps a cell of a column of type `ty` onto its shared representation.
///
/// For two non-null cells `a < b` of the same type, `encode(a) <= encode(b)`.
/// Nulls, NaNs and composite cells all encode to zero. Strings only
/// contribute their first `U::BITS / 8` bytes.
///
/// A cell whose payload does not fit `ty` is a programming error. It panics
/// in debug builds and encodes to zero otherwise.
#[inline]
pub fn encode<U: SharedRepr>(cell: Cell<'_>, ty: Type) -> U {
	debug_assert!(cell.matches(ty), "cell {cell:?} does not belong to a column of type {ty}");

	match (cell, ty) {
		(Cell::Null, _) => U::ZERO,
		(Cell::Boolean(v), Type::Boolean) => {
			if v {
				U::SIGN
			} else {
				U::ZERO
			}
		}
		(Cell::Int1(v), Type::Int1) => signed(v as u8 as u128, 8),
		(Cell::Int2(v), Type::Int2) => signed(v as u16 as u128, 16),
		(Cell::Int4(v), Type::Int4) => signed(v as u32 as u128, 32),
		(Cell::Int8(v), Type::Int8) => signed(v as u64 as u128, 64),
		(Cell::Int16(v), Type::Int16) => signed(v as u128, 128),
		(Cell::Uint1(v), Type::Uint1) => U::place(v as u128, 8),
		(Cell::Uint2(v), Type::Uint2) => U::place(v as u128, 16),
		(Cell::Uint4(v), Type::Uint4) => U::place(v as u128, 32),
		(Cell::Uint8(v), Type::Uint8) => U::place(v as u128, 64),
		(Cell::Float4(v), Type::Float4) => float(v.is_nan(), v.to_bits() as u128, 32),
		(Cell::Float8(v), Type::Float8) => float(v.is_nan(), v.to_bits() as u128, 64),
		(Cell::Decimal(v), Type::Decimal) => signed(v.to_i128() as u128, 128),
		(Cell::Date(v), Type::Date) => U::place(v.to_packed() as u128, 64),
		(Cell::DateTime(v), Type::DateTime) => U::place(v.to_packed() as u128, 64),
		(Cell::Bytes(bytes), Type::Char | Type::Varchar) => U::from_be_prefix(bytes),
		// composites are not comparable
		_ => U::ZERO,
	}
}

/// Two's complement pattern to unsigned order.
#[inline]
fn signed<U: SharedRepr>(pattern: u128, bits: u32) -> U {
	U::place(pattern, bits) ^ U::SIGN
}

/// IEEE-754 pattern to unsigned order. Negative values, judged by the sign
/// bit, are complemented entirely, the others only get their sign bit set.
#[inline]
fn float<U: SharedRepr>(nan: bool, pattern: u128, bits: u32) -> U {
	if nan {
		return U::ZERO;
	}
	let placed = U::place(pattern, bits);
	if pattern >> (bits - 1) == 1 {
		!placed
	} else {
		placed ^ U::SIGN
	}
}
