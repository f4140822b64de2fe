// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Debug, LowerHex},
	ops::{BitXor, Not},
};

use crate::byteorder::normalize;

/// A fixed width unsigned integer usable as shared representation.
pub trait SharedRepr:
	Copy + Ord + Debug + LowerHex + BitXor<Output = Self> + Not<Output = Self> + Send + Sync + 'static
{
	const BITS: u32;

	const ZERO: Self;

	/// Only the most significant bit set.
	const SIGN: Self;

	/// Moves the `bits` wide `pattern` (held in the low bits of a `u128`)
	/// into the most significant bits of `Self`.
	///
	/// A pattern wider than `Self` keeps its most significant `Self::BITS`
	/// bits, which preserves order but not distinctness.
	fn place(pattern: u128, bits: u32) -> Self;

	/// Left aligned big-endian value of the first `min(len, BITS / 8)` bytes.
	fn from_be_prefix(bytes: &[u8]) -> Self {
		let len = bytes.len().min(Self::BITS as usize / 8);
		if len == 0 {
			return Self::ZERO;
		}
		Self::place(normalize(&bytes[..len]), len as u32 * 8)
	}
}

macro_rules! impl_shared_repr {
	($($t:ty),*) => {
		$(
			impl SharedRepr for $t {
				const BITS: u32 = <$t>::BITS;
				const ZERO: Self = 0;
				const SIGN: Self = 1 << (<$t>::BITS - 1);

				#[inline]
				fn place(pattern: u128, bits: u32) -> Self {
					debug_assert!(bits > 0 && bits <= 128);
					if bits <= Self::BITS {
						(pattern as $t) << (Self::BITS - bits)
					} else {
						(pattern >> (bits - Self::BITS)) as $t
					}
				}
			}
		)*
	};
}

impl_shared_repr!(u32, u64, u128);
