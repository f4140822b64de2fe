// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Interprets up to 16 bytes as one big-endian unsigned integer, so that
/// comparing the results numerically agrees with comparing the inputs
/// lexicographically (for inputs of equal length).
///
/// The empty slice normalizes to 0.
#[inline]
pub fn normalize(bytes: &[u8]) -> u128 {
	debug_assert!(bytes.len() <= 16, "cannot normalize {} bytes into 128 bits", bytes.len());

	if let Ok(bytes) = <[u8; 16]>::try_from(bytes) {
		return u128::from_be_bytes(bytes);
	}
	if let Ok(bytes) = <[u8; 8]>::try_from(bytes) {
		return u64::from_be_bytes(bytes) as u128;
	}
	if let Ok(bytes) = <[u8; 4]>::try_from(bytes) {
		return u32::from_be_bytes(bytes) as u128;
	}
	if let Ok(bytes) = <[u8; 2]>::try_from(bytes) {
		return u16::from_be_bytes(bytes) as u128;
	}

	bytes.iter().fold(0u128, |acc, byte| (acc << 8) | *byte as u128)
}
