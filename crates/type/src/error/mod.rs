// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

pub type Result<T> = std::result::Result<T, TypeError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("unknown type code 0x{code:02x}")]
	UnknownTypeCode {
		code: u8,
	},

	#[error("unknown type name '{name}'")]
	UnknownTypeName {
		name: String,
	},

	#[error("invalid decimal '{text}'")]
	InvalidDecimal {
		text: String,
	},

	#[error("invalid date '{text}'")]
	InvalidDate {
		text: String,
	},

	#[error("invalid datetime '{text}'")]
	InvalidDateTime {
		text: String,
	},
}
