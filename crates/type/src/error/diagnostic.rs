// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::TypeError;

/// A renderable description of an error with a stable machine readable code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some(help) = &self.help {
			write!(f, "\nhelp: {help}")?;
		}
		for note in &self.notes {
			write!(f, "\nnote: {note}")?;
		}
		Ok(())
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::UnknownTypeCode {
				..
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message,
				help: Some("the type code does not belong to any known logical type".to_string()),
				notes: vec!["type codes are only produced by Type::to_u8".to_string()],
			},
			TypeError::UnknownTypeName {
				..
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				message,
				help: Some("use a name such as int4, uint8, float8, decimal, date or varchar".to_string()),
				notes: vec![],
			},
			TypeError::InvalidDecimal {
				..
			} => Diagnostic {
				code: "TYPE_003".to_string(),
				message,
				help: Some("decimals are written as [-]digits[.digits] with at most 9 fractional digits"
					.to_string()),
				notes: vec![],
			},
			TypeError::InvalidDate {
				..
			} => Diagnostic {
				code: "TYPE_004".to_string(),
				message,
				help: Some("dates are written as YYYY-MM-DD".to_string()),
				notes: vec![],
			},
			TypeError::InvalidDateTime {
				..
			} => Diagnostic {
				code: "TYPE_005".to_string(),
				message,
				help: Some("datetimes are written as YYYY-MM-DD hh:mm:ss".to_string()),
				notes: vec![],
			},
		}
	}
}
