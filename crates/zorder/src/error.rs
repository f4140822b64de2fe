// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use zcluster_type::{Diagnostic, IntoDiagnostic};

pub type Result<T> = std::result::Result<T, ZOrderError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZOrderError {
	#[error("cannot build a z-order comparator over an empty schema")]
	EmptySchema,

	#[error("a z-order comparator needs at least one sort column")]
	NoSortColumns,

	#[error("{requested} sort columns requested but the schema has only {available} columns")]
	SortColumnsOutOfRange {
		requested: usize,
		available: usize,
	},

	#[error("width of {requested} bits is narrower than the {required} bits the sort columns need")]
	WidthTooNarrow {
		requested: u32,
		required: u32,
	},

	#[error("row comparator used before it was configured")]
	Unconfigured,

	#[error("invalid z-order configuration: {0}")]
	InvalidConfig(String),
}

impl IntoDiagnostic for ZOrderError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		let (code, help) = match &self {
			ZOrderError::EmptySchema => ("ZORDER_001", "define at least one column before clustering"),
			ZOrderError::NoSortColumns => ("ZORDER_002", "choose between 1 and the number of schema columns"),
			ZOrderError::SortColumnsOutOfRange {
				..
			} => ("ZORDER_003", "sort columns are a prefix of the schema and cannot exceed it"),
			ZOrderError::WidthTooNarrow {
				..
			} => ("ZORDER_004", "omit the width to let it be derived from the sort columns"),
			ZOrderError::Unconfigured => {
				("ZORDER_005", "build a z-order comparator from a schema before comparing rows")
			}
			ZOrderError::InvalidConfig(_) => {
				("ZORDER_006", r#"configurations look like {"sort_columns": 2, "width": 64}"#)
			}
		};

		let notes = match self {
			ZOrderError::WidthTooNarrow {
				..
			} => vec!["a narrower width would truncate the widest sort column".to_string()],
			_ => vec![],
		};

		Diagnostic {
			code: code.to_string(),
			message,
			help: Some(help.to_string()),
			notes,
		}
	}
}
