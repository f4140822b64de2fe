// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Result, Width, ZOrderError};

/// Configuration of a z-order comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZOrderConfig {
	/// Number of leading schema columns interleaved into the Morton code.
	pub sort_columns: usize,

	/// Forces the width of the shared representation.
	///
	/// Default: derived from the widest sort column
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub width: Option<Width>,
}

impl ZOrderConfig {
	pub fn new(sort_columns: usize) -> Self {
		Self {
			sort_columns,
			width: None,
		}
	}

	/// Force a width. It must not be narrower than the one the sort
	/// columns require; a wider one widens the window strings are
	/// compared by.
	pub fn width(mut self, width: Width) -> Self {
		self.width = Some(width);
		self
	}

	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|err| ZOrderError::InvalidConfig(err.to_string()))
	}

	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(|err| ZOrderError::InvalidConfig(err.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use crate::{Width, ZOrderConfig, ZOrderError};

	#[test]
	fn test_builder() {
		let config = ZOrderConfig::new(3).width(Width::W128);
		assert_eq!(config.sort_columns, 3);
		assert_eq!(config.width, Some(Width::W128));
	}

	#[test]
	fn test_from_json() {
		let config = ZOrderConfig::from_json(r#"{"sort_columns": 2, "width": 64}"#).unwrap();
		assert_eq!(config, ZOrderConfig::new(2).width(Width::W64));

		let config = ZOrderConfig::from_json(r#"{"sort_columns": 1}"#).unwrap();
		assert_eq!(config, ZOrderConfig::new(1));
	}

	#[test]
	fn test_to_json() {
		assert_eq!(ZOrderConfig::new(2).to_json().unwrap(), r#"{"sort_columns":2}"#);
		assert_eq!(ZOrderConfig::new(1).width(Width::W32).to_json().unwrap(), r#"{"sort_columns":1,"width":32}"#);
	}

	#[test]
	fn test_invalid_width() {
		let err = ZOrderConfig::from_json(r#"{"sort_columns": 2, "width": 48}"#).unwrap_err();
		let ZOrderError::InvalidConfig(message) = err else {
			panic!("expected invalid config, got {err:?}");
		};
		assert!(message.contains("width must be 32, 64 or 128 bits, got 48"), "{message}");
	}

	#[test]
	fn test_unknown_field() {
		assert!(matches!(
			ZOrderConfig::from_json(r#"{"sort_columns": 2, "colour": "red"}"#),
			Err(ZOrderError::InvalidConfig(_))
		));
	}
}
