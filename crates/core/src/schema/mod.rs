// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Schema definitions shared by every row representation.
//!
//! A `Schema` is an immutable ordered list of typed columns. It also owns the
//! layout used to encode rows of that schema into a contiguous buffer, so any
//! holder of a schema can read both flat and cursor rows.

use std::{fmt::Debug, ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};
use zcluster_type::Type;

use crate::row::EncodedRowLayout;

/// A column within a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	/// Ordinal position
	pub index: usize,
	pub name: String,
	pub ty: Type,
}

/// A cheaply clonable, immutable list of columns.
pub struct Schema(Arc<Inner>);

#[derive(Debug)]
pub struct Inner {
	/// Columns in definition order
	pub columns: Vec<Column>,
	pub layout: Option<EncodedRowLayout>,
}

impl Deref for Schema {
	type Target = Inner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Clone for Schema {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl Debug for Schema {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl PartialEq for Schema {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.0.columns == other.0.columns
	}
}

impl Eq for Schema {}

impl Schema {
	/// Create a new schema from named columns.
	pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = (S, Type)>) -> Self {
		let columns: Vec<Column> = columns
			.into_iter()
			.enumerate()
			.map(|(index, (name, ty))| Column {
				index,
				name: name.into(),
				ty,
			})
			.collect();

		let layout = if columns.is_empty() {
			None
		} else {
			let types: Vec<Type> = columns.iter().map(|c| c.ty).collect();
			Some(EncodedRowLayout::new(&types))
		};

		Self(Arc::new(Inner {
			columns,
			layout,
		}))
	}

	/// Create a schema with generated column names `c0`, `c1`, ...
	pub fn testing(types: &[Type]) -> Self {
		Self::new(types.iter().enumerate().map(|(i, ty)| (format!("c{i}"), *ty)))
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn column(&self, index: usize) -> &Column {
		&self.columns[index]
	}

	pub fn get_column(&self, index: usize) -> Option<&Column> {
		self.columns.get(index)
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Layout of flat rows of this schema, `None` for the empty schema.
	pub fn layout(&self) -> Option<&EncodedRowLayout> {
		self.layout.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use zcluster_type::Type;

	use crate::Schema;

	#[test]
	fn test_column_lookup() {
		let schema = Schema::new([("id", Type::Int8), ("name", Type::Varchar)]);
		assert_eq!(schema.len(), 2);
		assert_eq!(schema.column(1).name, "name");
		assert_eq!(schema.column(1).ty, Type::Varchar);
		assert_eq!(schema.column(1).index, 1);
		assert!(schema.get_column(2).is_none());
	}

	#[test]
	fn test_empty_schema_has_no_layout() {
		let schema = Schema::new(Vec::<(String, Type)>::new());
		assert!(schema.is_empty());
		assert!(schema.layout().is_none());
	}

	#[test]
	fn test_clone_shares_columns() {
		let schema = Schema::testing(&[Type::Int4, Type::Float8]);
		let clone = schema.clone();
		assert_eq!(schema, clone);
		assert_eq!(clone.column(0).name, "c0");
		assert_eq!(clone.layout().unwrap().fields.len(), 2);
	}
}
