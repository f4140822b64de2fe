// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use cell::Cell;
pub use row::{BoundRow, EncodedRow, EncodedRowLayout, Field, Row, Values};
pub use schema::{Column, Schema};

mod cell;
pub mod row;
mod schema;
