// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Z-order clustering of typed rows.
//!
//! Every sort column value is mapped onto an unsigned integer of a common
//! width (its shared representation) whose unsigned order matches the order
//! of the value within its type. Two rows are then compared as if the bits of
//! their shared representations had been interleaved into one Morton code,
//! without ever building that code.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use comparator::{Comparator, RowComparator, ZOrderComparator, less_msb};
pub use config::ZOrderConfig;
pub use encode::encode;
pub use error::{Result, ZOrderError};
pub use repr::SharedRepr;
pub use width::{Width, max_column_size, select_width};

pub mod byteorder;
mod comparator;
mod config;
mod encode;
mod error;
mod repr;
mod width;
