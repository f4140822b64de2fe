// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{Diagnostic, IntoDiagnostic, Result, TypeError};
pub use value::{Date, DateTime, Decimal, Type, Value};
