// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Structural type model shared by every modkit crate.
//!
//! An [`AlgebraicType`] describes the shape of a value: primitives, arrays, products (records),
//! sums (tagged unions) and references into a [`Typespace`]. Native Rust types describe themselves
//! through [`GetType`], and the [`error`] module carries the diagnostic based error type used at
//! every crate boundary.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod algebraic;
pub mod error;
pub mod native;
pub mod value;

pub use algebraic::{
	AlgebraicType, AlgebraicTypeRef, AlgebraicTypeTag, ArrayType, ProductType, ProductTypeElement, SumType,
	SumTypeVariant, Typespace,
};
pub use error::{Error, Result, diagnostic::Diagnostic};
pub use native::{
	ConnectionId, GetType, Identity, NativeType, ScheduleAt, TimeDuration, Timestamp, TypeBuilder, Uuid,
	strip_type_name,
};
pub use value::{AlgebraicValue, F32, F64, I256, U256};
