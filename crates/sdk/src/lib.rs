// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Module author SDK
//!
//! A module declares its tables, types and functions with `registration!` blocks. The host asks
//! for the schema through [`rt::describe_module`], which builds the module once, validates it and
//! writes the schema document, and calls functions through the `rt::call_*` entry points.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod context;
mod dispatch;
pub mod function;
pub mod logging;
mod macros;
pub mod registration;
pub mod rt;

pub use config::{ModuleConfig, ModuleConfigBuilder};
pub use context::{BuildState, ModuleBuildContext};
pub use function::{FunctionArgs, FunctionTable, ProcedureContext, ReducerContext, ViewContext};
pub use logging::{LogFormat, LoggingBuilder, LoggingConfig};
pub use modkit_abi::{BytesSink, BytesSource, HostIo, StatusCode};
pub use modkit_catalog::{ErrorReporting, FieldConstraint, ValidationReport, def::Lifecycle, explain_module};
pub use registration::{Phase, Registration, RegistrationPlan};

#[doc(hidden)]
pub mod __private {
	pub use inventory;
	pub use modkit_catalog::{FieldDescriptor, Fields};
	pub use modkit_codec::{Decode, DecodeError, Encode, EncodeError, Reader, Writer, impl_product_codec};
	pub use modkit_type::{AlgebraicType, GetType, NativeType, TypeBuilder};
	pub use paste;
}
