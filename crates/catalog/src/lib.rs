// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! The module catalog: the type registry, the schema builder that assembles the raw module
//! definition, and the validation pass that replaces a broken schema with the error document.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod builder;
mod constraint;
pub mod def;
mod descriptor;
mod error;
pub mod explain;
pub mod registry;
pub mod validate;

pub use builder::{
	ColumnDefaultToCreate, FieldConstraintToCreate, IndexToCreate, ModuleBuilder, ProcedureToCreate, ReducerToCreate,
	TableToCreate, ViewToCreate,
};
pub use constraint::FieldConstraint;
pub use descriptor::{FieldDescriptor, FieldRegistry, Fields, TableDescriptor};
pub use error::{SchemaError, SchemaErrors};
pub use explain::explain_module;
pub use registry::{Registrar, TypeRegistry};
pub use validate::{ErrorReporting, ValidationReport, validate};

pub type Result<T> = std::result::Result<T, modkit_type::Error>;
