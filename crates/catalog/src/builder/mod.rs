// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Assembles the raw module definition from individual registrations.
//!
//! Registrations never fail: problems are recorded in the builder's [`SchemaErrors`] and resolved
//! by [`crate::validate`] once the module finished describing itself.

mod function;
mod names;
mod table;

use std::collections::{HashMap, HashSet};

pub use function::{ProcedureToCreate, ReducerToCreate, ViewToCreate};
use modkit_type::{AlgebraicType, ProductType, ProductTypeElement, TypeBuilder, Typespace};
pub use table::{ColumnDefaultToCreate, FieldConstraintToCreate, IndexToCreate, TableToCreate};
use tracing::{error, instrument, warn};

use crate::{
	FieldRegistry, SchemaErrors, TypeRegistry,
	def::{
		CaseConversionPolicy, ExplicitNames, FunctionVisibility, RawColumnDefaultValue, RawLifeCycleReducerDef,
		RawModuleDef, RawModuleDefSection, RawProcedureDef, RawReducerDef, RawRowLevelSecurityDef, RawScheduleDef,
		RawTableDef, RawViewDef,
	},
	registry::Registrar,
};

#[derive(Debug, Default)]
pub struct ModuleBuilder {
	registry: TypeRegistry,
	errors: SchemaErrors,
	fields: FieldRegistry,
	tables: Vec<RawTableDef>,
	reducers: Vec<RawReducerDef>,
	procedures: Vec<RawProcedureDef>,
	views: Vec<RawViewDef>,
	schedules: Vec<RawScheduleDef>,
	lifecycle_reducers: Vec<RawLifeCycleReducerDef>,
	row_level_security: Vec<RawRowLevelSecurityDef>,
	case_conversion_policy: Option<CaseConversionPolicy>,
	explicit_names: ExplicitNames,
	column_defaults: HashMap<String, Vec<RawColumnDefaultValue>>,
}

impl ModuleBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Forgets everything registered so far, including errors.
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn registrar(&mut self) -> Registrar<'_> {
		self.registry.scope(&mut self.errors)
	}

	pub fn registry(&self) -> &TypeRegistry {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut TypeRegistry {
		&mut self.registry
	}

	pub fn fields_mut(&mut self) -> &mut FieldRegistry {
		&mut self.fields
	}

	pub fn errors(&self) -> &SchemaErrors {
		&self.errors
	}

	pub fn errors_mut(&mut self) -> &mut SchemaErrors {
		&mut self.errors
	}

	pub fn typespace(&self) -> &Typespace {
		self.registry.typespace()
	}

	pub fn tables(&self) -> &[RawTableDef] {
		&self.tables
	}

	pub fn reducers(&self) -> &[RawReducerDef] {
		&self.reducers
	}

	pub fn table(&self, name: &str) -> Option<&RawTableDef> {
		self.tables.iter().find(|table| table.source_name == name)
	}

	/// Discards every definition, keeping only the recorded errors.
	pub(crate) fn discard_definitions(&mut self) {
		let errors = std::mem::take(&mut self.errors);
		self.clear();
		self.errors = errors;
	}

	/// Assembles the document. The typespace is always present, every other section only when it
	/// has content.
	#[instrument(name = "catalog::builder::build_module_def", level = "trace", skip(self))]
	pub fn build_module_def(&self) -> RawModuleDef {
		let internal: HashSet<&str> = self
			.schedules
			.iter()
			.map(|schedule| schedule.function_name.as_str())
			.chain(self.lifecycle_reducers.iter().map(|lifecycle| lifecycle.function_name.as_str()))
			.collect();

		let reducers: Vec<RawReducerDef> = self
			.reducers
			.iter()
			.cloned()
			.map(|mut reducer| {
				if internal.contains(reducer.source_name.as_str()) {
					reducer.visibility = FunctionVisibility::Private;
				}
				reducer
			})
			.collect();

		let procedures: Vec<RawProcedureDef> = self
			.procedures
			.iter()
			.cloned()
			.map(|mut procedure| {
				if internal.contains(procedure.source_name.as_str()) {
					procedure.visibility = FunctionVisibility::Private;
				}
				procedure
			})
			.collect();

		let mut sections = vec![RawModuleDefSection::Typespace(self.registry.typespace().clone())];
		let types = self.registry.types();
		if !types.is_empty() {
			sections.push(RawModuleDefSection::Types(types.to_vec()));
		}
		if !self.tables.is_empty() {
			sections.push(RawModuleDefSection::Tables(self.tables.clone()));
		}
		if !reducers.is_empty() {
			sections.push(RawModuleDefSection::Reducers(reducers));
		}
		if !procedures.is_empty() {
			sections.push(RawModuleDefSection::Procedures(procedures));
		}
		if !self.views.is_empty() {
			sections.push(RawModuleDefSection::Views(self.views.clone()));
		}
		if !self.schedules.is_empty() {
			sections.push(RawModuleDefSection::Schedules(self.schedules.clone()));
		}
		if !self.lifecycle_reducers.is_empty() {
			sections.push(RawModuleDefSection::LifeCycleReducers(self.lifecycle_reducers.clone()));
		}
		if !self.row_level_security.is_empty() {
			sections.push(RawModuleDefSection::RowLevelSecurity(self.row_level_security.clone()));
		}
		if let Some(policy) = self.case_conversion_policy {
			sections.push(RawModuleDefSection::CaseConversionPolicy(policy));
		}
		if !self.explicit_names.is_empty() {
			sections.push(RawModuleDefSection::ExplicitNames(self.explicit_names.clone()));
		}

		RawModuleDef {
			sections,
		}
	}

	/// Logs and reports whether registrations are frozen by an earlier circular reference.
	fn skipped(&self, kind: &str, name: &str) -> bool {
		if self.errors.has_circular_reference() {
			error!(kind, name, "skipping registration because a circular reference was found");
			return true;
		}
		false
	}

	/// Registers each parameter type, naming unnamed parameters by position.
	fn register_params(&mut self, params: Vec<ProductTypeElement>) -> ProductType {
		let mut registrar = self.registrar();
		params.into_iter()
			.enumerate()
			.map(|(position, element)| {
				let name = element.name.unwrap_or_else(|| format!("arg{}", position));
				ProductTypeElement::named(name, registrar.register_type(element.algebraic_type, None, None))
			})
			.collect()
	}

	fn register_return_type(&mut self, ty: AlgebraicType) -> AlgebraicType {
		self.registrar().register_type(ty, None, None)
	}
}

/// Replaces the entry matching `same` or appends `item`.
fn upsert<T>(items: &mut Vec<T>, item: T, kind: &str, name: &str, same: impl Fn(&T) -> bool) {
	match items.iter_mut().find(|existing| same(existing)) {
		Some(existing) => {
			warn!(kind, name, "replacing earlier registration");
			*existing = item;
		}
		None => items.push(item),
	}
}
