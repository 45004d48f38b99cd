// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_type::{AlgebraicType, ProductType, ProductTypeElement};
use tracing::{debug, instrument};

use super::{ModuleBuilder, upsert};
use crate::def::{
	FunctionVisibility, Lifecycle, RawLifeCycleReducerDef, RawProcedureDef, RawReducerDef, RawRowLevelSecurityDef,
	RawScheduleDef, RawViewDef,
};

pub struct ReducerToCreate {
	pub name: String,
	/// Parameters after the context; unnamed ones are called `arg{position}`.
	pub params: Vec<ProductTypeElement>,
}

pub struct ProcedureToCreate {
	pub name: String,
	pub params: Vec<ProductTypeElement>,
	pub return_type: AlgebraicType,
}

pub struct ViewToCreate {
	pub name: String,
	/// Position of the view's handler among views of the same kind.
	pub index: u32,
	pub is_public: bool,
	pub is_anonymous: bool,
	pub return_type: AlgebraicType,
}

impl ModuleBuilder {
	#[instrument(name = "catalog::reducer::register", level = "trace", skip(self, to_create), fields(reducer = %to_create.name))]
	pub fn register_reducer(&mut self, to_create: ReducerToCreate) {
		if self.skipped("reducer", &to_create.name) {
			return;
		}
		let params = self.register_params(to_create.params);
		let reducer = RawReducerDef {
			source_name: to_create.name.clone(),
			params,
			visibility: FunctionVisibility::ClientCallable,
			ok_return_type: AlgebraicType::unit(),
			err_return_type: AlgebraicType::String,
		};
		upsert(&mut self.reducers, reducer, "reducer", &to_create.name, |existing| {
			existing.source_name == to_create.name
		});
		debug!(reducer = %to_create.name, "registered reducer");
	}

	/// Registers a reducer the host calls on `lifecycle`; it takes no arguments and is private.
	#[instrument(name = "catalog::reducer::lifecycle", level = "trace", skip(self))]
	pub fn register_lifecycle_reducer(&mut self, name: &str, lifecycle: Lifecycle) {
		if self.skipped("lifecycle reducer", name) {
			return;
		}
		let reducer = RawReducerDef {
			source_name: name.to_string(),
			params: ProductType::unit(),
			visibility: FunctionVisibility::Private,
			ok_return_type: AlgebraicType::unit(),
			err_return_type: AlgebraicType::String,
		};
		upsert(&mut self.reducers, reducer, "reducer", name, |existing| existing.source_name == name);
		upsert(
			&mut self.lifecycle_reducers,
			RawLifeCycleReducerDef {
				lifecycle_spec: lifecycle,
				function_name: name.to_string(),
			},
			"lifecycle reducer",
			name,
			|existing| existing.lifecycle_spec == lifecycle,
		);
	}

	#[instrument(name = "catalog::view::register", level = "trace", skip(self, to_create), fields(view = %to_create.name))]
	pub fn register_view(&mut self, to_create: ViewToCreate) {
		if self.skipped("view", &to_create.name) {
			return;
		}
		let return_type = self.register_return_type(to_create.return_type);
		let view = RawViewDef {
			source_name: to_create.name.clone(),
			index: to_create.index,
			is_public: to_create.is_public,
			is_anonymous: to_create.is_anonymous,
			params: ProductType::unit(),
			return_type,
		};
		upsert(&mut self.views, view, "view", &to_create.name, |existing| existing.source_name == to_create.name);
	}

	#[instrument(name = "catalog::procedure::register", level = "trace", skip(self, to_create), fields(procedure = %to_create.name))]
	pub fn register_procedure(&mut self, to_create: ProcedureToCreate) {
		if self.skipped("procedure", &to_create.name) {
			return;
		}
		let return_type = self.register_return_type(to_create.return_type);
		let params = self.register_params(to_create.params);
		let procedure = RawProcedureDef {
			source_name: to_create.name.clone(),
			params,
			return_type,
			visibility: FunctionVisibility::ClientCallable,
		};
		upsert(&mut self.procedures, procedure, "procedure", &to_create.name, |existing| {
			existing.source_name == to_create.name
		});
	}

	/// Schedules `reducer` on the rows of `table`; a table has at most one schedule.
	#[instrument(name = "catalog::schedule::register", level = "trace", skip(self))]
	pub fn register_schedule(&mut self, table: &str, schedule_at_col: u16, reducer: &str) {
		if self.skipped("schedule", table) {
			return;
		}
		let schedule = RawScheduleDef {
			source_name: Some(format!("{}_sched", table)),
			table_name: table.to_string(),
			schedule_at_col,
			function_name: reducer.to_string(),
		};
		upsert(&mut self.schedules, schedule, "schedule", table, |existing| existing.table_name == table);
	}

	pub fn register_row_level_security(&mut self, sql: &str) {
		self.row_level_security.push(RawRowLevelSecurityDef {
			sql: sql.to_string(),
		});
	}
}
