// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_abi::{BytesSink, HostIo, write_bytes};
use modkit_catalog::{
	ColumnDefaultToCreate, FieldConstraint, FieldConstraintToCreate, Fields, IndexToCreate, ModuleBuilder,
	ProcedureToCreate, ReducerToCreate, TableToCreate, ValidationReport, ViewToCreate,
	def::{Lifecycle, RawModuleDef},
	validate,
};
use modkit_codec::{Encode, Writer, to_vec};
use modkit_type::{AlgebraicType, GetType, NativeType, ProductTypeElement, Result, error::diagnostic::schema};
use tracing::{debug, info, instrument, warn};

use crate::{
	ModuleConfig, RegistrationPlan,
	function::{FunctionArgs, FunctionTable, ProcedureContext, ProcedureFn, ReducerContext, ReducerFn, ViewContext, ViewFn},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildState {
	#[default]
	Idle,
	Building,
	Finished,
}

/// State of one module build: the schema builder, the callable handlers and the outcome of
/// validation.
///
/// A build runs `begin_build`, the registrations, then `finish_build`. After that the context is
/// read only: it describes the module and dispatches calls.
#[derive(Debug, Default)]
pub struct ModuleBuildContext {
	config: ModuleConfig,
	builder: ModuleBuilder,
	functions: FunctionTable,
	state: BuildState,
	report: Option<ValidationReport>,
	document: Option<RawModuleDef>,
}

impl ModuleBuildContext {
	pub fn new(config: ModuleConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	pub fn config(&self) -> &ModuleConfig {
		&self.config
	}

	/// Takes effect with the next `begin_build`.
	pub fn set_config(&mut self, config: ModuleConfig) {
		self.config = config;
	}

	pub fn state(&self) -> BuildState {
		self.state
	}

	pub fn builder(&self) -> &ModuleBuilder {
		&self.builder
	}

	pub fn builder_mut(&mut self) -> &mut ModuleBuilder {
		&mut self.builder
	}

	pub fn functions(&self) -> &FunctionTable {
		&self.functions
	}

	pub fn report(&self) -> Option<&ValidationReport> {
		self.report.as_ref()
	}

	pub fn module_def(&self) -> Option<&RawModuleDef> {
		self.document.as_ref()
	}

	/// Starts a fresh build, dropping everything registered before.
	#[instrument(name = "sdk::build::begin", level = "debug", skip(self))]
	pub fn begin_build(&mut self) {
		self.builder.clear();
		self.functions.clear();
		self.report = None;
		self.document = None;
		if let Some(policy) = self.config.case_conversion_policy {
			self.builder.set_case_conversion_policy(policy);
		}
		self.state = BuildState::Building;
	}

	/// Validates the registrations and freezes the document.
	///
	/// When validation replaced the schema with the error document the handlers are dropped too.
	#[instrument(name = "sdk::build::finish", level = "debug", skip(self))]
	pub fn finish_build(&mut self) -> &ValidationReport {
		let report = validate(&mut self.builder, self.config.error_reporting);
		if report.is_valid() {
			info!(
				types = self.builder.registry().types().len(),
				tables = self.builder.tables().len(),
				functions = self.functions.len(),
				"module built"
			);
		} else {
			self.functions.clear();
		}
		self.document = Some(self.builder.build_module_def());
		self.state = BuildState::Finished;
		self.report.insert(report)
	}

	/// Runs a full build over the given registrations.
	pub fn build(&mut self, plan: &RegistrationPlan<'_>) -> &ValidationReport {
		self.begin_build();
		plan.run(self);
		self.finish_build()
	}

	/// The schema document: the configured version byte followed by the BSATN encoded definition.
	///
	/// Finishes the build first if it is still open.
	pub fn describe(&mut self) -> Result<Vec<u8>> {
		if self.document.is_none() {
			self.finish_build();
		}
		let mut w = Writer::new();
		w.write_u8(self.config.version);
		if let Some(def) = &self.document {
			def.encode(&mut w)?;
		}
		Ok(w.into_inner())
	}

	#[instrument(name = "sdk::describe_module", level = "debug", skip(self, host))]
	pub fn describe_module(&mut self, host: &mut dyn HostIo, sink: BytesSink) -> Result<()> {
		let bytes = self.describe()?;
		write_bytes(host, sink, &bytes)?;
		debug!(len = bytes.len(), "described module");
		Ok(())
	}

	/// Interns the type of `T` and returns its inline form or `Ref`.
	pub fn register_type<T: GetType>(&mut self) -> AlgebraicType {
		T::make_type(&mut self.builder.registrar())
	}

	/// Places the named type of `T` in `namespace`, e.g. `Game.Combat` gives `Game.Combat.EventType`.
	pub fn set_type_namespace<T: GetType>(&mut self, namespace: &str) -> Result<()> {
		let Some(index) = self.register_type::<T>().as_type_ref() else {
			warn!(namespace, "type has no definition to place in a namespace");
			return Ok(());
		};
		let registry = self.builder.registry_mut();
		let Some(name) = registry.types().iter().find(|def| def.ty == index).map(|def| def.source_name.source_name.clone())
		else {
			return Ok(());
		};
		registry.rename_type(index, &format!("{}.{}", namespace, name))
	}

	pub fn register_table<T: Fields>(&mut self, name: &str, is_public: bool) {
		self.builder.fields_mut().register_fields::<T>();
		self.builder.register_table(TableToCreate {
			name: name.to_string(),
			native: NativeType::of::<T>(),
			is_public,
			is_event: false,
		});
	}

	pub fn set_table_is_event(&mut self, table: &str, is_event: bool) {
		self.builder.set_table_is_event(table, is_event);
	}

	pub fn add_field_constraint<T: Fields>(&mut self, table: &str, field: &str, constraint: FieldConstraint) {
		self.builder.add_field_constraint(FieldConstraintToCreate {
			table: table.to_string(),
			native: NativeType::of::<T>(),
			field: field.to_string(),
			constraint,
		});
	}

	pub fn add_index<T: Fields>(&mut self, table: &str, index_name: &str, fields: &[&str]) {
		self.builder.add_multi_column_index(IndexToCreate {
			table: table.to_string(),
			native: NativeType::of::<T>(),
			index_name: index_name.to_string(),
			fields: fields.iter().map(|field| field.to_string()).collect(),
		});
	}

	/// Encodes `value` as the default of `field`. Only encoding fails here; schema problems are
	/// recorded for validation.
	pub fn add_column_default<T: Fields, V: Encode>(&mut self, table: &str, field: &str, value: &V) -> Result<()> {
		let value = to_vec(value)?;
		self.builder.add_column_default(ColumnDefaultToCreate {
			table: table.to_string(),
			native: NativeType::of::<T>(),
			field: field.to_string(),
			value,
		});
		Ok(())
	}

	pub fn register_reducer<A, F>(&mut self, name: &str, handler: F)
	where
		A: FunctionArgs + 'static,
		F: Fn(&ReducerContext, A) -> std::result::Result<(), String> + Send + Sync + 'static,
	{
		self.register_reducer_with_names(name, &[], handler);
	}

	/// Like `register_reducer`, naming the parameters in order; parameters past `names` are
	/// named by position.
	pub fn register_reducer_with_names<A, F>(&mut self, name: &str, names: &[&str], handler: F)
	where
		A: FunctionArgs + 'static,
		F: Fn(&ReducerContext, A) -> std::result::Result<(), String> + Send + Sync + 'static,
	{
		let params = self.params::<A>(names);
		self.builder.register_reducer(ReducerToCreate {
			name: name.to_string(),
			params,
		});
		let reducer: ReducerFn = Box::new(move |ctx, bytes| handler(ctx, A::decode_args(bytes)?));
		self.functions.reducers.insert(name.to_string(), reducer);
	}

	pub fn register_lifecycle_reducer<F>(&mut self, name: &str, lifecycle: Lifecycle, handler: F)
	where
		F: Fn(&ReducerContext) -> std::result::Result<(), String> + Send + Sync + 'static,
	{
		self.builder.register_lifecycle_reducer(name, lifecycle);
		let reducer: ReducerFn = Box::new(move |ctx, bytes| {
			<()>::decode_args(bytes)?;
			handler(ctx)
		});
		self.functions.reducers.insert(name.to_string(), reducer);
	}

	/// Schedules `reducer` on the rows of `table`, reading the time from `field`.
	pub fn register_schedule<T: Fields>(&mut self, table: &str, field: &str, reducer: &str) {
		match T::table_descriptor().position(field) {
			Some(column) => self.builder.register_schedule(table, column, reducer),
			None => self.builder.errors_mut().record(schema::field_not_found(table, field)),
		}
	}

	pub fn register_view<R, F>(&mut self, name: &str, is_public: bool, handler: F)
	where
		R: GetType + Encode + 'static,
		F: Fn(&ViewContext) -> R + Send + Sync + 'static,
	{
		self.add_view(name, is_public, false, handler);
	}

	/// A view whose result does not depend on the caller.
	pub fn register_anonymous_view<R, F>(&mut self, name: &str, is_public: bool, handler: F)
	where
		R: GetType + Encode + 'static,
		F: Fn(&ViewContext) -> R + Send + Sync + 'static,
	{
		self.add_view(name, is_public, true, handler);
	}

	fn add_view<R, F>(&mut self, name: &str, is_public: bool, is_anonymous: bool, handler: F)
	where
		R: GetType + Encode + 'static,
		F: Fn(&ViewContext) -> R + Send + Sync + 'static,
	{
		let index = self.functions.view_index(name, is_anonymous);
		let return_type = self.register_type::<R>();
		self.builder.register_view(ViewToCreate {
			name: name.to_string(),
			index,
			is_public,
			is_anonymous,
			return_type,
		});
		let view: ViewFn = Box::new(move |ctx, bytes| {
			<()>::decode_args(bytes)?;
			to_vec(&handler(ctx)).map_err(|err| err.to_string())
		});
		if is_anonymous {
			self.functions.anonymous_views.insert(name.to_string(), view);
		} else {
			self.functions.views.insert(name.to_string(), view);
		}
	}

	pub fn register_procedure<A, R, F>(&mut self, name: &str, handler: F)
	where
		A: FunctionArgs + 'static,
		R: GetType + Encode + 'static,
		F: Fn(&ProcedureContext, A) -> std::result::Result<R, String> + Send + Sync + 'static,
	{
		let params = self.params::<A>(&[]);
		let return_type = self.register_type::<R>();
		self.builder.register_procedure(ProcedureToCreate {
			name: name.to_string(),
			params,
			return_type,
		});
		let procedure: ProcedureFn = Box::new(move |ctx, bytes| {
			let result = handler(ctx, A::decode_args(bytes)?)?;
			to_vec(&result).map_err(|err| err.to_string())
		});
		self.functions.procedures.insert(name.to_string(), procedure);
	}

	pub fn register_row_level_security(&mut self, sql: &str) {
		self.builder.register_row_level_security(sql);
	}

	pub fn register_explicit_table_name(&mut self, source_name: &str, canonical_name: &str) {
		self.builder.register_explicit_table_name(source_name, canonical_name);
	}

	pub fn register_explicit_function_name(&mut self, source_name: &str, canonical_name: &str) {
		self.builder.register_explicit_function_name(source_name, canonical_name);
	}

	pub fn register_explicit_index_name(&mut self, source_name: &str, canonical_name: &str) {
		self.builder.register_explicit_index_name(source_name, canonical_name);
	}

	fn params<A: FunctionArgs>(&mut self, names: &[&str]) -> Vec<ProductTypeElement> {
		let mut params = A::params(&mut self.builder.registrar());
		for (param, name) in params.iter_mut().zip(names) {
			param.name = Some(name.to_string());
		}
		params
	}
}

#[cfg(test)]
mod tests {
	use modkit_catalog::{ErrorReporting, def::FunctionVisibility};
	use modkit_codec::from_slice;
	use modkit_type::AlgebraicTypeRef;

	use super::*;
	use crate::module_struct;

	module_struct! {
		#[derive(Debug, Clone, PartialEq)]
		pub struct Player {
			pub id: u64,
			pub name: String,
			pub score: i32,
		}
	}

	module_struct! {
		pub struct Spawn {
			pub id: u64,
			pub at: modkit_type::ScheduleAt,
		}
	}

	fn player_module(ctx: &mut ModuleBuildContext) {
		ctx.register_table::<Player>("player", true);
		ctx.add_field_constraint::<Player>("player", "id", FieldConstraint::PRIMARY_KEY_AUTO);
		ctx.register_reducer_with_names("rename", &["id", "name"], |_: &ReducerContext, (_id, _name): (u64, String)| {
			Ok(())
		});
	}

	#[test]
	fn test_build_cycle() {
		let mut ctx = ModuleBuildContext::default();
		assert_eq!(ctx.state(), BuildState::Idle);
		ctx.begin_build();
		player_module(&mut ctx);
		assert_eq!(ctx.state(), BuildState::Building);
		assert!(ctx.finish_build().is_valid());
		assert_eq!(ctx.state(), BuildState::Finished);

		let def = ctx.module_def().unwrap();
		let table = def.table("player").unwrap();
		assert_eq!(table.primary_key, vec![0]);
		assert_eq!(table.sequences.len(), 1);
		let params = &def.reducers()[0].params.elements;
		assert_eq!(params[0].name(), Some("id"));
		assert_eq!(params[1].name(), Some("name"));
		assert_eq!(ctx.functions().reducer_id("rename"), Some(0));
	}

	#[test]
	fn test_begin_build_resets() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		player_module(&mut ctx);
		ctx.finish_build();

		ctx.begin_build();
		assert!(ctx.builder().tables().is_empty());
		assert!(ctx.functions().is_empty());
		assert!(ctx.module_def().is_none());
	}

	#[test]
	fn test_describe_uses_configured_version() {
		let mut ctx = ModuleBuildContext::new(ModuleConfig::builder().version(7).build());
		ctx.begin_build();
		player_module(&mut ctx);
		let bytes = ctx.describe().unwrap();
		assert_eq!(bytes[0], 7);
		let def = from_slice::<RawModuleDef>(&bytes[1..]).unwrap();
		assert_eq!(def.tables().len(), 1);
		assert_eq!(ctx.state(), BuildState::Finished);
	}

	#[test]
	fn test_case_policy_from_config() {
		let config =
			ModuleConfig::builder().case_conversion_policy(modkit_catalog::def::CaseConversionPolicy::None).build();
		let mut ctx = ModuleBuildContext::new(config);
		ctx.begin_build();
		ctx.finish_build();
		assert_eq!(
			ctx.module_def().unwrap().case_conversion_policy(),
			Some(modkit_catalog::def::CaseConversionPolicy::None)
		);
	}

	#[test]
	fn test_type_namespace() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		let ty = ctx.register_type::<Player>();
		assert_eq!(ty, AlgebraicType::Ref(AlgebraicTypeRef(0)));
		ctx.set_type_namespace::<Player>("Game.Lobby").unwrap();

		let def = &ctx.builder().registry().types()[0];
		assert_eq!(def.source_name.scope, vec!["Game".to_string(), "Lobby".to_string()]);
		assert_eq!(def.source_name.source_name, "Player");
		assert_eq!(ctx.builder().registry().lookup("Game.Lobby.Player"), Some(AlgebraicTypeRef(0)));

		ctx.register_table::<Player>("player", true);
		assert_eq!(ctx.builder().table("player").unwrap().product_type_ref, AlgebraicTypeRef(0));

		// primitives have no definition to move
		ctx.set_type_namespace::<u32>("Game").unwrap();
		assert_eq!(ctx.builder().registry().types().len(), 1);
	}

	#[test]
	fn test_schedule_resolves_column() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		ctx.register_table::<Spawn>("spawn", false);
		ctx.register_reducer("spawn_tick", |_: &ReducerContext, (_row,): (Spawn,)| Ok(()));
		ctx.register_schedule::<Spawn>("spawn", "at", "spawn_tick");
		ctx.finish_build();

		let def = ctx.module_def().unwrap();
		assert_eq!(def.schedules()[0].schedule_at_col, 1);
		assert_eq!(def.reducers()[0].visibility, FunctionVisibility::Private);
	}

	#[test]
	fn test_schedule_unknown_field() {
		let mut ctx = ModuleBuildContext::new(ModuleConfig::builder().error_reporting(ErrorReporting::Collect).build());
		ctx.begin_build();
		ctx.register_table::<Spawn>("spawn", false);
		ctx.register_schedule::<Spawn>("spawn", "when", "spawn_tick");
		let report = ctx.finish_build();
		assert_eq!(report.error_type_name.as_deref(), Some("ERROR_CONSTRAINT_REGISTRATION_FIELD_NOT_FOUND"));
	}

	#[test]
	fn test_views_indexed_per_kind() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		ctx.register_view("mine", true, |_: &ViewContext| vec![1u32]);
		ctx.register_anonymous_view("all", true, |_: &ViewContext| vec![1u32, 2]);
		ctx.register_anonymous_view("top", false, |_: &ViewContext| Some(3u32));
		ctx.finish_build();

		let views = ctx.module_def().unwrap().views();
		let indexes: Vec<_> = views.iter().map(|view| (view.source_name.as_str(), view.index)).collect();
		assert_eq!(indexes, vec![("mine", 0), ("all", 0), ("top", 1)]);
		assert_eq!(views[2].return_type, AlgebraicType::option(AlgebraicType::U32));
	}

	#[test]
	fn test_column_default_encodes_value() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		ctx.register_table::<Player>("player", true);
		ctx.add_column_default::<Player, i32>("player", "score", &10).unwrap();
		ctx.finish_build();

		let table = ctx.module_def().unwrap().table("player").unwrap();
		assert_eq!(table.default_values[0].col_id, 2);
		assert_eq!(table.default_values[0].value, vec![10, 0, 0, 0]);
	}
}
