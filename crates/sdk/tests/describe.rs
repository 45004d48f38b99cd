// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{error::Error, fmt::Write, path::Path};

use modkit_catalog::{
	ErrorReporting, FieldConstraint,
	def::{CaseConversionPolicy, Lifecycle},
	explain_module,
};
use modkit_sdk::{ModuleBuildContext, ModuleConfig, ReducerContext};
use modkit_testing::{
	fixture::{Node, Person, Player, Reminder},
	testscript::{self, Command},
};
use test_each_file::test_each_path;

test_each_path! { in "crates/sdk/tests/scripts/describe" as describe => run_test }

fn run_test(path: &Path) {
	testscript::run_path(&mut Runner::default(), path).expect("test failed")
}

/// Resolves a row type name to its fixture struct.
macro_rules! with_row {
	($row:expr, $ty:ident => $body:expr) => {
		match $row {
			"person" => {
				type $ty = Person;
				$body
			}
			"player" => {
				type $ty = Player;
				$body
			}
			"reminder" => {
				type $ty = Reminder;
				$body
			}
			"node" => {
				type $ty = Node;
				$body
			}
			other => return Err(format!("unknown row type {}", other).into()),
		}
	};
}

fn constraint(name: &str) -> Result<FieldConstraint, Box<dyn Error>> {
	Ok(match name {
		"indexed" => FieldConstraint::INDEXED,
		"unique" => FieldConstraint::UNIQUE,
		"identity" => FieldConstraint::IDENTITY,
		"primary_key" => FieldConstraint::PRIMARY_KEY,
		"primary_key_auto" => FieldConstraint::PRIMARY_KEY_AUTO,
		other => return Err(format!("unknown constraint {}", other).into()),
	})
}

fn lifecycle(name: &str) -> Result<Lifecycle, Box<dyn Error>> {
	Ok(match name {
		"init" => Lifecycle::Init,
		"connect" => Lifecycle::OnConnect,
		"disconnect" => Lifecycle::OnDisconnect,
		other => return Err(format!("unknown lifecycle {}", other).into()),
	})
}

/// Builds a module from script commands; every block starts a fresh build.
#[derive(Default)]
pub struct Runner {
	ctx: ModuleBuildContext,
}

impl testscript::Runner for Runner {
	fn start_block(&mut self) {
		self.ctx = ModuleBuildContext::default();
		self.ctx.begin_build();
	}

	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		let mut output = String::new();
		let ctx = &mut self.ctx;
		match command.name.as_str() {
			// table NAME ROW [access=private] [event=true]
			"table" => {
				let name = command.pos(0)?;
				let is_public = command.lookup("access") != Some("private");
				with_row!(command.pos(1)?, T => ctx.register_table::<T>(name, is_public));
				if command.lookup("event") == Some("true") {
					ctx.set_table_is_event(name, true);
				}
			}
			// constraint TABLE ROW FIELD KIND
			"constraint" => {
				let constraint = constraint(command.pos(3)?)?;
				with_row!(command.pos(1)?, T => ctx.add_field_constraint::<T>(command.pos(0)?, command.pos(2)?, constraint));
			}
			// index TABLE ROW NAME FIELD...
			"index" => {
				let fields: Vec<&str> = command.positional().skip(3).collect();
				with_row!(command.pos(1)?, T => ctx.add_index::<T>(command.pos(0)?, command.pos(2)?, &fields));
			}
			// default TABLE ROW FIELD U8
			"default" => {
				let value: u8 = command.pos(3)?.parse()?;
				with_row!(command.pos(1)?, T => ctx.add_column_default::<T, u8>(command.pos(0)?, command.pos(2)?, &value)?);
			}
			// namespace ROW NAMESPACE
			"namespace" => {
				with_row!(command.pos(0)?, T => ctx.set_type_namespace::<T>(command.pos(1)?)?);
			}
			// reducer NAME
			"reducer" => {
				ctx.register_reducer(command.pos(0)?, |_: &ReducerContext, (): ()| Ok(()));
			}
			// lifecycle KIND NAME
			"lifecycle" => {
				ctx.register_lifecycle_reducer(command.pos(1)?, lifecycle(command.pos(0)?)?, |_| Ok(()));
			}
			// schedule TABLE ROW FIELD REDUCER
			"schedule" => {
				with_row!(command.pos(1)?, T => ctx.register_schedule::<T>(command.pos(0)?, command.pos(2)?, command.pos(3)?));
			}
			// rls SQL...
			"rls" => {
				let sql: Vec<&str> = command.positional().collect();
				ctx.register_row_level_security(&sql.join(" "));
			}
			// policy none|snake|camel|pascal
			"policy" => {
				let policy = match command.pos(0)? {
					"none" => CaseConversionPolicy::None,
					"snake" => CaseConversionPolicy::SnakeCase,
					"camel" => CaseConversionPolicy::CamelCase,
					"pascal" => CaseConversionPolicy::PascalCase,
					other => return Err(format!("unknown policy {}", other).into()),
				};
				ctx.builder_mut().set_case_conversion_policy(policy);
			}
			// errors collect|precedence
			"errors" => {
				let reporting = match command.pos(0)? {
					"collect" => ErrorReporting::Collect,
					_ => ErrorReporting::Precedence,
				};
				ctx.set_config(ModuleConfig::builder().error_reporting(reporting).build());
			}
			// explain
			"explain" => {
				let report = ctx.finish_build().clone();
				match report.error_type_name {
					Some(name) => writeln!(output, "error: {}", name)?,
					None => {
						let def = ctx.module_def().ok_or("module was not built")?;
						write!(output, "{}", explain_module(def))?;
					}
				}
			}
			name => return Err(format!("unknown command {}", name).into()),
		}
		Ok(output)
	}
}
