// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Sample module types and a small module built from them.

use modkit_catalog::{FieldConstraint, FieldDescriptor, Fields};
use modkit_sdk::{ModuleBuildContext, ProcedureContext, ReducerContext, ViewContext, module_enum, module_struct};
use modkit_type::{AlgebraicType, GetType, NativeType, ScheduleAt, TypeBuilder};

module_struct! {
	#[derive(Debug, Clone, PartialEq)]
	pub struct Person {
		pub id: u32,
		pub age: u8,
		pub name: String,
	}
}

module_enum! {
	pub enum Color {
		Red,
		Green,
		Blue,
	}
}

module_struct! {
	#[derive(Debug, Clone, PartialEq)]
	pub struct Player {
		pub id: u64,
		pub name: String,
		pub color: Color,
	}
}

module_struct! {
	#[derive(Debug, Clone, PartialEq)]
	pub struct Reminder {
		pub id: u64,
		pub at: ScheduleAt,
		pub text: String,
	}
}

/// A row type that contains itself; registering it is a circular reference.
pub struct Node {
	pub value: u32,
	pub next: Option<Box<Node>>,
}

impl GetType for Node {
	fn make_type(builder: &mut dyn TypeBuilder) -> AlgebraicType {
		builder.register_named("Node", NativeType::of::<Node>(), &mut |builder| {
			AlgebraicType::product([
				("value", u32::make_type(builder)),
				("next", Option::<Box<Node>>::make_type(builder)),
			])
		})
	}
}

impl Fields for Node {
	fn field_descriptors() -> Vec<FieldDescriptor> {
		vec![FieldDescriptor::of::<u32>("value"), FieldDescriptor::of::<Option<Box<Node>>>("next")]
	}
}

/// Registers the `person` table and the functions around it:
///
/// - reducer 0 `add_person(name, age)`, failing with `age must be positive` for age 0
/// - procedure 0 `name_length(name) -> u32`
/// - anonymous view 0 `oldest -> Option<Person>`
/// - sender view 0 `me -> Vec<Person>`
pub fn person_module(ctx: &mut ModuleBuildContext) {
	ctx.register_table::<Person>("person", true);
	ctx.add_field_constraint::<Person>("person", "id", FieldConstraint::PRIMARY_KEY_AUTO);

	ctx.register_reducer_with_names("add_person", &["name", "age"], |_: &ReducerContext, (_name, age): (String, u8)| {
		if age == 0 {
			return Err("age must be positive".to_string());
		}
		Ok(())
	});
	ctx.register_procedure("name_length", |_: &ProcedureContext, (name,): (String,)| Ok(name.chars().count() as u32));
	ctx.register_anonymous_view("oldest", true, |_: &ViewContext| oldest());
	ctx.register_view("me", true, |ctx: &ViewContext| match ctx.sender {
		Some(_) => vec![oldest().unwrap_or_else(nobody)],
		None => vec![],
	});
}

fn oldest() -> Option<Person> {
	Some(Person {
		id: 1,
		age: 99,
		name: "Ada".to_string(),
	})
}

fn nobody() -> Person {
	Person {
		id: 0,
		age: 0,
		name: String::new(),
	}
}

/// Registers the `reminder` table with its scheduled reducer.
pub fn reminder_module(ctx: &mut ModuleBuildContext) {
	ctx.register_table::<Reminder>("reminder", false);
	ctx.add_field_constraint::<Reminder>("reminder", "id", FieldConstraint::PRIMARY_KEY_AUTO);
	ctx.register_reducer("send_reminder", |_: &ReducerContext, (_row,): (Reminder,)| Ok(()));
	ctx.register_schedule::<Reminder>("reminder", "at", "send_reminder");
}

#[cfg(test)]
mod tests {
	use modkit_catalog::def::FunctionVisibility;
	use modkit_codec::{from_slice, to_vec};
	use modkit_type::AlgebraicTypeRef;

	use super::*;

	#[test]
	fn test_person_module() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		person_module(&mut ctx);
		assert!(ctx.finish_build().is_valid());

		let functions = ctx.functions();
		assert_eq!(functions.reducer_id("add_person"), Some(0));
		assert_eq!(functions.procedure_id("name_length"), Some(0));
		assert_eq!(functions.view_id("oldest"), Some(0));
		assert_eq!(functions.view_id("me"), Some(0));

		let def = ctx.module_def().unwrap();
		assert_eq!(def.table("person").unwrap().product_type_ref, AlgebraicTypeRef(0));
		assert_eq!(def.procedures()[0].return_type, AlgebraicType::U32);
	}

	#[test]
	fn test_reminder_module() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		reminder_module(&mut ctx);
		assert!(ctx.finish_build().is_valid());

		let def = ctx.module_def().unwrap();
		assert_eq!(def.schedules()[0].schedule_at_col, 1);
		assert_eq!(def.reducers()[0].visibility, FunctionVisibility::Private);
	}

	#[test]
	fn test_player_codec() {
		let player = Player {
			id: 3,
			name: "x".to_string(),
			color: Color::Blue,
		};
		let bytes = to_vec(&player).unwrap();
		assert_eq!(bytes, vec![3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, b'x', 2]);
		assert_eq!(from_slice::<Player>(&bytes).unwrap(), player);
	}

	#[test]
	fn test_node_is_circular() {
		let mut ctx = ModuleBuildContext::default();
		ctx.begin_build();
		ctx.register_table::<Node>("node", true);
		let report = ctx.finish_build();
		assert_eq!(report.error_type_name.as_deref(), Some("ERROR_CIRCULAR_REFERENCE_Node"));
	}
}
