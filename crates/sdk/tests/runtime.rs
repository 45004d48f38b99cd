// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_catalog::def::RawModuleDef;
use modkit_codec::{from_slice, to_vec};
use modkit_sdk::{
	BuildState, FieldConstraint, Lifecycle, ModuleConfig, ReducerContext, StatusCode, ViewContext, registration, rt,
};
use modkit_testing::{
	MemoryHost,
	fixture::{Player, Reminder},
};
use modkit_type::Timestamp;

// declared out of phase order
registration!(Schedules, reminder_schedule, |ctx| {
	ctx.register_schedule::<Reminder>("reminder", "at", "send_reminder");
});

registration!(Reducers, send_reminder, |ctx| {
	ctx.register_reducer("send_reminder", |_: &ReducerContext, (_row,): (Reminder,)| Ok(()));
});

registration!(Reducers, join, |ctx| {
	ctx.register_reducer_with_names("join", &["name"], |ctx: &ReducerContext, (name,): (String,)| {
		match ctx.connection_id {
			Some(_) if !name.is_empty() => Ok(()),
			Some(_) => Err("name must not be empty".to_string()),
			None => Err("join needs a connection".to_string()),
		}
	});
	ctx.register_lifecycle_reducer("init", Lifecycle::Init, |_| Ok(()));
});

registration!(Tables, tables, |ctx| {
	ctx.register_table::<Player>("player", true);
	ctx.add_field_constraint::<Player>("player", "id", FieldConstraint::PRIMARY_KEY_AUTO);
	ctx.register_table::<Reminder>("reminder", false);
	ctx.add_field_constraint::<Reminder>("reminder", "id", FieldConstraint::PRIMARY_KEY_AUTO);
});

registration!(Reducers, player_count, |ctx| {
	ctx.register_anonymous_view("player_count", true, |_: &ViewContext| 2u64);
});

registration!(Security, visible_players, |ctx| {
	ctx.register_row_level_security("SELECT * FROM player");
});

#[test]
fn test_collected_module() {
	rt::configure(ModuleConfig::default());
	let report = rt::build_module();
	assert!(report.is_valid(), "{:?}", report.errors);
	assert_eq!(rt::module().state(), BuildState::Finished);

	let mut host = MemoryHost::new();
	let sink = host.sink();
	assert_eq!(rt::describe_module(&mut host, sink), StatusCode::OK);
	let def = from_slice::<RawModuleDef>(&host.sink_bytes(sink)[1..]).unwrap();

	let mut reducers: Vec<_> = def.reducers().iter().map(|reducer| reducer.source_name.as_str()).collect();
	reducers.sort();
	assert_eq!(reducers, vec!["init", "join", "send_reminder"]);
	assert_eq!(def.schedules()[0].function_name, "send_reminder");
	assert_eq!(def.schedules()[0].schedule_at_col, 1);
	assert_eq!(def.row_level_security()[0].sql, "SELECT * FROM player");
	assert!(def.table("player").is_some());

	let join = rt::module().functions().reducer_id("join").unwrap();
	let timestamp = Timestamp::from_micros(5);

	let args = host.encoded_source(&("ada".to_string(),)).unwrap();
	let errors = host.sink();
	assert_eq!(rt::call_reducer(&mut host, join, [1, 0, 0, 0], [3, 0], timestamp, args, errors), StatusCode::OK);

	let args = host.encoded_source(&("ada".to_string(),)).unwrap();
	let errors = host.sink();
	assert_eq!(
		rt::call_reducer(&mut host, join, [1, 0, 0, 0], [0, 0], timestamp, args, errors),
		StatusCode::HOST_CALL_FAILURE
	);
	assert_eq!(host.sink_string(errors), "join needs a connection");

	let args = host.source(vec![]);
	let result = host.sink();
	assert_eq!(rt::call_view(&mut host, 0, None, args, result), StatusCode::OK);
	assert_eq!(host.sink_bytes(result), to_vec(&2u64).unwrap().as_slice());

	let args = host.source(vec![]);
	let result = host.sink();
	assert_eq!(rt::call_procedure(&mut host, 0, [0; 4], [0; 2], timestamp, args, result), StatusCode::NO_SUCH_REDUCER);
}
