// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_catalog::def::RawModuleDef;
use modkit_codec::{from_slice, to_vec};
use modkit_sdk::{BytesSource, ModuleBuildContext, ModuleConfig, ReducerContext, StatusCode, ViewContext};
use modkit_testing::{
	MemoryHost,
	fixture::{Node, Person, person_module},
};
use modkit_type::{Identity, Timestamp};

fn build(config: ModuleConfig) -> ModuleBuildContext {
	let mut ctx = ModuleBuildContext::new(config);
	ctx.begin_build();
	person_module(&mut ctx);
	assert!(ctx.finish_build().is_valid());
	ctx
}

fn caller() -> ReducerContext {
	ReducerContext::from_words([1, 2, 3, 4], [9, 0], Timestamp::from_micros(1_000))
}

fn ada() -> Person {
	Person {
		id: 1,
		age: 99,
		name: "Ada".to_string(),
	}
}

#[test]
fn test_reducer_succeeds() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new();
	let args = host.encoded_source(&("Grace".to_string(), 30u8)).unwrap();
	let errors = host.sink();

	let status = ctx.call_reducer(&mut host, 0, &caller(), args, errors);
	assert_eq!(status, StatusCode::OK);
	assert!(host.sink_bytes(errors).is_empty());
	assert_eq!(host.remaining(args), Some(0));
}

#[test]
fn test_reducer_error_goes_to_error_sink() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new().with_write_chunk(3);
	let args = host.encoded_source(&("Baby".to_string(), 0u8)).unwrap();
	let errors = host.sink();

	let status = ctx.call_reducer(&mut host, 0, &caller(), args, errors);
	assert_eq!(status, StatusCode::HOST_CALL_FAILURE);
	assert_eq!(host.sink_string(errors), "age must be positive");
}

#[test]
fn test_unknown_reducer() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new();
	let args = host.source(vec![]);
	let errors = host.sink();

	let status = ctx.call_reducer(&mut host, 5, &caller(), args, errors);
	assert_eq!(status, StatusCode::NO_SUCH_REDUCER);
	assert_eq!(host.sink_string(errors), "no reducer with id 5 (1 registered)");
}

#[test]
fn test_truncated_arguments() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new();
	// string length says 3 bytes, only one follows and the age is missing
	let args = host.source(vec![3, 0, 0, 0, b'A']);
	let errors = host.sink();

	let status = ctx.call_reducer(&mut host, 0, &caller(), args, errors);
	assert_eq!(status, StatusCode::HOST_CALL_FAILURE);
	assert!(host.sink_string(errors).starts_with("failed to decode arguments"));
}

#[test]
fn test_unknown_argument_source() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new();
	let errors = host.sink();

	let status = ctx.call_reducer(&mut host, 0, &caller(), BytesSource(42), errors);
	assert_eq!(status, StatusCode::NO_SUCH_BYTES);
}

#[test]
fn test_procedure_result() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new().with_read_chunk(2);
	let args = host.encoded_source(&("héllo".to_string(),)).unwrap();
	let result = host.sink();

	let status = ctx.call_procedure(&mut host, 0, &caller(), args, result);
	assert_eq!(status, StatusCode::OK);
	assert_eq!(host.sink_bytes(result), to_vec(&5u32).unwrap().as_slice());
}

#[test]
fn test_anonymous_view() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new();
	let result = host.sink();
	let view_ctx = ViewContext {
		sender: None,
	};

	let status = ctx.call_view(&mut host, 0, &view_ctx, BytesSource::INVALID, result);
	assert_eq!(status, StatusCode::OK);
	assert_eq!(from_slice::<Option<Person>>(host.sink_bytes(result)).unwrap(), Some(ada()));
}

#[test]
fn test_sender_view_with_header() {
	let ctx = build(ModuleConfig::builder().view_result_header(true).build());
	let mut host = MemoryHost::new();
	let result = host.sink();
	let view_ctx = ViewContext {
		sender: Some(Identity::from_words([7, 0, 0, 0])),
	};

	let status = ctx.call_view(&mut host, 0, &view_ctx, BytesSource::INVALID, result);
	assert_eq!(status, StatusCode::OK);
	let bytes = host.sink_bytes(result);
	assert_eq!(bytes[0], 0);
	assert_eq!(from_slice::<Vec<Person>>(&bytes[1..]).unwrap(), vec![ada()]);
}

#[test]
fn test_unknown_view() {
	let ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new();
	let result = host.sink();
	let view_ctx = ViewContext {
		sender: None,
	};

	let status = ctx.call_view(&mut host, 1, &view_ctx, BytesSource::INVALID, result);
	assert_eq!(status, StatusCode::NO_SUCH_REDUCER);
	assert_eq!(host.sink_string(result), "no view with id 1 (1 registered)");
}

#[test]
fn test_describe_module() {
	let mut ctx = build(ModuleConfig::default());
	let mut host = MemoryHost::new().with_write_chunk(7);
	let sink = host.sink();

	ctx.describe_module(&mut host, sink).unwrap();
	let bytes = host.sink_bytes(sink);
	assert_eq!(bytes[0], 1);
	let def = from_slice::<RawModuleDef>(&bytes[1..]).unwrap();
	assert_eq!(&def, ctx.module_def().unwrap());
	assert!(def.table("person").is_some());
	assert_eq!(def.reducers()[0].source_name, "add_person");
}

#[test]
fn test_error_document_has_no_handlers() {
	let mut ctx = ModuleBuildContext::default();
	ctx.begin_build();
	person_module(&mut ctx);
	ctx.register_table::<Node>("node", true);
	assert!(!ctx.finish_build().is_valid());
	assert!(ctx.functions().is_empty());

	let mut host = MemoryHost::new();
	let args = host.encoded_source(&("Grace".to_string(), 30u8)).unwrap();
	let errors = host.sink();
	assert_eq!(ctx.call_reducer(&mut host, 0, &caller(), args, errors), StatusCode::NO_SUCH_REDUCER);

	let sink = host.sink();
	ctx.describe_module(&mut host, sink).unwrap();
	let def = from_slice::<RawModuleDef>(&host.sink_bytes(sink)[1..]).unwrap();
	assert!(def.tables().is_empty());
	assert_eq!(def.types()[0].source_name.source_name, "ERROR_CIRCULAR_REFERENCE_Node");
}
