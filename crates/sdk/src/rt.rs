// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! The process wide module the host entry points operate on.
//!
//! The first describe call builds the module from every collected registration. Later calls only
//! read the finished build.

use modkit_abi::{BytesSink, BytesSource, HostIo, StatusCode};
use modkit_catalog::ValidationReport;
use modkit_type::Timestamp;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use tracing::error;

use crate::{
	BuildState, ModuleBuildContext, ModuleConfig, RegistrationPlan,
	function::{ReducerContext, ViewContext},
};

static MODULE: Lazy<Mutex<ModuleBuildContext>> = Lazy::new(|| Mutex::new(ModuleBuildContext::default()));

pub fn module() -> MutexGuard<'static, ModuleBuildContext> {
	MODULE.lock()
}

/// Replaces the configuration; takes effect with the next build.
pub fn configure(config: ModuleConfig) {
	module().set_config(config);
}

/// Installs the configured logging subscriber.
pub fn init_logging() -> bool {
	let logging = module().config().logging_builder();
	logging.init()
}

/// Builds the module from all collected registrations, replacing an earlier build.
pub fn build_module() -> ValidationReport {
	let plan = RegistrationPlan::collected();
	module().build(&plan).clone()
}

fn ensure_built(ctx: &mut ModuleBuildContext) {
	if ctx.state() != BuildState::Finished {
		ctx.build(&RegistrationPlan::collected());
	}
}

/// Writes the schema document to `sink`.
pub fn describe_module(host: &mut dyn HostIo, sink: BytesSink) -> StatusCode {
	let mut ctx = module();
	ensure_built(&mut ctx);
	match ctx.describe_module(host, sink) {
		Ok(()) => StatusCode::OK,
		Err(err) => {
			error!(code = %err.code, "{}", err.message);
			StatusCode::HOST_CALL_FAILURE
		}
	}
}

pub fn call_reducer(
	host: &mut dyn HostIo,
	id: u32,
	sender: [u64; 4],
	connection_id: [u64; 2],
	timestamp: Timestamp,
	args: BytesSource,
	error_sink: BytesSink,
) -> StatusCode {
	let mut ctx = module();
	ensure_built(&mut ctx);
	let reducer_ctx = ReducerContext::from_words(sender, connection_id, timestamp);
	ctx.call_reducer(host, id, &reducer_ctx, args, error_sink)
}

/// `sender` is `None` for anonymous views.
pub fn call_view(
	host: &mut dyn HostIo,
	id: u32,
	sender: Option<[u64; 4]>,
	args: BytesSource,
	result_sink: BytesSink,
) -> StatusCode {
	let mut ctx = module();
	ensure_built(&mut ctx);
	let view_ctx = ViewContext {
		sender: sender.map(modkit_type::Identity::from_words),
	};
	ctx.call_view(host, id, &view_ctx, args, result_sink)
}

pub fn call_procedure(
	host: &mut dyn HostIo,
	id: u32,
	sender: [u64; 4],
	connection_id: [u64; 2],
	timestamp: Timestamp,
	args: BytesSource,
	result_sink: BytesSink,
) -> StatusCode {
	let mut ctx = module();
	ensure_built(&mut ctx);
	let procedure_ctx = ReducerContext::from_words(sender, connection_id, timestamp);
	ctx.call_procedure(host, id, &procedure_ctx, args, result_sink)
}
