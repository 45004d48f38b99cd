// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Host calls into registered functions.
//!
//! Arguments are read in full from the source before the handler runs. A failing handler's
//! message goes to the error sink (reducers) or the result sink (views, procedures) and the call
//! reports [`StatusCode::HOST_CALL_FAILURE`].

use modkit_abi::{AbiError, BytesSink, BytesSource, HostIo, StatusCode, consume_bytes, constants::RESULT_KIND_ROW_DATA, write_bytes};
use tracing::{debug, error, instrument, warn};

use crate::{
	ModuleBuildContext,
	function::{ProcedureContext, ReducerContext, ViewContext},
};

/// Writes `message` to `sink`, logging when the sink itself fails.
fn report(host: &mut dyn HostIo, sink: BytesSink, message: &str) {
	if let Err(err) = write_bytes(host, sink, message.as_bytes()) {
		error!(%err, "failed to write error message");
	}
}

fn read_args(host: &mut dyn HostIo, args: BytesSource) -> Result<Vec<u8>, StatusCode> {
	consume_bytes(host, args).map_err(|err| {
		error!(%err, "failed to read arguments");
		err.status()
	})
}

fn no_such_function(host: &mut dyn HostIo, sink: BytesSink, kind: &'static str, id: u32, len: usize) -> StatusCode {
	let err = AbiError::NoSuchFunction {
		kind,
		id,
		len,
	};
	warn!(%err, "call to unknown function");
	report(host, sink, &err.to_string());
	err.status()
}

impl ModuleBuildContext {
	#[instrument(name = "sdk::call::reducer", level = "debug", skip(self, host, ctx))]
	pub fn call_reducer(
		&self,
		host: &mut dyn HostIo,
		id: u32,
		ctx: &ReducerContext,
		args: BytesSource,
		error_sink: BytesSink,
	) -> StatusCode {
		let reducers = &self.functions().reducers;
		let Some((name, reducer)) = reducers.get_index(id as usize) else {
			return no_such_function(host, error_sink, "reducer", id, reducers.len());
		};
		let args = match read_args(host, args) {
			Ok(args) => args,
			Err(status) => return status,
		};

		match reducer(ctx, &args) {
			Ok(()) => StatusCode::OK,
			Err(message) => {
				debug!(reducer = %name, %message, "reducer failed");
				report(host, error_sink, &message);
				StatusCode::HOST_CALL_FAILURE
			}
		}
	}

	/// Calls view `id`; a context without sender selects the anonymous views.
	#[instrument(name = "sdk::call::view", level = "debug", skip(self, host, ctx))]
	pub fn call_view(
		&self,
		host: &mut dyn HostIo,
		id: u32,
		ctx: &ViewContext,
		args: BytesSource,
		result_sink: BytesSink,
	) -> StatusCode {
		let views = self.functions().views_of(ctx.sender.is_none());
		let Some((name, view)) = views.get_index(id as usize) else {
			return no_such_function(host, result_sink, "view", id, views.len());
		};
		let args = match read_args(host, args) {
			Ok(args) => args,
			Err(status) => return status,
		};

		match view(ctx, &args) {
			Ok(rows) => {
				let mut bytes = Vec::with_capacity(rows.len() + 1);
				if self.config().view_result_header {
					bytes.push(RESULT_KIND_ROW_DATA);
				}
				bytes.extend_from_slice(&rows);
				write_result(host, result_sink, &bytes)
			}
			Err(message) => {
				debug!(view = %name, %message, "view failed");
				report(host, result_sink, &message);
				StatusCode::HOST_CALL_FAILURE
			}
		}
	}

	#[instrument(name = "sdk::call::procedure", level = "debug", skip(self, host, ctx))]
	pub fn call_procedure(
		&self,
		host: &mut dyn HostIo,
		id: u32,
		ctx: &ProcedureContext,
		args: BytesSource,
		result_sink: BytesSink,
	) -> StatusCode {
		let procedures = &self.functions().procedures;
		let Some((name, procedure)) = procedures.get_index(id as usize) else {
			return no_such_function(host, result_sink, "procedure", id, procedures.len());
		};
		let args = match read_args(host, args) {
			Ok(args) => args,
			Err(status) => return status,
		};

		match procedure(ctx, &args) {
			Ok(bytes) => write_result(host, result_sink, &bytes),
			Err(message) => {
				debug!(procedure = %name, %message, "procedure failed");
				report(host, result_sink, &message);
				StatusCode::HOST_CALL_FAILURE
			}
		}
	}
}

fn write_result(host: &mut dyn HostIo, sink: BytesSink, bytes: &[u8]) -> StatusCode {
	match write_bytes(host, sink, bytes) {
		Ok(()) => StatusCode::OK,
		Err(err) => {
			error!(%err, "failed to write result");
			err.status()
		}
	}
}
