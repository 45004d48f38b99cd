// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_type::error::diagnostic::abi;

use crate::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
	#[error("reading bytes source {handle} failed with status {status}")]
	SourceRead {
		handle: u32,
		status: i16,
	},

	#[error("writing bytes sink {handle} failed with status {status}")]
	SinkWrite {
		handle: u32,
		status: u16,
	},

	#[error("no bytes source or sink with handle {handle}")]
	InvalidHandle {
		handle: u32,
	},

	#[error("no {kind} with id {id} ({len} registered)")]
	NoSuchFunction {
		kind: &'static str,
		id: u32,
		len: usize,
	},
}

impl AbiError {
	/// Status code a module reports to the host for this error.
	pub fn status(&self) -> StatusCode {
		match self {
			AbiError::SourceRead {
				..
			}
			| AbiError::SinkWrite {
				..
			} => StatusCode::HOST_CALL_FAILURE,
			AbiError::InvalidHandle {
				..
			} => StatusCode::NO_SUCH_BYTES,
			AbiError::NoSuchFunction {
				..
			} => StatusCode::NO_SUCH_REDUCER,
		}
	}
}

impl From<AbiError> for modkit_type::Error {
	fn from(err: AbiError) -> Self {
		modkit_type::error!(match err {
			AbiError::SourceRead {
				handle,
				status,
			} => abi::source_read_failed(handle, status),
			AbiError::SinkWrite {
				handle,
				status,
			} => abi::sink_write_failed(handle, status),
			AbiError::InvalidHandle {
				handle,
			} => abi::invalid_handle(handle),
			AbiError::NoSuchFunction {
				kind,
				id,
				len,
			} => abi::no_such_function(kind, id, len),
		})
	}
}
