// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::{instrument, trace};

use crate::{
	AbiError, BytesSink, BytesSource, HostIo, StatusCode,
	constants::{READ_CHUNK_SIZE, READ_EXHAUSTED, READ_OK},
};

/// Reads a source until the host reports it exhausted.
///
/// An invalid handle reads as empty.
#[instrument(name = "abi::consume_bytes", level = "trace", skip(host))]
pub fn consume_bytes(host: &mut dyn HostIo, source: BytesSource) -> Result<Vec<u8>, AbiError> {
	if source.is_invalid() {
		return Ok(vec![]);
	}

	let mut remaining = 0u32;
	match host.bytes_source_remaining_length(source, &mut remaining) {
		READ_OK => {}
		status if status as u16 == StatusCode::NO_SUCH_BYTES.0 => {
			return Err(AbiError::InvalidHandle {
				handle: source.0,
			});
		}
		status => {
			return Err(AbiError::SourceRead {
				handle: source.0,
				status,
			});
		}
	}

	let mut buffer = Vec::with_capacity(remaining as usize);
	loop {
		let filled = buffer.len();
		buffer.resize(filled + READ_CHUNK_SIZE, 0);

		let mut len = READ_CHUNK_SIZE;
		let status = host.bytes_source_read(source, &mut buffer[filled..], &mut len);
		let read = len.min(READ_CHUNK_SIZE);
		buffer.truncate(filled + read);

		match status {
			READ_EXHAUSTED => break,
			READ_OK if read > 0 => {}
			// a source that is not exhausted must make progress
			READ_OK => {
				return Err(AbiError::SourceRead {
					handle: source.0,
					status,
				});
			}
			status if status as u16 == StatusCode::NO_SUCH_BYTES.0 => {
				return Err(AbiError::InvalidHandle {
					handle: source.0,
				});
			}
			status => {
				return Err(AbiError::SourceRead {
					handle: source.0,
					status,
				});
			}
		}
	}

	trace!(len = buffer.len(), "consumed bytes source");
	Ok(buffer)
}

/// Writes all of `bytes` to a sink.
///
/// Nothing is written for an invalid handle or empty input.
#[instrument(name = "abi::write_bytes", level = "trace", skip(host, bytes), fields(len = bytes.len()))]
pub fn write_bytes(host: &mut dyn HostIo, sink: BytesSink, bytes: &[u8]) -> Result<(), AbiError> {
	if sink.is_invalid() {
		return Ok(());
	}

	let mut rest = bytes;
	while !rest.is_empty() {
		let mut len = rest.len();
		match StatusCode(host.bytes_sink_write(sink, rest, &mut len)) {
			StatusCode::OK if len > 0 => rest = &rest[len.min(rest.len())..],
			StatusCode::OK => {
				return Err(AbiError::SinkWrite {
					handle: sink.0,
					status: StatusCode::NO_SPACE.0,
				});
			}
			StatusCode::NO_SUCH_BYTES => {
				return Err(AbiError::InvalidHandle {
					handle: sink.0,
				});
			}
			status => {
				return Err(AbiError::SinkWrite {
					handle: sink.0,
					status: status.0,
				});
			}
		}
	}
	Ok(())
}
