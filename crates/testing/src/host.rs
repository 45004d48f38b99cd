// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use modkit_abi::{
	BytesSink, BytesSource, HostIo, StatusCode,
	constants::{READ_EXHAUSTED, READ_OK},
};
use modkit_codec::{Encode, EncodeError, to_vec};

#[derive(Debug)]
struct Source {
	data: Vec<u8>,
	position: usize,
}

/// Host whose bytes sources and sinks live in memory.
///
/// Handles start at 1; handle 0 is the invalid handle. Reads and writes can be limited to a chunk
/// size to exercise partial transfers.
#[derive(Debug, Default)]
pub struct MemoryHost {
	sources: HashMap<u32, Source>,
	sinks: HashMap<u32, Vec<u8>>,
	last_handle: u32,
	read_chunk: Option<usize>,
	write_chunk: Option<usize>,
}

impl MemoryHost {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_read_chunk(mut self, chunk: usize) -> Self {
		self.read_chunk = Some(chunk);
		self
	}

	pub fn with_write_chunk(mut self, chunk: usize) -> Self {
		self.write_chunk = Some(chunk);
		self
	}

	fn next_handle(&mut self) -> u32 {
		self.last_handle += 1;
		self.last_handle
	}

	pub fn source(&mut self, bytes: impl Into<Vec<u8>>) -> BytesSource {
		let handle = self.next_handle();
		self.sources.insert(
			handle,
			Source {
				data: bytes.into(),
				position: 0,
			},
		);
		BytesSource(handle)
	}

	/// A source holding the BSATN encoding of `value`.
	pub fn encoded_source<T: Encode + ?Sized>(&mut self, value: &T) -> Result<BytesSource, EncodeError> {
		let bytes = to_vec(value)?;
		Ok(self.source(bytes))
	}

	pub fn sink(&mut self) -> BytesSink {
		let handle = self.next_handle();
		self.sinks.insert(handle, vec![]);
		BytesSink(handle)
	}

	/// Bytes written to `sink` so far; empty for unknown handles.
	pub fn sink_bytes(&self, sink: BytesSink) -> &[u8] {
		self.sinks.get(&sink.0).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn sink_string(&self, sink: BytesSink) -> String {
		String::from_utf8_lossy(self.sink_bytes(sink)).into_owned()
	}

	pub fn remaining(&self, source: BytesSource) -> Option<usize> {
		self.sources.get(&source.0).map(|source| source.data.len() - source.position)
	}
}

impl HostIo for MemoryHost {
	fn bytes_source_read(&mut self, source: BytesSource, buf: &mut [u8], len: &mut usize) -> i16 {
		let chunk = self.read_chunk;
		let Some(source) = self.sources.get_mut(&source.0) else {
			*len = 0;
			return StatusCode::NO_SUCH_BYTES.0 as i16;
		};

		let remaining = source.data.len() - source.position;
		let mut n = (*len).min(buf.len()).min(remaining);
		if let Some(chunk) = chunk {
			n = n.min(chunk);
		}
		buf[..n].copy_from_slice(&source.data[source.position..source.position + n]);
		source.position += n;
		*len = n;

		if source.position == source.data.len() {
			READ_EXHAUSTED
		} else {
			READ_OK
		}
	}

	fn bytes_source_remaining_length(&mut self, source: BytesSource, len: &mut u32) -> i16 {
		match self.remaining(source) {
			Some(remaining) => {
				*len = remaining as u32;
				READ_OK
			}
			None => StatusCode::NO_SUCH_BYTES.0 as i16,
		}
	}

	fn bytes_sink_write(&mut self, sink: BytesSink, buf: &[u8], len: &mut usize) -> u16 {
		let chunk = self.write_chunk;
		let Some(written) = self.sinks.get_mut(&sink.0) else {
			*len = 0;
			return StatusCode::NO_SUCH_BYTES.0;
		};

		let mut n = (*len).min(buf.len());
		if let Some(chunk) = chunk {
			n = n.min(chunk);
		}
		written.extend_from_slice(&buf[..n]);
		*len = n;
		StatusCode::OK.0
	}
}
