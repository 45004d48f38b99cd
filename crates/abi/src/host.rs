// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Host handle to a readable byte stream
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BytesSource(pub u32);

impl BytesSource {
	/// Handle the host passes when there is nothing to read
	pub const INVALID: Self = Self(0);

	pub const fn is_invalid(self) -> bool {
		self.0 == Self::INVALID.0
	}
}

/// Host handle to a writable byte stream
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BytesSink(pub u32);

impl BytesSink {
	/// Handle the host passes when output is discarded
	pub const INVALID: Self = Self(0);

	pub const fn is_invalid(self) -> bool {
		self.0 == Self::INVALID.0
	}
}

/// Byte transfer functions the host exposes to a module
pub trait HostIo {
	/// Read the next chunk of a source
	///
	/// # Parameters
	/// - `source`: Source handle
	/// - `buf`: Buffer to receive the bytes
	/// - `len`: In: capacity to fill, at most `buf.len()`. Out: number of bytes written to `buf`
	///
	/// # Returns
	/// - 0 if bytes remain, -1 if the source is now exhausted, a positive status code on error
	fn bytes_source_read(&mut self, source: BytesSource, buf: &mut [u8], len: &mut usize) -> i16;

	/// Number of bytes left in a source
	///
	/// # Parameters
	/// - `source`: Source handle
	/// - `len`: Receives the remaining length
	///
	/// # Returns
	/// - 0 on success, a positive status code on error
	fn bytes_source_remaining_length(&mut self, source: BytesSource, len: &mut u32) -> i16;

	/// Append bytes to a sink
	///
	/// # Parameters
	/// - `sink`: Sink handle
	/// - `buf`: Bytes to write
	/// - `len`: In: number of bytes offered. Out: number of bytes accepted
	///
	/// # Returns
	/// - 0 on success, a non zero status code on error
	fn bytes_sink_write(&mut self, sink: BytesSink, buf: &[u8], len: &mut usize) -> u16;
}
