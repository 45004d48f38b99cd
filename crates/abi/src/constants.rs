// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Read status: the chunk was read and the source has more bytes
pub const READ_OK: i16 = 0;

/// Read status: the source is exhausted, the final chunk (possibly empty) was read
pub const READ_EXHAUSTED: i16 = -1;

/// Chunk size used when draining a bytes source
pub const READ_CHUNK_SIZE: usize = 1024;

/// Result kind header: the payload is BSATN encoded row data
pub const RESULT_KIND_ROW_DATA: u8 = 0;

/// Status code returned across the ABI
///
/// `0` is success, every other value names the failure.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u16);

impl StatusCode {
	pub const OK: Self = Self(0);
	/// The called function ran and failed; details are in the error sink
	pub const HOST_CALL_FAILURE: Self = Self(1);
	/// Argument bytes did not decode as the declared parameters
	pub const BSATN_DECODE_ERROR: Self = Self(3);
	/// The source or sink handle is not known
	pub const NO_SUCH_BYTES: Self = Self(8);
	/// The sink cannot accept more bytes
	pub const NO_SPACE: Self = Self(9);
	/// No reducer, view or procedure is registered under the id
	pub const NO_SUCH_REDUCER: Self = Self(999);

	pub const fn is_ok(self) -> bool {
		self.0 == 0
	}

	pub const fn name(self) -> &'static str {
		match self.0 {
			0 => "OK",
			1 => "HOST_CALL_FAILURE",
			3 => "BSATN_DECODE_ERROR",
			8 => "NO_SUCH_BYTES",
			9 => "NO_SPACE",
			999 => "NO_SUCH_REDUCER",
			_ => "UNKNOWN",
		}
	}
}

impl Display for StatusCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({})", self.name(), self.0)
	}
}

impl From<StatusCode> for u16 {
	fn from(status: StatusCode) -> Self {
		status.0
	}
}
