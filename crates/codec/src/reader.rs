// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::DecodeError;

/// Cursor over an encoded buffer. Every read either consumes exactly the bytes it decodes or
/// fails without producing a value.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
	buf: &'a [u8],
	pos: usize,
}

macro_rules! read_le {
	($($name:ident => $ty:ty),* $(,)?) => {
		$(
			pub fn $name(&mut self) -> Result<$ty, DecodeError> {
				Ok(<$ty>::from_le_bytes(self.read_array()?))
			}
		)*
	};
}

impl<'a> Reader<'a> {
	pub fn new(buf: &'a [u8]) -> Self {
		Self {
			buf,
			pos: 0,
		}
	}

	pub fn position(&self) -> usize {
		self.pos
	}

	pub fn remaining(&self) -> usize {
		self.buf.len() - self.pos
	}

	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
		let remaining = self.remaining();
		if len > remaining {
			return Err(DecodeError::BufferUnderrun {
				needed: len,
				remaining,
			});
		}
		let bytes = &self.buf[self.pos..self.pos + len];
		self.pos += len;
		Ok(bytes)
	}

	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.read_bytes(N)?);
		Ok(out)
	}

	pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
		Ok(self.read_array::<1>()?[0])
	}

	pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
		Ok(self.read_u8()? as i8)
	}

	read_le!(
		read_u16 => u16,
		read_i16 => i16,
		read_u32 => u32,
		read_i32 => i32,
		read_u64 => u64,
		read_i64 => i64,
		read_u128 => u128,
		read_i128 => i128,
		read_f32 => f32,
		read_f64 => f64,
	);

	pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
		match self.read_u8()? {
			0 => Ok(false),
			1 => Ok(true),
			other => Err(DecodeError::InvalidBool(other)),
		}
	}

	/// Reads a `u32` length or element count prefix.
	pub fn read_len(&mut self) -> Result<usize, DecodeError> {
		Ok(self.read_u32()? as usize)
	}

	pub fn read_str(&mut self) -> Result<&'a str, DecodeError> {
		let len = self.read_len()?;
		let bytes = self.read_bytes(len)?;
		Ok(std::str::from_utf8(bytes)?)
	}

	pub fn read_string(&mut self) -> Result<String, DecodeError> {
		self.read_str().map(str::to_string)
	}

	/// Fails with [`DecodeError::TrailingBytes`] unless the whole buffer was consumed.
	pub fn finish(self) -> Result<(), DecodeError> {
		match self.remaining() {
			0 => Ok(()),
			n => Err(DecodeError::TrailingBytes(n)),
		}
	}
}
