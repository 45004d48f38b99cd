// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::EncodeError;

/// Growable output buffer for BSATN encoding.
#[derive(Debug, Clone, Default)]
pub struct Writer {
	buf: Vec<u8>,
}

macro_rules! write_le {
	($($name:ident => $ty:ty),* $(,)?) => {
		$(
			pub fn $name(&mut self, v: $ty) {
				self.buf.extend_from_slice(&v.to_le_bytes());
			}
		)*
	};
}

impl Writer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.buf.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.buf
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.buf
	}

	pub fn write_u8(&mut self, v: u8) {
		self.buf.push(v);
	}

	pub fn write_i8(&mut self, v: i8) {
		self.buf.push(v as u8);
	}

	write_le!(
		write_u16 => u16,
		write_i16 => i16,
		write_u32 => u32,
		write_i32 => i32,
		write_u64 => u64,
		write_i64 => i64,
		write_u128 => u128,
		write_i128 => i128,
		write_f32 => f32,
		write_f64 => f64,
	);

	pub fn write_bool(&mut self, v: bool) {
		self.buf.push(v as u8);
	}

	/// Writes a `u32` length or element count prefix.
	pub fn write_len(&mut self, len: usize) -> Result<(), EncodeError> {
		let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow(len))?;
		self.write_u32(len);
		Ok(())
	}

	pub fn write_string(&mut self, s: &str) -> Result<(), EncodeError> {
		self.write_len(s.len())?;
		self.buf.extend_from_slice(s.as_bytes());
		Ok(())
	}

	/// Appends already encoded bytes without a prefix.
	pub fn write_bytes_raw(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}
}
