// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_type::error::diagnostic::codec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
	#[error("buffer underrun: needed {needed} bytes, {remaining} remaining")]
	BufferUnderrun {
		needed: usize,
		remaining: usize,
	},

	#[error("invalid tag {tag} for {context}")]
	InvalidTag {
		context: &'static str,
		tag: u8,
	},

	#[error("invalid bool byte {0}")]
	InvalidBool(u8),

	#[error("invalid utf-8: {0}")]
	InvalidUtf8(#[from] std::str::Utf8Error),

	#[error("{0} trailing bytes")]
	TrailingBytes(usize),

	#[error("type reference {index} out of bounds ({len} types)")]
	InvalidRef {
		index: u32,
		len: usize,
	},

	#[error("value nests deeper than {0} levels")]
	RecursionLimit(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
	#[error("length {0} does not fit a u32 prefix")]
	LengthOverflow(usize),

	#[error("cannot encode {found} as {expected}")]
	TypeMismatch {
		expected: String,
		found: &'static str,
	},

	#[error("type reference {index} out of bounds ({len} types)")]
	InvalidRef {
		index: u32,
		len: usize,
	},

	#[error("sum tag {tag} out of range ({variants} variants)")]
	InvalidTag {
		tag: u8,
		variants: usize,
	},

	#[error("value nests deeper than {0} levels")]
	RecursionLimit(usize),
}

impl From<DecodeError> for modkit_type::Error {
	fn from(err: DecodeError) -> Self {
		modkit_type::error!(match err {
			DecodeError::BufferUnderrun {
				needed,
				remaining,
			} => codec::buffer_underrun(needed, remaining),
			DecodeError::InvalidTag {
				context,
				tag,
			} => codec::invalid_tag(context, tag),
			DecodeError::InvalidBool(byte) => codec::invalid_bool(byte),
			DecodeError::InvalidUtf8(e) => codec::invalid_utf8(e.to_string()),
			DecodeError::TrailingBytes(count) => codec::trailing_bytes(count),
			DecodeError::InvalidRef {
				index,
				len,
			} => codec::invalid_ref(index, len),
			DecodeError::RecursionLimit(limit) => codec::recursion_limit(limit),
		})
	}
}

impl From<EncodeError> for modkit_type::Error {
	fn from(err: EncodeError) -> Self {
		modkit_type::error!(match err {
			EncodeError::LengthOverflow(len) => codec::length_overflow(len.to_string()),
			EncodeError::TypeMismatch {
				expected,
				found,
			} => codec::type_mismatch(expected, found.to_string()),
			EncodeError::InvalidRef {
				index,
				len,
			} => codec::invalid_ref(index, len),
			EncodeError::InvalidTag {
				tag,
				..
			} => codec::invalid_tag("sum value", tag),
			EncodeError::RecursionLimit(limit) => codec::recursion_limit(limit),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decode_error_into_diagnostic() {
		let err: modkit_type::Error = DecodeError::BufferUnderrun {
			needed: 4,
			remaining: 1,
		}
		.into();
		assert_eq!(err.code, "CODEC_001");
		assert!(err.message.contains("needed 4 bytes but only 1 remain"));
	}

	#[test]
	fn test_encode_error_into_diagnostic() {
		let err: modkit_type::Error = EncodeError::TypeMismatch {
			expected: "U32".to_string(),
			found: "String",
		}
		.into();
		assert_eq!(err.code, "CODEC_007");
	}
}
