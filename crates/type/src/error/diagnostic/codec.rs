// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// CODEC_001: Read past the end of the input buffer
pub fn buffer_underrun(needed: usize, remaining: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_001".to_string(),
		message: format!("unexpected end of input: needed {} bytes but only {} remain", needed, remaining),
		label: Some("buffer underrun".to_string()),
		help: Some("the encoded value is truncated or was written against a different type".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// CODEC_002: Sum tag does not name a variant
pub fn invalid_tag(context: &str, tag: u8) -> Diagnostic {
	Diagnostic {
		code: "CODEC_002".to_string(),
		message: format!("invalid tag {} while decoding {}", tag, context),
		label: Some("unknown variant".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// CODEC_003: Boolean byte other than 0 or 1
pub fn invalid_bool(byte: u8) -> Diagnostic {
	Diagnostic {
		code: "CODEC_003".to_string(),
		message: format!("invalid boolean byte {:#04x}", byte),
		label: None,
		help: Some("booleans are encoded as a single byte, 0 for false and 1 for true".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// CODEC_004: String payload is not valid UTF-8
pub fn invalid_utf8(reason: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_004".to_string(),
		message: format!("string payload is not valid UTF-8: {}", reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// CODEC_005: Bytes left over after decoding a complete value
pub fn trailing_bytes(count: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_005".to_string(),
		message: format!("{} trailing bytes after decoded value", count),
		label: None,
		help: Some("the input holds more data than the declared type consumes".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// CODEC_006: Type reference outside the typespace
pub fn invalid_ref(index: u32, len: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_006".to_string(),
		message: format!("type reference {} is out of bounds for a typespace of {} types", index, len),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// CODEC_007: Value does not have the shape of the target type
pub fn type_mismatch(expected: String, found: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_007".to_string(),
		message: format!("value of kind {} cannot be encoded as {}", found, expected),
		label: Some("type mismatch".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// CODEC_008: Length does not fit the 32-bit length prefix
pub fn length_overflow(reason: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_008".to_string(),
		message: format!("length does not fit a u32 prefix: {}", reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// CODEC_009: Value nests deeper than the codec follows
pub fn recursion_limit(limit: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_009".to_string(),
		message: format!("value nests deeper than {} levels", limit),
		label: Some("recursion limit".to_string()),
		help: Some("a recursive type either loops without consuming input or the value is too deep".to_string()),
		notes: vec![],
		cause: None,
	}
}
