// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// ABI_001: Host read from a bytes source failed
pub fn source_read_failed(handle: u32, status: i16) -> Diagnostic {
	Diagnostic {
		code: "ABI_001".to_string(),
		message: format!("reading bytes source {} failed with status {}", handle, status),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// ABI_002: Host write to a bytes sink failed
pub fn sink_write_failed(handle: u32, status: u16) -> Diagnostic {
	Diagnostic {
		code: "ABI_002".to_string(),
		message: format!("writing bytes sink {} failed with status {}", handle, status),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// ABI_003: Handle is not known to the host
pub fn invalid_handle(handle: u32) -> Diagnostic {
	Diagnostic {
		code: "ABI_003".to_string(),
		message: format!("no bytes source or sink with handle {}", handle),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// ABI_004: Function id outside the registered handlers
pub fn no_such_function(kind: &str, id: u32, len: usize) -> Diagnostic {
	Diagnostic {
		code: "ABI_004".to_string(),
		message: format!("no {} with id {} ({} registered)", kind, id, len),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
