// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// TYPE_001: Composite type without a name
pub fn missing_type_name(description: &str) -> Diagnostic {
	Diagnostic {
		code: "TYPE_001".to_string(),
		message: format!("Missing type name for complex type: {}", description),
		label: Some("unnamed composite type".to_string()),
		help: Some("products and sums other than options, results and schedules must be named".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// TYPE_002: Type refers to itself while being registered
pub fn recursive_type(type_name: &str) -> Diagnostic {
	Diagnostic {
		code: "TYPE_002".to_string(),
		message: format!("Recursive type reference detected: '{}' is referencing itself", type_name),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// TYPE_003: Type definition index out of range
pub fn invalid_type_index(index: u32, len: usize) -> Diagnostic {
	Diagnostic {
		code: "TYPE_003".to_string(),
		message: format!("invalid type index {} (max: {})", index, len),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
