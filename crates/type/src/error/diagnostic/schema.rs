// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Diagnostics raised while registering tables, constraints and indexes.
//!
//! Codes are stable identifiers: the validation pass embeds them into the error document the host
//! reports to the module author.

use super::Diagnostic;

fn schema(code: &str, message: String, help: Option<&str>) -> Diagnostic {
	Diagnostic {
		code: code.to_string(),
		message,
		label: None,
		help: help.map(str::to_string),
		notes: vec![],
		cause: None,
	}
}

pub fn table_no_field_descriptors(table: &str) -> Diagnostic {
	schema(
		"TABLE_NO_FIELD_DESCRIPTORS",
		format!("table='{}' has no registered field descriptors", table),
		Some("declare the row type with the module struct macro before registering the table"),
	)
}

pub fn table_type_not_ref(table: &str) -> Diagnostic {
	schema("TABLE_TYPE_NOT_REF", format!("table='{}' did not register as a named Ref type", table), None)
}

pub fn no_field_descriptors(table: &str, field: &str) -> Diagnostic {
	schema(
		"NO_FIELD_DESCRIPTORS",
		format!("table='{}' field='{}' has no registered field descriptors", table, field),
		None,
	)
}

pub fn table_not_found(table: &str) -> Diagnostic {
	schema(
		"TABLE_NOT_FOUND",
		format!("table='{}' is not registered", table),
		Some("register the table before adding constraints, indexes or defaults to it"),
	)
}

pub fn field_not_found(table: &str, field: &str) -> Diagnostic {
	schema("FIELD_NOT_FOUND", format!("table='{}' has no field '{}'", table, field), None)
}

pub fn multi_index_empty(table: &str, index: &str) -> Diagnostic {
	schema(
		"MULTI_INDEX_EMPTY",
		format!("table='{}' index='{}' names no columns", table, index),
		Some("a multi-column index needs at least one field"),
	)
}

pub fn default_on_primary_key(table: &str, field: &str) -> Diagnostic {
	schema(
		"DEFAULT_ON_PRIMARY_KEY",
		format!("table='{}' field='{}' is a primary key and cannot have a default value", table, field),
		None,
	)
}

pub fn default_on_unique(table: &str, field: &str) -> Diagnostic {
	schema(
		"DEFAULT_ON_UNIQUE",
		format!("table='{}' field='{}' is unique and cannot have a default value", table, field),
		None,
	)
}

pub fn default_on_autoinc(table: &str, field: &str) -> Diagnostic {
	schema(
		"DEFAULT_ON_AUTOINC",
		format!("table='{}' field='{}' is auto-incremented and cannot have a default value", table, field),
		None,
	)
}

pub fn multiple_primary_keys(table: &str, existing: &str, field: &str) -> Diagnostic {
	Diagnostic {
		code: "MULTIPLE_PRIMARY_KEYS".to_string(),
		message: format!("table='{}' already has primary key '{}', cannot add '{}'", table, existing, field),
		label: Some("second primary key".to_string()),
		help: Some("a table has at most one primary key; use a unique constraint for other columns".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn circular_reference(type_name: &str) -> Diagnostic {
	Diagnostic {
		code: "CIRCULAR_REFERENCE".to_string(),
		message: format!("type '{}' contains a circular reference to itself", type_name),
		label: None,
		help: Some("break the cycle with an indirection such as an array or an option".to_string()),
		notes: vec![],
		cause: None,
	}
}
