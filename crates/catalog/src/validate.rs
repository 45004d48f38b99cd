// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Turns recorded registration errors into the error document.
//!
//! A module with errors is described to the host as a schema holding a single type definition whose
//! name carries the most important error, e.g. `ERROR_CIRCULAR_REFERENCE_Node`. The host reports
//! that name to the module author.

use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use crate::{ModuleBuilder, SchemaError, SchemaErrors};

const MAX_SHAPE_LEN: usize = 100;

/// How many of the collected errors are logged when the error document is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReporting {
	/// Only the error that names the document.
	#[default]
	Precedence,
	/// Every collected error.
	Collect,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
	/// Name of the error type that replaced the schema, if any.
	pub error_type_name: Option<String>,
	pub errors: Vec<SchemaError>,
}

impl ValidationReport {
	pub fn is_valid(&self) -> bool {
		self.error_type_name.is_none()
	}
}

/// Replaces every byte that is not an ASCII letter, digit or underscore, so a multi-byte character
/// turns into one underscore per byte.
fn sanitize(shape: &str) -> String {
	shape.bytes()
		.take(MAX_SHAPE_LEN)
		.map(|b| {
			if b.is_ascii_alphanumeric() || b == b'_' {
				b as char
			} else {
				'_'
			}
		})
		.collect()
}

/// Name of the error type for the most important recorded error.
///
/// Circular references come first, then duplicate primary keys, then type registration errors and
/// finally any other registration error.
pub fn error_type_name(errors: &SchemaErrors) -> Option<String> {
	if let Some(type_name) = errors.circular_reference() {
		return Some(format!("ERROR_CIRCULAR_REFERENCE_{}", type_name));
	}
	if let Some(table) = errors.multiple_primary_keys() {
		return Some(format!("ERROR_MULTIPLE_PRIMARY_KEYS_{}", table));
	}
	match errors.first_type_error() {
		Some(SchemaError::RecursiveType {
			type_name,
		}) => return Some(format!("ERROR_RECURSIVE_TYPE_{}", type_name)),
		Some(SchemaError::MissingTypeName {
			description,
		}) => return Some(format!("ERROR_MISSING_TYPE_NAME_{}", sanitize(description))),
		_ => {}
	}
	errors.first_registration_error().map(|diagnostic| {
		if diagnostic.code.starts_with("TYPE_") {
			"ERROR_TYPE_REGISTRATION_FAILED".to_string()
		} else {
			format!("ERROR_CONSTRAINT_REGISTRATION_{}", diagnostic.code)
		}
	})
}

/// Replaces the builder's definitions with the error document when errors were recorded.
#[instrument(name = "catalog::validate", level = "trace", skip(builder))]
pub fn validate(builder: &mut ModuleBuilder, reporting: ErrorReporting) -> ValidationReport {
	let Some(name) = error_type_name(builder.errors()) else {
		return ValidationReport::default();
	};

	if reporting == ErrorReporting::Collect {
		for (position, err) in builder.errors().iter().enumerate() {
			let diagnostic = err.diagnostic();
			error!(position, code = %diagnostic.code, "{}", diagnostic.message);
		}
	}
	error!(error_type = %name, errors = builder.errors().len(), "module schema replaced by error document");

	let errors = builder.errors().iter().cloned().collect();
	builder.discard_definitions();
	builder.registry_mut().replace_with_error_type(name.clone());

	ValidationReport {
		error_type_name: Some(name),
		errors,
	}
}

#[cfg(test)]
mod tests {
	use modkit_type::{AlgebraicType, error::diagnostic::schema};

	use super::*;
	use crate::{
		ReducerToCreate,
		builder::tests::person_builder,
		registry::ERROR_TYPE_REF,
	};

	fn name_of(record: impl FnOnce(&mut SchemaErrors)) -> Option<String> {
		let mut errors = SchemaErrors::default();
		record(&mut errors);
		error_type_name(&errors)
	}

	#[test]
	fn test_no_errors_keeps_document() {
		let mut builder = person_builder();
		let report = validate(&mut builder, ErrorReporting::Precedence);
		assert!(report.is_valid());
		assert_eq!(builder.tables().len(), 1);
	}

	#[test]
	fn test_circular_reference_wins() {
		let name = name_of(|errors| {
			errors.record(schema::table_not_found("t"));
			errors.record(SchemaError::MultiplePrimaryKeys {
				table: "t".to_string(),
				existing: "a".to_string(),
				field: "b".to_string(),
			});
			errors.record(SchemaError::CircularReference {
				type_name: "Node".to_string(),
			});
		});
		assert_eq!(name.as_deref(), Some("ERROR_CIRCULAR_REFERENCE_Node"));
	}

	#[test]
	fn test_primary_key_before_type_errors() {
		let name = name_of(|errors| {
			errors.record(SchemaError::RecursiveType {
				type_name: "Tree".to_string(),
			});
			errors.record(SchemaError::MultiplePrimaryKeys {
				table: "player".to_string(),
				existing: "id".to_string(),
				field: "name".to_string(),
			});
		});
		assert_eq!(name.as_deref(), Some("ERROR_MULTIPLE_PRIMARY_KEYS_player"));
	}

	#[test]
	fn test_type_errors_before_constraint_errors() {
		let name = name_of(|errors| {
			errors.record(schema::default_on_unique("t", "f"));
			errors.record(SchemaError::RecursiveType {
				type_name: "Tree".to_string(),
			});
		});
		assert_eq!(name.as_deref(), Some("ERROR_RECURSIVE_TYPE_Tree"));
	}

	#[test]
	fn test_missing_name_is_sanitized() {
		let name = name_of(|errors| {
			errors.record(SchemaError::MissingTypeName {
				description: AlgebraicType::product([("x", AlgebraicType::U32)]).describe(),
			});
		});
		assert_eq!(name.as_deref(), Some("ERROR_MISSING_TYPE_NAME_Product_x__U32_"));

		let long = "é".repeat(150);
		assert_eq!(sanitize(&long).len(), MAX_SHAPE_LEN);
		assert_eq!(sanitize("café"), "caf__");
	}

	#[test]
	fn test_registration_error_classes() {
		let name = name_of(|errors| errors.record(schema::multi_index_empty("t", "i")));
		assert_eq!(name.as_deref(), Some("ERROR_CONSTRAINT_REGISTRATION_MULTI_INDEX_EMPTY"));

		let name = name_of(|errors| {
			errors.record(modkit_type::error::diagnostic::registry::invalid_type_index(3, 0))
		});
		assert_eq!(name.as_deref(), Some("ERROR_TYPE_REGISTRATION_FAILED"));
	}

	#[test]
	fn test_error_document_replaces_everything() {
		let mut builder = person_builder();
		builder.register_reducer(ReducerToCreate {
			name: "add".to_string(),
			params: vec![],
		});
		builder.register_row_level_security("SELECT * FROM person");
		builder.errors_mut().record(SchemaError::CircularReference {
			type_name: "Node".to_string(),
		});

		let report = validate(&mut builder, ErrorReporting::Collect);
		assert_eq!(report.errors.len(), 1);

		let def = builder.build_module_def();
		assert_eq!(def.section_names(), vec!["typespace", "types"]);
		assert!(def.typespace().unwrap().is_empty());
		assert_eq!(def.types().len(), 1);
		assert!(def.types()[0].source_name.source_name.starts_with("ERROR_CIRCULAR_REFERENCE_"));
		assert_eq!(def.types()[0].ty, ERROR_TYPE_REF);
		assert!(def.tables().is_empty());
		assert!(def.reducers().is_empty());
	}
}
