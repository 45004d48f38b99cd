// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Errors recorded while a module describes itself.
//!
//! Registration never fails fast: every problem is recorded in [`SchemaErrors`] and the validation
//! pass turns the most important one into the error document.

use modkit_type::{
	Diagnostic,
	error::diagnostic::{registry, schema},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
	#[error("circular reference in type '{type_name}'")]
	CircularReference {
		type_name: String,
	},
	#[error("table '{table}' already has primary key '{existing}', cannot add '{field}'")]
	MultiplePrimaryKeys {
		table: String,
		existing: String,
		field: String,
	},
	#[error("recursive type reference: '{type_name}'")]
	RecursiveType {
		type_name: String,
	},
	#[error("missing type name for {description}")]
	MissingTypeName {
		description: String,
	},
	/// A table, index, constraint or default could not be registered.
	#[error("{}", .0.message)]
	Registration(Diagnostic),
}

impl SchemaError {
	pub fn diagnostic(&self) -> Diagnostic {
		match self {
			SchemaError::CircularReference {
				type_name,
			} => schema::circular_reference(type_name),
			SchemaError::MultiplePrimaryKeys {
				table,
				existing,
				field,
			} => schema::multiple_primary_keys(table, existing, field),
			SchemaError::RecursiveType {
				type_name,
			} => registry::recursive_type(type_name),
			SchemaError::MissingTypeName {
				description,
			} => registry::missing_type_name(description),
			SchemaError::Registration(diagnostic) => diagnostic.clone(),
		}
	}

	pub fn is_type_error(&self) -> bool {
		matches!(self, SchemaError::RecursiveType { .. } | SchemaError::MissingTypeName { .. })
	}
}

impl From<Diagnostic> for SchemaError {
	fn from(diagnostic: Diagnostic) -> Self {
		SchemaError::Registration(diagnostic)
	}
}

impl From<SchemaError> for modkit_type::Error {
	fn from(err: SchemaError) -> Self {
		modkit_type::Error(err.diagnostic())
	}
}

/// Errors collected over one build, in the order they were recorded.
#[derive(Debug, Clone, Default)]
pub struct SchemaErrors {
	errors: Vec<SchemaError>,
}

impl SchemaErrors {
	pub fn record(&mut self, err: impl Into<SchemaError>) {
		let err = err.into();
		let diagnostic = err.diagnostic();
		error!(code = %diagnostic.code, "{}", diagnostic.message);
		self.errors.push(err);
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
		self.errors.iter()
	}

	/// Once set, later registrations are skipped.
	pub fn has_circular_reference(&self) -> bool {
		self.circular_reference().is_some()
	}

	/// Type named by the first circular reference recorded.
	pub fn circular_reference(&self) -> Option<&str> {
		self.errors.iter().find_map(|err| match err {
			SchemaError::CircularReference {
				type_name,
			} => Some(type_name.as_str()),
			_ => None,
		})
	}

	/// Table named by the first duplicate primary key recorded.
	pub fn multiple_primary_keys(&self) -> Option<&str> {
		self.errors.iter().find_map(|err| match err {
			SchemaError::MultiplePrimaryKeys {
				table,
				..
			} => Some(table.as_str()),
			_ => None,
		})
	}

	pub fn first_type_error(&self) -> Option<&SchemaError> {
		self.errors.iter().find(|err| err.is_type_error())
	}

	pub fn first_registration_error(&self) -> Option<&Diagnostic> {
		self.errors.iter().find_map(|err| match err {
			SchemaError::Registration(diagnostic) => Some(diagnostic),
			_ => None,
		})
	}

	pub fn clear(&mut self) {
		self.errors.clear();
	}
}
