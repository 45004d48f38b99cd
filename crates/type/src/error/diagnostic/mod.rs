// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

pub mod abi;
pub mod codec;
pub mod registry;
pub mod render;
pub mod schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}

	pub fn with_note(mut self, note: impl Into<String>) -> Self {
		self.notes.push(note.into());
		self
	}
}
