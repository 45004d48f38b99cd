// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, render::DefaultRenderer};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

pub type Result<T> = std::result::Result<T, Error>;

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

impl From<std::string::FromUtf8Error> for Error {
	fn from(err: std::string::FromUtf8Error) -> Self {
		crate::error!(diagnostic::codec::invalid_utf8(err.to_string()))
	}
}

impl From<std::num::TryFromIntError> for Error {
	fn from(err: std::num::TryFromIntError) -> Self {
		crate::error!(diagnostic::codec::length_overflow(err.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_renders_code_and_message() {
		let err = Error(diagnostic::schema::table_not_found("person"));
		let rendered = err.to_string();
		assert!(rendered.starts_with("error[TABLE_NOT_FOUND]: "));
		assert!(rendered.contains("person"));
	}

	#[test]
	fn test_deref_exposes_diagnostic() {
		let err = Error(diagnostic::schema::field_not_found("person", "email"));
		assert_eq!(err.code, "FIELD_NOT_FOUND");
		assert_eq!(err.diagnostic().code, "FIELD_NOT_FOUND");
	}
}
