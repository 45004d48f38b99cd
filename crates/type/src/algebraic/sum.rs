// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::AlgebraicType;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SumTypeVariant {
	pub name: Option<String>,
	pub algebraic_type: AlgebraicType,
}

impl SumTypeVariant {
	pub fn new(name: Option<String>, algebraic_type: AlgebraicType) -> Self {
		Self {
			name,
			algebraic_type,
		}
	}

	pub fn named(name: impl Into<String>, algebraic_type: AlgebraicType) -> Self {
		Self::new(Some(name.into()), algebraic_type)
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SumType {
	pub variants: Vec<SumTypeVariant>,
}

impl SumType {
	pub fn new(variants: Vec<SumTypeVariant>) -> Self {
		Self {
			variants,
		}
	}

	fn has_names(&self, first: &str, second: &str) -> bool {
		match self.variants.as_slice() {
			[a, b] => a.name() == Some(first) && b.name() == Some(second),
			_ => false,
		}
	}

	pub fn is_option(&self) -> bool {
		self.has_names("some", "none")
	}

	pub fn is_result(&self) -> bool {
		self.has_names("ok", "err")
	}

	pub fn is_schedule_at(&self) -> bool {
		self.has_names("Interval", "Time")
	}

	/// A sum whose variants all carry unit payloads.
	pub fn is_simple_enum(&self) -> bool {
		self.variants.iter().all(|v| v.algebraic_type.is_unit())
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.variants.iter().position(|v| v.name() == Some(name))
	}
}

impl FromIterator<SumTypeVariant> for SumType {
	fn from_iter<T: IntoIterator<Item = SumTypeVariant>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
