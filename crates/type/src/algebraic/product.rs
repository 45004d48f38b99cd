// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{AlgebraicType, SPECIAL_TAGS};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductTypeElement {
	pub name: Option<String>,
	pub algebraic_type: AlgebraicType,
}

impl ProductTypeElement {
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
pub struct ProductType {
	pub elements: Vec<ProductTypeElement>,
}

impl ProductType {
	pub fn new(elements: Vec<ProductTypeElement>) -> Self {
		Self {
			elements,
		}
	}

	pub fn unit() -> Self {
		Self::default()
	}

	pub fn is_unit(&self) -> bool {
		self.elements.is_empty()
	}

	pub fn len(&self) -> usize {
		self.elements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	pub fn special_tag(&self) -> Option<&str> {
		match self.elements.as_slice() {
			[only] => only.name().filter(|name| SPECIAL_TAGS.contains(name)),
			_ => None,
		}
	}

	/// Position of the field named `name`.
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.elements.iter().position(|e| e.name() == Some(name))
	}
}

impl FromIterator<ProductTypeElement> for ProductType {
	fn from_iter<T: IntoIterator<Item = ProductTypeElement>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
