// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Interning of algebraic types into the module typespace.
//!
//! Primitives, arrays, options, results, schedules and the special single field products are
//! always inlined. Every other product or sum is stored once in the typespace under its name and
//! referred to by `Ref`.

mod registrar;

use std::collections::{HashMap, HashSet};

pub use registrar::Registrar;
use modkit_type::{AlgebraicTypeRef, Typespace, error::diagnostic::registry::invalid_type_index, return_error};
use tracing::debug;

use crate::{
	SchemaErrors,
	def::{RawScopedTypeName, RawTypeDef},
};

/// Slot of the type definition emitted in place of the schema when the build failed.
pub const ERROR_TYPE_REF: AlgebraicTypeRef = AlgebraicTypeRef(999_999);

#[derive(Debug, Default)]
pub struct TypeRegistry {
	typespace: Typespace,
	types: Vec<RawTypeDef>,
	cache: HashMap<String, AlgebraicTypeRef>,
	/// Names whose body is being interned right now.
	registering: HashSet<String>,
	/// Names whose structure is being built, outermost first.
	chain: Vec<String>,
}

impl TypeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Borrows the registry together with the error accumulator of the build.
	pub fn scope<'a>(&'a mut self, errors: &'a mut SchemaErrors) -> Registrar<'a> {
		Registrar::new(self, errors)
	}

	pub fn typespace(&self) -> &Typespace {
		&self.typespace
	}

	pub fn types(&self) -> &[RawTypeDef] {
		&self.types
	}

	/// The slot interned under `name`, from the cache or the emitted type definitions.
	pub fn lookup(&self, name: &str) -> Option<AlgebraicTypeRef> {
		if let Some(r) = self.cache.get(name) {
			return Some(*r);
		}
		self.types.iter().find(|def| def.source_name.qualified() == name).map(|def| def.ty)
	}

	/// Moves the type defined at `index` under a new, possibly scoped, name. The old name keeps
	/// resolving to the same slot.
	pub fn rename_type(&mut self, index: AlgebraicTypeRef, new_name: &str) -> modkit_type::Result<()> {
		let len = self.typespace.len();
		let Some(def) = self.types.iter_mut().find(|def| def.ty == index) else {
			return_error!(invalid_type_index(index.0, len));
		};
		let old_name = def.source_name.qualified();
		def.source_name = RawScopedTypeName::parse(new_name);
		self.cache.insert(new_name.to_string(), index);
		debug!(from = %old_name, to = %new_name, "renamed type");
		Ok(())
	}

	/// Drops every interned type and leaves the single error marker definition.
	pub(crate) fn replace_with_error_type(&mut self, name: String) {
		self.clear();
		self.types.push(RawTypeDef {
			source_name: RawScopedTypeName::unscoped(name),
			ty: ERROR_TYPE_REF,
			custom_ordering: false,
		});
	}

	pub fn clear(&mut self) {
		self.typespace.clear();
		self.types.clear();
		self.cache.clear();
		self.registering.clear();
		self.chain.clear();
	}

	fn is_registering(&self, name: &str) -> bool {
		self.registering.contains(name)
	}

	fn in_chain(&self, name: &str) -> bool {
		self.chain.iter().any(|entry| entry == name)
	}
}
