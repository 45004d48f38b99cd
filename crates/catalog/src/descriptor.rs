// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Field descriptors of native row types.

use std::any::{TypeId, type_name};

use indexmap::IndexMap;
use modkit_type::{AlgebraicType, GetType, NativeType, TypeBuilder};

/// One field of a native struct, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
	pub name: &'static str,
	pub make_type: fn(&mut dyn TypeBuilder) -> AlgebraicType,
	/// Compiler provided path of the field's type.
	pub type_name: &'static str,
}

impl FieldDescriptor {
	pub fn of<T: GetType + 'static>(name: &'static str) -> Self {
		Self {
			name,
			make_type: T::make_type,
			type_name: type_name::<T>(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct TableDescriptor {
	pub native: NativeType,
	pub fields: Vec<FieldDescriptor>,
}

impl TableDescriptor {
	pub fn position(&self, field: &str) -> Option<u16> {
		self.fields.iter().position(|f| f.name == field).and_then(|pos| u16::try_from(pos).ok())
	}
}

/// Native structs that can back a table.
pub trait Fields: 'static {
	fn field_descriptors() -> Vec<FieldDescriptor>;

	fn table_descriptor() -> TableDescriptor {
		TableDescriptor {
			native: NativeType::of::<Self>(),
			fields: Self::field_descriptors(),
		}
	}
}

/// Descriptors known to one build, keyed by the native type.
#[derive(Debug, Default)]
pub struct FieldRegistry {
	descriptors: IndexMap<TypeId, TableDescriptor>,
}

impl FieldRegistry {
	/// Records the descriptor unless the type is already known.
	pub fn register(&mut self, descriptor: TableDescriptor) {
		self.descriptors.entry(descriptor.native.id).or_insert(descriptor);
	}

	pub fn register_fields<T: Fields>(&mut self) {
		if !self.descriptors.contains_key(&TypeId::of::<T>()) {
			self.register(T::table_descriptor());
		}
	}

	pub fn get(&self, native: &NativeType) -> Option<&TableDescriptor> {
		self.descriptors.get(&native.id)
	}

	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}

	pub fn clear(&mut self) {
		self.descriptors.clear();
	}
}
