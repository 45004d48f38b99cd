// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_type::{AlgebraicType, NativeType, ProductType, SumType, TypeBuilder};
use tracing::{debug, error, trace};

use super::TypeRegistry;
use crate::{
	SchemaError, SchemaErrors,
	def::{RawScopedTypeName, RawTypeDef},
};

/// A [`TypeRegistry`] borrowed for registration, recording failures into the build's errors.
pub struct Registrar<'a> {
	registry: &'a mut TypeRegistry,
	errors: &'a mut SchemaErrors,
}

/// Drops any module path in front of the last `::`.
fn strip_path(name: &str) -> &str {
	match name.rfind("::") {
		Some(pos) => &name[pos + 2..],
		None => name,
	}
}

impl<'a> Registrar<'a> {
	pub(super) fn new(registry: &'a mut TypeRegistry, errors: &'a mut SchemaErrors) -> Self {
		Self {
			registry,
			errors,
		}
	}

	/// Interns `ty` under `name` even if it would otherwise be inlined. Idempotent.
	pub fn register_type_by_name(&mut self, name: &str, ty: AlgebraicType) -> AlgebraicType {
		self.intern(strip_path(name).to_string(), ty)
	}

	/// Registers `ty` under `name` and returns its typespace index, or `None` when the type was
	/// inlined or could not be registered.
	pub fn register_and_get_index(&mut self, ty: AlgebraicType, name: &str, native: Option<NativeType>) -> Option<u32> {
		match self.register_type(ty, Some(name), native) {
			AlgebraicType::Ref(r) => Some(r.0),
			other => {
				error!(name, ty = %other.describe(), "type did not register as a reference");
				None
			}
		}
	}

	/// Runs the payloads of an inlined product or sum through registration.
	fn register_components(&mut self, ty: AlgebraicType) -> AlgebraicType {
		match ty {
			AlgebraicType::Product(product) => AlgebraicType::Product(
				product.elements
					.into_iter()
					.map(|mut element| {
						element.algebraic_type = self.register_type(element.algebraic_type, None, None);
						element
					})
					.collect::<ProductType>(),
			),
			AlgebraicType::Sum(sum) => AlgebraicType::Sum(
				sum.variants
					.into_iter()
					.map(|mut variant| {
						variant.algebraic_type = self.register_type(variant.algebraic_type, None, None);
						variant
					})
					.collect::<SumType>(),
			),
			other => other,
		}
	}

	fn intern(&mut self, name: String, ty: AlgebraicType) -> AlgebraicType {
		if self.registry.is_registering(&name) {
			self.errors.record(SchemaError::RecursiveType {
				type_name: name,
			});
			return AlgebraicType::U8;
		}

		if let Some(existing) = self.registry.lookup(&name) {
			trace!(name = %name, index = existing.0, "type already registered");
			return AlgebraicType::Ref(existing);
		}

		self.registry.registering.insert(name.clone());
		let slot = self.registry.typespace.reserve();
		let body = self.register_components(ty);
		self.registry.typespace.set(slot, body);

		self.registry.types.push(RawTypeDef {
			source_name: RawScopedTypeName::parse(&name),
			ty: slot,
			custom_ordering: true,
		});
		self.registry.registering.remove(&name);
		debug!(name = %name, index = slot.0, "registered type");
		self.registry.cache.insert(name, slot);

		AlgebraicType::Ref(slot)
	}
}

impl TypeBuilder for Registrar<'_> {
	fn register_type(
		&mut self,
		ty: AlgebraicType,
		explicit_name: Option<&str>,
		native: Option<NativeType>,
	) -> AlgebraicType {
		if ty.is_primitive() || ty.is_ref() {
			return ty;
		}

		if let AlgebraicType::Array(array) = ty {
			return AlgebraicType::array(self.register_type(*array.elem_ty, None, None));
		}

		let explicit_name = explicit_name.filter(|name| !name.is_empty());
		if ty.is_unit() && explicit_name.is_none() {
			return AlgebraicType::unit();
		}

		if ty.is_special() || ty.is_inline_sum() {
			return self.register_components(ty);
		}

		let name = match (explicit_name, native) {
			(Some(name), _) => strip_path(name).to_string(),
			(None, Some(native)) => native.simple_name().to_string(),
			(None, None) => {
				self.errors.record(SchemaError::MissingTypeName {
					description: ty.describe(),
				});
				return AlgebraicType::U8;
			}
		};

		self.intern(name, ty)
	}

	fn register_named(
		&mut self,
		name: &str,
		native: NativeType,
		build: &mut dyn FnMut(&mut dyn TypeBuilder) -> AlgebraicType,
	) -> AlgebraicType {
		if let Some(existing) = self.registry.lookup(name) {
			return AlgebraicType::Ref(existing);
		}

		if self.registry.in_chain(name) {
			if !self.errors.has_circular_reference() {
				self.errors.record(SchemaError::CircularReference {
					type_name: name.to_string(),
				});
			}
			return AlgebraicType::U32;
		}

		self.registry.chain.push(name.to_string());
		let ty = build(self);
		self.registry.chain.pop();

		if self.errors.has_circular_reference() {
			return ty;
		}
		self.register_type(ty, Some(name), Some(native))
	}
}
