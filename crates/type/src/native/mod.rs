// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Native Rust types describing themselves as [`AlgebraicType`]s.

mod special;

use std::any::{TypeId, type_name};

pub use special::{ConnectionId, Identity, ScheduleAt, TimeDuration, Timestamp};
pub use uuid::Uuid;

use crate::{AlgebraicType, value::{I256, U256}};

/// Identity of a native type: its [`TypeId`] plus the compiler provided path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeType {
	pub id: TypeId,
	pub name: &'static str,
}

impl NativeType {
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: type_name::<T>(),
		}
	}

	/// The bare type name, without module path or generic arguments.
	pub fn simple_name(&self) -> &'static str {
		strip_type_name(self.name)
	}
}

/// Strips generic arguments and then the module path from a type path.
///
/// `app::model::Person` becomes `Person` and `alloc::vec::Vec<app::Person>` becomes `Vec`.
pub fn strip_type_name(name: &str) -> &str {
	let without_generics = match name.find('<') {
		Some(pos) => &name[..pos],
		None => name,
	};
	match without_generics.rfind("::") {
		Some(pos) => &without_generics[pos + 2..],
		None => without_generics,
	}
}

/// Registry that interns the types native values describe.
///
/// Implemented by the module type registry; [`GetType`] impls for user structs and enums call
/// [`TypeBuilder::register_named`] so nested user types are interned as they are discovered.
pub trait TypeBuilder {
	/// Runs a structural type through the interning rules, returning either the inline type or a
	/// `Ref` into the typespace.
	fn register_type(
		&mut self,
		ty: AlgebraicType,
		explicit_name: Option<&str>,
		native: Option<NativeType>,
	) -> AlgebraicType;

	/// Interns the named type whose structure `build` produces.
	///
	/// A name that is already interned resolves to its `Ref` without calling `build`. A type whose
	/// structure contains itself is reported as a circular reference.
	fn register_named(
		&mut self,
		name: &str,
		native: NativeType,
		build: &mut dyn FnMut(&mut dyn TypeBuilder) -> AlgebraicType,
	) -> AlgebraicType;
}

pub trait GetType {
	fn make_type(builder: &mut dyn TypeBuilder) -> AlgebraicType;
}

macro_rules! impl_get_type_primitive {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $ty {
				fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
					AlgebraicType::$variant
				}
			}
		)*
	};
}

impl_get_type_primitive!(
	bool => Bool,
	i8 => I8,
	u8 => U8,
	i16 => I16,
	u16 => U16,
	i32 => I32,
	u32 => U32,
	i64 => I64,
	u64 => U64,
	i128 => I128,
	u128 => U128,
	I256 => I256,
	U256 => U256,
	f32 => F32,
	f64 => F64,
	String => String,
);

impl GetType for () {
	fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::unit()
	}
}

impl<T: GetType> GetType for Vec<T> {
	fn make_type(builder: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::array(T::make_type(builder))
	}
}

impl<T: GetType> GetType for Option<T> {
	fn make_type(builder: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::option(T::make_type(builder))
	}
}

impl<T: GetType, E: GetType> GetType for Result<T, E> {
	fn make_type(builder: &mut dyn TypeBuilder) -> AlgebraicType {
		let ok = T::make_type(builder);
		let err = E::make_type(builder);
		AlgebraicType::result(ok, err)
	}
}

impl<T: GetType> GetType for Box<T> {
	fn make_type(builder: &mut dyn TypeBuilder) -> AlgebraicType {
		T::make_type(builder)
	}
}

impl GetType for Uuid {
	fn make_type(_: &mut dyn TypeBuilder) -> AlgebraicType {
		AlgebraicType::uuid()
	}
}
