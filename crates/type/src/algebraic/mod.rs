// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod describe;
mod product;
mod sum;
mod typespace;

use std::fmt::{Display, Formatter};

pub use product::{ProductType, ProductTypeElement};
pub use sum::{SumType, SumTypeVariant};
pub use typespace::Typespace;

/// Field names that mark a single-field product as a built-in special type.
pub const IDENTITY_TAG: &str = "__identity__";
pub const CONNECTION_ID_TAG: &str = "__connection_id__";
pub const TIMESTAMP_TAG: &str = "__timestamp_micros_since_unix_epoch__";
pub const TIME_DURATION_TAG: &str = "__time_duration_micros__";
pub const UUID_TAG: &str = "__uuid__";

pub const SPECIAL_TAGS: [&str; 5] = [IDENTITY_TAG, CONNECTION_ID_TAG, TIMESTAMP_TAG, TIME_DURATION_TAG, UUID_TAG];

/// Index of a type inside a [`Typespace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlgebraicTypeRef(pub u32);

impl AlgebraicTypeRef {
	pub fn idx(self) -> usize {
		self.0 as usize
	}
}

impl Display for AlgebraicTypeRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "&{}", self.0)
	}
}

/// Element type of an array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
	pub elem_ty: Box<AlgebraicType>,
}

/// A structural type.
///
/// Primitives, arrays, unnamed units, the special single-field products and the option, result
/// and schedule-at sums are always spelled out inline. Every other product and sum is interned in
/// the [`Typespace`] under a name and referred to with [`AlgebraicType::Ref`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlgebraicType {
	/// Reference to a type interned in the typespace.
	Ref(AlgebraicTypeRef),
	/// Tagged union of named variants.
	Sum(SumType),
	/// Record of (optionally) named fields. Zero fields is the unit type.
	Product(ProductType),
	Array(ArrayType),
	String,
	Bool,
	I8,
	U8,
	I16,
	U16,
	I32,
	U32,
	I64,
	U64,
	I128,
	U128,
	I256,
	U256,
	F32,
	F64,
}

/// Wire tag of each [`AlgebraicType`] variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgebraicTypeTag {
	Ref = 0,
	Sum = 1,
	Product = 2,
	Array = 3,
	String = 4,
	Bool = 5,
	I8 = 6,
	U8 = 7,
	I16 = 8,
	U16 = 9,
	I32 = 10,
	U32 = 11,
	I64 = 12,
	U64 = 13,
	I128 = 14,
	U128 = 15,
	I256 = 16,
	U256 = 17,
	F32 = 18,
	F64 = 19,
}

impl TryFrom<u8> for AlgebraicTypeTag {
	type Error = u8;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		use AlgebraicTypeTag::*;
		Ok(match value {
			0 => Ref,
			1 => Sum,
			2 => Product,
			3 => Array,
			4 => String,
			5 => Bool,
			6 => I8,
			7 => U8,
			8 => I16,
			9 => U16,
			10 => I32,
			11 => U32,
			12 => I64,
			13 => U64,
			14 => I128,
			15 => U128,
			16 => I256,
			17 => U256,
			18 => F32,
			19 => F64,
			other => return Err(other),
		})
	}
}

impl AlgebraicTypeTag {
	/// The payload-free type for a primitive tag.
	pub fn primitive(self) -> Option<AlgebraicType> {
		use AlgebraicTypeTag as T;
		Some(match self {
			T::String => AlgebraicType::String,
			T::Bool => AlgebraicType::Bool,
			T::I8 => AlgebraicType::I8,
			T::U8 => AlgebraicType::U8,
			T::I16 => AlgebraicType::I16,
			T::U16 => AlgebraicType::U16,
			T::I32 => AlgebraicType::I32,
			T::U32 => AlgebraicType::U32,
			T::I64 => AlgebraicType::I64,
			T::U64 => AlgebraicType::U64,
			T::I128 => AlgebraicType::I128,
			T::U128 => AlgebraicType::U128,
			T::I256 => AlgebraicType::I256,
			T::U256 => AlgebraicType::U256,
			T::F32 => AlgebraicType::F32,
			T::F64 => AlgebraicType::F64,
			T::Ref | T::Sum | T::Product | T::Array => return None,
		})
	}
}

impl AlgebraicType {
	pub fn tag(&self) -> AlgebraicTypeTag {
		use AlgebraicTypeTag as T;
		match self {
			AlgebraicType::Ref(_) => T::Ref,
			AlgebraicType::Sum(_) => T::Sum,
			AlgebraicType::Product(_) => T::Product,
			AlgebraicType::Array(_) => T::Array,
			AlgebraicType::String => T::String,
			AlgebraicType::Bool => T::Bool,
			AlgebraicType::I8 => T::I8,
			AlgebraicType::U8 => T::U8,
			AlgebraicType::I16 => T::I16,
			AlgebraicType::U16 => T::U16,
			AlgebraicType::I32 => T::I32,
			AlgebraicType::U32 => T::U32,
			AlgebraicType::I64 => T::I64,
			AlgebraicType::U64 => T::U64,
			AlgebraicType::I128 => T::I128,
			AlgebraicType::U128 => T::U128,
			AlgebraicType::I256 => T::I256,
			AlgebraicType::U256 => T::U256,
			AlgebraicType::F32 => T::F32,
			AlgebraicType::F64 => T::F64,
		}
	}

	pub fn unit() -> Self {
		AlgebraicType::Product(ProductType::unit())
	}

	pub fn array(elem_ty: AlgebraicType) -> Self {
		AlgebraicType::Array(ArrayType {
			elem_ty: Box::new(elem_ty),
		})
	}

	pub fn bytes() -> Self {
		Self::array(AlgebraicType::U8)
	}

	pub fn product<N: Into<String>>(fields: impl IntoIterator<Item = (N, AlgebraicType)>) -> Self {
		AlgebraicType::Product(ProductType::new(
			fields.into_iter().map(|(name, ty)| ProductTypeElement::named(name, ty)).collect(),
		))
	}

	pub fn sum<N: Into<String>>(variants: impl IntoIterator<Item = (N, AlgebraicType)>) -> Self {
		AlgebraicType::Sum(SumType::new(
			variants.into_iter().map(|(name, ty)| SumTypeVariant::named(name, ty)).collect(),
		))
	}

	/// Sum of unit variants, the shape of a plain enum.
	pub fn simple_enum<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
		Self::sum(names.into_iter().map(|name| (name, AlgebraicType::unit())))
	}

	pub fn option(some: AlgebraicType) -> Self {
		Self::sum([("some", some), ("none", AlgebraicType::unit())])
	}

	pub fn result(ok: AlgebraicType, err: AlgebraicType) -> Self {
		Self::sum([("ok", ok), ("err", err)])
	}

	pub fn identity() -> Self {
		Self::product([(IDENTITY_TAG, AlgebraicType::U256)])
	}

	pub fn connection_id() -> Self {
		Self::product([(CONNECTION_ID_TAG, AlgebraicType::U128)])
	}

	pub fn timestamp() -> Self {
		Self::product([(TIMESTAMP_TAG, AlgebraicType::I64)])
	}

	pub fn time_duration() -> Self {
		Self::product([(TIME_DURATION_TAG, AlgebraicType::I64)])
	}

	pub fn uuid() -> Self {
		Self::product([(UUID_TAG, AlgebraicType::U128)])
	}

	pub fn schedule_at() -> Self {
		Self::sum([("Interval", Self::time_duration()), ("Time", Self::timestamp())])
	}

	pub fn is_primitive(&self) -> bool {
		let tag = self.tag() as u8;
		tag >= AlgebraicTypeTag::String as u8 && tag <= AlgebraicTypeTag::F64 as u8
	}

	pub fn is_ref(&self) -> bool {
		matches!(self, AlgebraicType::Ref(_))
	}

	pub fn is_unit(&self) -> bool {
		matches!(self, AlgebraicType::Product(p) if p.is_unit())
	}

	/// The marker field name if this is one of the built-in special products.
	pub fn special_tag(&self) -> Option<&str> {
		match self {
			AlgebraicType::Product(p) => p.special_tag(),
			_ => None,
		}
	}

	pub fn is_special(&self) -> bool {
		self.special_tag().is_some()
	}

	pub fn is_option(&self) -> bool {
		matches!(self, AlgebraicType::Sum(s) if s.is_option())
	}

	pub fn is_result(&self) -> bool {
		matches!(self, AlgebraicType::Sum(s) if s.is_result())
	}

	pub fn is_schedule_at(&self) -> bool {
		matches!(self, AlgebraicType::Sum(s) if s.is_schedule_at())
	}

	/// Option, result and schedule-at: sums that are never interned.
	pub fn is_inline_sum(&self) -> bool {
		matches!(self, AlgebraicType::Sum(s) if s.is_option() || s.is_result() || s.is_schedule_at())
	}

	pub fn as_type_ref(&self) -> Option<AlgebraicTypeRef> {
		match self {
			AlgebraicType::Ref(r) => Some(*r),
			_ => None,
		}
	}

	pub fn as_product(&self) -> Option<&ProductType> {
		match self {
			AlgebraicType::Product(p) => Some(p),
			_ => None,
		}
	}

	pub fn as_sum(&self) -> Option<&SumType> {
		match self {
			AlgebraicType::Sum(s) => Some(s),
			_ => None,
		}
	}
}

impl From<AlgebraicTypeRef> for AlgebraicType {
	fn from(r: AlgebraicTypeRef) -> Self {
		AlgebraicType::Ref(r)
	}
}

impl From<ProductType> for AlgebraicType {
	fn from(p: ProductType) -> Self {
		AlgebraicType::Product(p)
	}
}

impl From<SumType> for AlgebraicType {
	fn from(s: SumType) -> Self {
		AlgebraicType::Sum(s)
	}
}
