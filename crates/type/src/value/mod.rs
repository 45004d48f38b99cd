// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod float;
mod wide;

use std::fmt::{Display, Formatter};

pub use float::{F32, F64};
pub use wide::{I256, U256};

/// A dynamically typed value; its shape is given by an `AlgebraicType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlgebraicValue {
	Bool(bool),
	I8(i8),
	U8(u8),
	I16(i16),
	U16(u16),
	I32(i32),
	U32(u32),
	I64(i64),
	U64(u64),
	I128(i128),
	U128(u128),
	I256(I256),
	U256(U256),
	F32(F32),
	F64(F64),
	String(String),
	Array(Vec<AlgebraicValue>),
	Product(Vec<AlgebraicValue>),
	Sum {
		tag: u8,
		value: Box<AlgebraicValue>,
	},
}

impl AlgebraicValue {
	pub fn unit() -> Self {
		AlgebraicValue::Product(vec![])
	}

	pub fn sum(tag: u8, value: AlgebraicValue) -> Self {
		AlgebraicValue::Sum {
			tag,
			value: Box::new(value),
		}
	}

	pub fn some(value: AlgebraicValue) -> Self {
		Self::sum(0, value)
	}

	pub fn none() -> Self {
		Self::sum(1, Self::unit())
	}

	pub fn bytes(bytes: &[u8]) -> Self {
		AlgebraicValue::Array(bytes.iter().copied().map(AlgebraicValue::U8).collect())
	}

	/// Short name of the value's variant, used in mismatch diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			AlgebraicValue::Bool(_) => "Bool",
			AlgebraicValue::I8(_) => "I8",
			AlgebraicValue::U8(_) => "U8",
			AlgebraicValue::I16(_) => "I16",
			AlgebraicValue::U16(_) => "U16",
			AlgebraicValue::I32(_) => "I32",
			AlgebraicValue::U32(_) => "U32",
			AlgebraicValue::I64(_) => "I64",
			AlgebraicValue::U64(_) => "U64",
			AlgebraicValue::I128(_) => "I128",
			AlgebraicValue::U128(_) => "U128",
			AlgebraicValue::I256(_) => "I256",
			AlgebraicValue::U256(_) => "U256",
			AlgebraicValue::F32(_) => "F32",
			AlgebraicValue::F64(_) => "F64",
			AlgebraicValue::String(_) => "String",
			AlgebraicValue::Array(_) => "Array",
			AlgebraicValue::Product(_) => "Product",
			AlgebraicValue::Sum {
				..
			} => "Sum",
		}
	}
}

impl Display for AlgebraicValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AlgebraicValue::Bool(v) => write!(f, "{}", v),
			AlgebraicValue::I8(v) => write!(f, "{}", v),
			AlgebraicValue::U8(v) => write!(f, "{}", v),
			AlgebraicValue::I16(v) => write!(f, "{}", v),
			AlgebraicValue::U16(v) => write!(f, "{}", v),
			AlgebraicValue::I32(v) => write!(f, "{}", v),
			AlgebraicValue::U32(v) => write!(f, "{}", v),
			AlgebraicValue::I64(v) => write!(f, "{}", v),
			AlgebraicValue::U64(v) => write!(f, "{}", v),
			AlgebraicValue::I128(v) => write!(f, "{}", v),
			AlgebraicValue::U128(v) => write!(f, "{}", v),
			AlgebraicValue::I256(v) => write!(f, "{}", v),
			AlgebraicValue::U256(v) => write!(f, "{}", v),
			AlgebraicValue::F32(v) => write!(f, "{}", v),
			AlgebraicValue::F64(v) => write!(f, "{}", v),
			AlgebraicValue::String(v) => write!(f, "{:?}", v),
			AlgebraicValue::Array(items) | AlgebraicValue::Product(items) => {
				let (open, close) = match self {
					AlgebraicValue::Array(_) => ('[', ']'),
					_ => ('(', ')'),
				};
				write!(f, "{}", open)?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", item)?;
				}
				write!(f, "{}", close)
			}
			AlgebraicValue::Sum {
				tag,
				value,
			} => write!(f, "#{}({})", tag, value),
		}
	}
}

macro_rules! impl_from_primitive {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for AlgebraicValue {
				fn from(v: $ty) -> Self {
					AlgebraicValue::$variant(v.into())
				}
			}
		)*
	};
}

impl_from_primitive!(
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

impl From<&str> for AlgebraicValue {
	fn from(v: &str) -> Self {
		AlgebraicValue::String(v.to_string())
	}
}
