// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Encoding of dynamic values against a type.
//!
//! The encoding carries no framing for products, so encoder and decoder walk the type in the same
//! order; references are resolved through the typespace.

use modkit_type::{AlgebraicType, AlgebraicTypeRef, AlgebraicValue, F32, F64, I256, Typespace, U256};

use crate::{Decode, DecodeError, Encode, EncodeError, Reader, Writer};

/// Deepest nesting of types the value codec walks before giving up.
pub const MAX_DEPTH: usize = 256;

/// Follows a chain of references to the first non-reference type.
///
/// A dangling reference, or a chain that comes back to itself, yields the reference that started
/// the chain as the error.
fn resolve<'a>(typespace: &'a Typespace, r: AlgebraicTypeRef) -> Result<&'a AlgebraicType, (u32, usize)> {
	typespace.resolve_ref(r).ok_or((r.0, typespace.len()))
}

pub fn encode_value(
	w: &mut Writer,
	value: &AlgebraicValue,
	ty: &AlgebraicType,
	typespace: &Typespace,
) -> Result<(), EncodeError> {
	encode_nested(w, value, ty, typespace, 0)
}

fn encode_nested(
	w: &mut Writer,
	value: &AlgebraicValue,
	ty: &AlgebraicType,
	typespace: &Typespace,
	depth: usize,
) -> Result<(), EncodeError> {
	if depth >= MAX_DEPTH {
		return Err(EncodeError::RecursionLimit(MAX_DEPTH));
	}
	let mismatch = || EncodeError::TypeMismatch {
		expected: ty.describe(),
		found: value.kind(),
	};

	match (ty, value) {
		(AlgebraicType::Ref(r), _) => {
			let target = resolve(typespace, *r).map_err(|(index, len)| EncodeError::InvalidRef {
				index,
				len,
			})?;
			encode_nested(w, value, target, typespace, depth + 1)
		}
		(AlgebraicType::Bool, AlgebraicValue::Bool(v)) => v.encode(w),
		(AlgebraicType::I8, AlgebraicValue::I8(v)) => v.encode(w),
		(AlgebraicType::U8, AlgebraicValue::U8(v)) => v.encode(w),
		(AlgebraicType::I16, AlgebraicValue::I16(v)) => v.encode(w),
		(AlgebraicType::U16, AlgebraicValue::U16(v)) => v.encode(w),
		(AlgebraicType::I32, AlgebraicValue::I32(v)) => v.encode(w),
		(AlgebraicType::U32, AlgebraicValue::U32(v)) => v.encode(w),
		(AlgebraicType::I64, AlgebraicValue::I64(v)) => v.encode(w),
		(AlgebraicType::U64, AlgebraicValue::U64(v)) => v.encode(w),
		(AlgebraicType::I128, AlgebraicValue::I128(v)) => v.encode(w),
		(AlgebraicType::U128, AlgebraicValue::U128(v)) => v.encode(w),
		(AlgebraicType::I256, AlgebraicValue::I256(v)) => v.encode(w),
		(AlgebraicType::U256, AlgebraicValue::U256(v)) => v.encode(w),
		(AlgebraicType::F32, AlgebraicValue::F32(v)) => v.encode(w),
		(AlgebraicType::F64, AlgebraicValue::F64(v)) => v.encode(w),
		(AlgebraicType::String, AlgebraicValue::String(v)) => v.encode(w),
		(AlgebraicType::Array(array), AlgebraicValue::Array(items)) => {
			w.write_len(items.len())?;
			for item in items {
				encode_nested(w, item, &array.elem_ty, typespace, depth + 1)?;
			}
			Ok(())
		}
		(AlgebraicType::Product(product), AlgebraicValue::Product(fields)) => {
			if product.elements.len() != fields.len() {
				return Err(mismatch());
			}
			for (element, field) in product.elements.iter().zip(fields) {
				encode_nested(w, field, &element.algebraic_type, typespace, depth + 1)?;
			}
			Ok(())
		}
		(
			AlgebraicType::Sum(sum),
			AlgebraicValue::Sum {
				tag,
				value,
			},
		) => {
			let variant = sum.variants.get(*tag as usize).ok_or(EncodeError::InvalidTag {
				tag: *tag,
				variants: sum.variants.len(),
			})?;
			w.write_u8(*tag);
			encode_nested(w, value, &variant.algebraic_type, typespace, depth + 1)
		}
		_ => Err(mismatch()),
	}
}

pub fn decode_value(
	r: &mut Reader<'_>,
	ty: &AlgebraicType,
	typespace: &Typespace,
) -> Result<AlgebraicValue, DecodeError> {
	decode_nested(r, ty, typespace, 0)
}

fn decode_nested(
	r: &mut Reader<'_>,
	ty: &AlgebraicType,
	typespace: &Typespace,
	depth: usize,
) -> Result<AlgebraicValue, DecodeError> {
	if depth >= MAX_DEPTH {
		return Err(DecodeError::RecursionLimit(MAX_DEPTH));
	}

	Ok(match ty {
		AlgebraicType::Ref(reference) => {
			let target = resolve(typespace, *reference).map_err(|(index, len)| DecodeError::InvalidRef {
				index,
				len,
			})?;
			return decode_nested(r, target, typespace, depth + 1);
		}
		AlgebraicType::Bool => AlgebraicValue::Bool(r.read_bool()?),
		AlgebraicType::I8 => AlgebraicValue::I8(r.read_i8()?),
		AlgebraicType::U8 => AlgebraicValue::U8(r.read_u8()?),
		AlgebraicType::I16 => AlgebraicValue::I16(r.read_i16()?),
		AlgebraicType::U16 => AlgebraicValue::U16(r.read_u16()?),
		AlgebraicType::I32 => AlgebraicValue::I32(r.read_i32()?),
		AlgebraicType::U32 => AlgebraicValue::U32(r.read_u32()?),
		AlgebraicType::I64 => AlgebraicValue::I64(r.read_i64()?),
		AlgebraicType::U64 => AlgebraicValue::U64(r.read_u64()?),
		AlgebraicType::I128 => AlgebraicValue::I128(r.read_i128()?),
		AlgebraicType::U128 => AlgebraicValue::U128(r.read_u128()?),
		AlgebraicType::I256 => AlgebraicValue::I256(I256::decode(r)?),
		AlgebraicType::U256 => AlgebraicValue::U256(U256::decode(r)?),
		AlgebraicType::F32 => AlgebraicValue::F32(F32::decode(r)?),
		AlgebraicType::F64 => AlgebraicValue::F64(F64::decode(r)?),
		AlgebraicType::String => AlgebraicValue::String(r.read_string()?),
		AlgebraicType::Array(array) => {
			let len = r.read_len()?;
			let mut items = Vec::with_capacity(len.min(r.remaining()));
			for _ in 0..len {
				items.push(decode_nested(r, &array.elem_ty, typespace, depth + 1)?);
			}
			AlgebraicValue::Array(items)
		}
		AlgebraicType::Product(product) => {
			let mut fields = Vec::with_capacity(product.elements.len());
			for element in &product.elements {
				fields.push(decode_nested(r, &element.algebraic_type, typespace, depth + 1)?);
			}
			AlgebraicValue::Product(fields)
		}
		AlgebraicType::Sum(sum) => {
			let tag = r.read_u8()?;
			let variant = sum.variants.get(tag as usize).ok_or(DecodeError::InvalidTag {
				context: "sum value",
				tag,
			})?;
			AlgebraicValue::sum(tag, decode_nested(r, &variant.algebraic_type, typespace, depth + 1)?)
		}
	})
}
