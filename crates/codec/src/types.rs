// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Self-describing encoding of the type model, so the schema document can carry its typespace.

use modkit_type::{
	AlgebraicType, AlgebraicTypeRef, AlgebraicTypeTag, ArrayType, ProductType, ProductTypeElement, SumType,
	SumTypeVariant, Typespace,
};

use crate::{Decode, DecodeError, Encode, EncodeError, Reader, Writer};

impl Encode for AlgebraicTypeRef {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u32(self.0);
		Ok(())
	}
}

impl Decode for AlgebraicTypeRef {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		r.read_u32().map(AlgebraicTypeRef)
	}
}

impl Encode for AlgebraicType {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u8(self.tag() as u8);
		match self {
			AlgebraicType::Ref(r) => r.encode(w),
			AlgebraicType::Sum(sum) => sum.encode(w),
			AlgebraicType::Product(product) => product.encode(w),
			AlgebraicType::Array(array) => array.encode(w),
			_ => Ok(()),
		}
	}
}

impl Decode for AlgebraicType {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		let raw = r.read_u8()?;
		let tag = AlgebraicTypeTag::try_from(raw).map_err(|tag| DecodeError::InvalidTag {
			context: "algebraic type",
			tag,
		})?;
		Ok(match tag {
			AlgebraicTypeTag::Ref => AlgebraicType::Ref(AlgebraicTypeRef::decode(r)?),
			AlgebraicTypeTag::Sum => AlgebraicType::Sum(SumType::decode(r)?),
			AlgebraicTypeTag::Product => AlgebraicType::Product(ProductType::decode(r)?),
			AlgebraicTypeTag::Array => AlgebraicType::Array(ArrayType::decode(r)?),
			primitive => primitive.primitive().ok_or(DecodeError::InvalidTag {
				context: "algebraic type",
				tag: raw,
			})?,
		})
	}
}

impl Encode for ArrayType {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.elem_ty.encode(w)
	}
}

impl Decode for ArrayType {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		Ok(ArrayType {
			elem_ty: Box::new(AlgebraicType::decode(r)?),
		})
	}
}

impl Encode for ProductTypeElement {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.name.encode(w)?;
		self.algebraic_type.encode(w)
	}
}

impl Decode for ProductTypeElement {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		let name = Option::<String>::decode(r)?;
		let algebraic_type = AlgebraicType::decode(r)?;
		Ok(ProductTypeElement::new(name, algebraic_type))
	}
}

impl Encode for ProductType {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.elements.encode(w)
	}
}

impl Decode for ProductType {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		Vec::<ProductTypeElement>::decode(r).map(ProductType::new)
	}
}

impl Encode for SumTypeVariant {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.name.encode(w)?;
		self.algebraic_type.encode(w)
	}
}

impl Decode for SumTypeVariant {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		let name = Option::<String>::decode(r)?;
		let algebraic_type = AlgebraicType::decode(r)?;
		Ok(SumTypeVariant::new(name, algebraic_type))
	}
}

impl Encode for SumType {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.variants.encode(w)
	}
}

impl Decode for SumType {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		Vec::<SumTypeVariant>::decode(r).map(SumType::new)
	}
}

impl Encode for Typespace {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		self.types.encode(w)
	}
}

impl Decode for Typespace {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		Vec::<AlgebraicType>::decode(r).map(Typespace::new)
	}
}
