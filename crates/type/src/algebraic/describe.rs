// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Result, Write};

use super::AlgebraicType;

impl AlgebraicType {
	/// Human readable rendering of the type's structure, e.g. `Product{x: U32, tags: Array<String>}`.
	pub fn describe(&self) -> String {
		self.to_string()
	}
}

impl Display for AlgebraicType {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match self {
			AlgebraicType::Ref(r) => write!(f, "Ref({})", r.0),
			AlgebraicType::Array(array) => write!(f, "Array<{}>", array.elem_ty),
			AlgebraicType::Product(product) => {
				f.write_str("Product{")?;
				for (i, element) in product.elements.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					if let Some(name) = element.name() {
						write!(f, "{}: ", name)?;
					}
					write!(f, "{}", element.algebraic_type)?;
				}
				f.write_char('}')
			}
			AlgebraicType::Sum(sum) if sum.is_option() => {
				write!(f, "Option<{}>", sum.variants[0].algebraic_type)
			}
			AlgebraicType::Sum(sum) => {
				f.write_str("Sum{")?;
				for (i, variant) in sum.variants.iter().enumerate() {
					if i > 0 {
						f.write_str(" | ")?;
					}
					write!(f, "{}: {}", variant.name().unwrap_or(""), variant.algebraic_type)?;
				}
				f.write_char('}')
			}
			AlgebraicType::String => f.write_str("String"),
			AlgebraicType::Bool => f.write_str("Bool"),
			AlgebraicType::I8 => f.write_str("I8"),
			AlgebraicType::U8 => f.write_str("U8"),
			AlgebraicType::I16 => f.write_str("I16"),
			AlgebraicType::U16 => f.write_str("U16"),
			AlgebraicType::I32 => f.write_str("I32"),
			AlgebraicType::U32 => f.write_str("U32"),
			AlgebraicType::I64 => f.write_str("I64"),
			AlgebraicType::U64 => f.write_str("U64"),
			AlgebraicType::I128 => f.write_str("I128"),
			AlgebraicType::U128 => f.write_str("U128"),
			AlgebraicType::I256 => f.write_str("I256"),
			AlgebraicType::U256 => f.write_str("U256"),
			AlgebraicType::F32 => f.write_str("F32"),
			AlgebraicType::F64 => f.write_str("F64"),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::algebraic::{AlgebraicType, AlgebraicTypeRef};

	#[test]
	fn test_primitives() {
		assert_eq!(AlgebraicType::Bool.describe(), "Bool");
		assert_eq!(AlgebraicType::U256.describe(), "U256");
		assert_eq!(AlgebraicType::String.describe(), "String");
	}

	#[test]
	fn test_nested() {
		let ty = AlgebraicType::product([
			("x", AlgebraicType::U32),
			("tags", AlgebraicType::array(AlgebraicType::String)),
			("next", AlgebraicType::option(AlgebraicType::Ref(AlgebraicTypeRef(3)))),
		]);
		assert_eq!(ty.describe(), "Product{x: U32, tags: Array<String>, next: Option<Ref(3)>}");
	}

	#[test]
	fn test_sum_and_unit() {
		let ty = AlgebraicType::sum([("a", AlgebraicType::I8), ("b", AlgebraicType::unit())]);
		assert_eq!(ty.describe(), "Sum{a: I8 | b: Product{}}");
	}
}
