// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{AlgebraicType, AlgebraicTypeRef};

/// Append-only table of interned types; an [`AlgebraicTypeRef`] is an index into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typespace {
	pub types: Vec<AlgebraicType>,
}

impl Typespace {
	pub fn new(types: Vec<AlgebraicType>) -> Self {
		Self {
			types,
		}
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn get(&self, r: AlgebraicTypeRef) -> Option<&AlgebraicType> {
		self.types.get(r.idx())
	}

	pub fn add(&mut self, ty: AlgebraicType) -> AlgebraicTypeRef {
		let index = self.types.len() as u32;
		self.types.push(ty);
		AlgebraicTypeRef(index)
	}

	/// Reserves a slot for a type whose body is not known yet.
	pub fn reserve(&mut self) -> AlgebraicTypeRef {
		self.add(AlgebraicType::unit())
	}

	/// Replaces the body stored at `r`. Returns `false` if `r` is out of range.
	pub fn set(&mut self, r: AlgebraicTypeRef, ty: AlgebraicType) -> bool {
		match self.types.get_mut(r.idx()) {
			Some(slot) => {
				*slot = ty;
				true
			}
			None => false,
		}
	}

	/// Follows references until a non-reference type is reached.
	///
	/// Returns `None` for dangling references and for reference chains that loop.
	pub fn resolve<'a>(&'a self, mut ty: &'a AlgebraicType) -> Option<&'a AlgebraicType> {
		let mut hops = 0;
		while let AlgebraicType::Ref(r) = ty {
			if hops > self.types.len() {
				return None;
			}
			ty = self.get(*r)?;
			hops += 1;
		}
		Some(ty)
	}

	/// Resolves the type stored at `r`, following any further references.
	pub fn resolve_ref(&self, r: AlgebraicTypeRef) -> Option<&AlgebraicType> {
		self.resolve(self.get(r)?)
	}

	pub fn clear(&mut self) {
		self.types.clear();
	}
}
