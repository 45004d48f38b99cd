// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use modkit_codec::impl_product_codec;
use modkit_type::AlgebraicTypeRef;

/// A type name with the namespace it was declared in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawScopedTypeName {
	pub scope: Vec<String>,
	pub source_name: String,
}

impl RawScopedTypeName {
	/// Splits a dotted name: `game.state.Player` has scope `[game, state]` and name `Player`.
	pub fn parse(qualified: &str) -> Self {
		let mut parts: Vec<String> = qualified.split('.').map(str::to_string).collect();
		let source_name = parts.pop().unwrap_or_default();
		Self {
			scope: parts,
			source_name,
		}
	}

	pub fn unscoped(name: impl Into<String>) -> Self {
		Self {
			scope: vec![],
			source_name: name.into(),
		}
	}

	pub fn qualified(&self) -> String {
		self.to_string()
	}
}

impl Display for RawScopedTypeName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for segment in &self.scope {
			write!(f, "{}.", segment)?;
		}
		f.write_str(&self.source_name)
	}
}

impl_product_codec!(RawScopedTypeName {
	scope,
	source_name
});

/// A named type exported by the module; `ty` points into the typespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTypeDef {
	pub source_name: RawScopedTypeName,
	pub ty: AlgebraicTypeRef,
	pub custom_ordering: bool,
}

impl_product_codec!(RawTypeDef {
	source_name,
	ty,
	custom_ordering
});

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_scoped_name() {
		let name = RawScopedTypeName::parse("game.state.Player");
		assert_eq!(name.scope, vec!["game".to_string(), "state".to_string()]);
		assert_eq!(name.source_name, "Player");
		assert_eq!(name.qualified(), "game.state.Player");
	}

	#[test]
	fn test_parse_plain_name() {
		let name = RawScopedTypeName::parse("Player");
		assert!(name.scope.is_empty());
		assert_eq!(name.source_name, "Player");
	}
}
