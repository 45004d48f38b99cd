// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use bitflags::bitflags;

bitflags! {
	/// Column attributes declared on a table field.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct FieldConstraint: u8 {
		const INDEXED = 0b0001;
		const AUTO_INC = 0b0010;
		const UNIQUE = 0b0100;
		const PRIMARY_KEY = 0b1000;

		const IDENTITY = Self::UNIQUE.bits() | Self::AUTO_INC.bits();
		const PRIMARY_KEY_AUTO = Self::PRIMARY_KEY.bits() | Self::AUTO_INC.bits();
	}
}

/// What a constraint makes the builder add to the table, besides an optional sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKey {
	PrimaryKey,
	Unique,
	Indexed,
	None,
}

impl FieldConstraint {
	/// The strongest key the bits ask for: primary key over unique over plain index.
	pub(crate) fn key(self) -> ColumnKey {
		if self.contains(FieldConstraint::PRIMARY_KEY) {
			ColumnKey::PrimaryKey
		} else if self.contains(FieldConstraint::UNIQUE) {
			ColumnKey::Unique
		} else if self.contains(FieldConstraint::INDEXED) {
			ColumnKey::Indexed
		} else {
			ColumnKey::None
		}
	}

	pub fn is_auto_inc(self) -> bool {
		self.contains(FieldConstraint::AUTO_INC)
	}
}
