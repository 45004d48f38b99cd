// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_codec::{Decode, DecodeError, Encode, EncodeError, Reader, Writer, impl_product_codec};
use serde::{Deserialize, Serialize};

/// How the host derives canonical names from source names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseConversionPolicy {
	None,
	#[default]
	SnakeCase,
	CamelCase,
	PascalCase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMapping {
	pub source_name: String,
	pub canonical_name: String,
}

/// A canonical name pinned by the module author, bypassing case conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplicitNameEntry {
	Table(NameMapping),
	Function(NameMapping),
	Index(NameMapping),
}

impl ExplicitNameEntry {
	pub fn mapping(&self) -> &NameMapping {
		match self {
			ExplicitNameEntry::Table(m) | ExplicitNameEntry::Function(m) | ExplicitNameEntry::Index(m) => m,
		}
	}

	fn same_slot(&self, other: &ExplicitNameEntry) -> bool {
		std::mem::discriminant(self) == std::mem::discriminant(other)
			&& self.mapping().source_name == other.mapping().source_name
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitNames {
	pub entries: Vec<ExplicitNameEntry>,
}

impl ExplicitNames {
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Adds the entry, replacing an earlier one of the same kind and source name.
	pub fn upsert(&mut self, entry: ExplicitNameEntry) {
		match self.entries.iter_mut().find(|existing| existing.same_slot(&entry)) {
			Some(existing) => *existing = entry,
			None => self.entries.push(entry),
		}
	}
}

impl Encode for CaseConversionPolicy {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u8(match self {
			CaseConversionPolicy::None => 0,
			CaseConversionPolicy::SnakeCase => 1,
			CaseConversionPolicy::CamelCase => 2,
			CaseConversionPolicy::PascalCase => 3,
		});
		Ok(())
	}
}

impl Decode for CaseConversionPolicy {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(CaseConversionPolicy::None),
			1 => Ok(CaseConversionPolicy::SnakeCase),
			2 => Ok(CaseConversionPolicy::CamelCase),
			3 => Ok(CaseConversionPolicy::PascalCase),
			tag => Err(DecodeError::InvalidTag {
				context: "case conversion policy",
				tag,
			}),
		}
	}
}

impl_product_codec!(NameMapping {
	source_name,
	canonical_name
});

impl Encode for ExplicitNameEntry {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		let tag = match self {
			ExplicitNameEntry::Table(_) => 0,
			ExplicitNameEntry::Function(_) => 1,
			ExplicitNameEntry::Index(_) => 2,
		};
		w.write_u8(tag);
		self.mapping().encode(w)
	}
}

impl Decode for ExplicitNameEntry {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(ExplicitNameEntry::Table(NameMapping::decode(r)?)),
			1 => Ok(ExplicitNameEntry::Function(NameMapping::decode(r)?)),
			2 => Ok(ExplicitNameEntry::Index(NameMapping::decode(r)?)),
			tag => Err(DecodeError::InvalidTag {
				context: "explicit name",
				tag,
			}),
		}
	}
}

impl_product_codec!(ExplicitNames {
	entries
});
