// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_codec::{Decode, DecodeError, Encode, EncodeError, Reader, Writer, impl_product_codec};
use modkit_type::AlgebraicTypeRef;
use serde::{Deserialize, Serialize};

/// Ordered list of column positions within a table's row type.
pub type ColList = Vec<u16>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableType {
	System,
	User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableAccess {
	Public,
	Private,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawIndexAlgorithm {
	BTree {
		columns: ColList,
	},
	Hash {
		columns: ColList,
	},
	Direct {
		column: u16,
	},
}

impl RawIndexAlgorithm {
	pub fn columns(&self) -> ColList {
		match self {
			RawIndexAlgorithm::BTree {
				columns,
			}
			| RawIndexAlgorithm::Hash {
				columns,
			} => columns.clone(),
			RawIndexAlgorithm::Direct {
				column,
			} => vec![*column],
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIndexDef {
	pub source_name: Option<String>,
	pub accessor_name: Option<String>,
	pub algorithm: RawIndexAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawConstraintData {
	Unique {
		columns: ColList,
	},
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConstraintDef {
	pub source_name: Option<String>,
	pub data: RawConstraintData,
}

impl RawConstraintDef {
	/// Whether this is a unique constraint over exactly `column`.
	pub fn is_unique_on(&self, column: u16) -> bool {
		match &self.data {
			RawConstraintData::Unique {
				columns,
			} => columns.as_slice() == [column],
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSequenceDef {
	pub source_name: Option<String>,
	pub column: u16,
	pub start: Option<i128>,
	pub min_value: Option<i128>,
	pub max_value: Option<i128>,
	pub increment: i128,
}

impl RawSequenceDef {
	/// Counter over `column` starting wherever the host decides, stepping by one.
	pub fn increment_by_one(column: u16) -> Self {
		Self {
			source_name: None,
			column,
			start: None,
			min_value: None,
			max_value: None,
			increment: 1,
		}
	}
}

/// A column default, stored as the already encoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumnDefaultValue {
	pub col_id: u16,
	pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTableDef {
	pub source_name: String,
	pub product_type_ref: AlgebraicTypeRef,
	pub primary_key: ColList,
	pub indexes: Vec<RawIndexDef>,
	pub constraints: Vec<RawConstraintDef>,
	pub sequences: Vec<RawSequenceDef>,
	pub table_type: TableType,
	pub table_access: TableAccess,
	pub default_values: Vec<RawColumnDefaultValue>,
	pub is_event: bool,
}

impl Encode for TableType {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u8(match self {
			TableType::System => 0,
			TableType::User => 1,
		});
		Ok(())
	}
}

impl Decode for TableType {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(TableType::System),
			1 => Ok(TableType::User),
			tag => Err(DecodeError::InvalidTag {
				context: "table type",
				tag,
			}),
		}
	}
}

impl Encode for TableAccess {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u8(match self {
			TableAccess::Public => 0,
			TableAccess::Private => 1,
		});
		Ok(())
	}
}

impl Decode for TableAccess {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(TableAccess::Public),
			1 => Ok(TableAccess::Private),
			tag => Err(DecodeError::InvalidTag {
				context: "table access",
				tag,
			}),
		}
	}
}

impl Encode for RawIndexAlgorithm {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		match self {
			RawIndexAlgorithm::BTree {
				columns,
			} => {
				w.write_u8(0);
				columns.encode(w)
			}
			RawIndexAlgorithm::Hash {
				columns,
			} => {
				w.write_u8(1);
				columns.encode(w)
			}
			RawIndexAlgorithm::Direct {
				column,
			} => {
				w.write_u8(2);
				column.encode(w)
			}
		}
	}
}

impl Decode for RawIndexAlgorithm {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(RawIndexAlgorithm::BTree {
				columns: ColList::decode(r)?,
			}),
			1 => Ok(RawIndexAlgorithm::Hash {
				columns: ColList::decode(r)?,
			}),
			2 => Ok(RawIndexAlgorithm::Direct {
				column: r.read_u16()?,
			}),
			tag => Err(DecodeError::InvalidTag {
				context: "index algorithm",
				tag,
			}),
		}
	}
}

impl Encode for RawConstraintData {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		match self {
			RawConstraintData::Unique {
				columns,
			} => {
				w.write_u8(0);
				columns.encode(w)
			}
		}
	}
}

impl Decode for RawConstraintData {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(RawConstraintData::Unique {
				columns: ColList::decode(r)?,
			}),
			tag => Err(DecodeError::InvalidTag {
				context: "constraint",
				tag,
			}),
		}
	}
}

impl_product_codec!(RawIndexDef {
	source_name,
	accessor_name,
	algorithm
});

impl_product_codec!(RawConstraintDef {
	source_name,
	data
});

impl_product_codec!(RawSequenceDef {
	source_name,
	column,
	start,
	min_value,
	max_value,
	increment
});

impl_product_codec!(RawColumnDefaultValue {
	col_id,
	value
});

impl_product_codec!(RawTableDef {
	source_name,
	product_type_ref,
	primary_key,
	indexes,
	constraints,
	sequences,
	table_type,
	table_access,
	default_values,
	is_event
});
