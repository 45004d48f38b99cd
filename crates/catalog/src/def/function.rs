// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_codec::{Decode, DecodeError, Encode, EncodeError, Reader, Writer, impl_product_codec};
use modkit_type::{AlgebraicType, ProductType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionVisibility {
	/// Callable by the host only, e.g. by the scheduler or on connection events.
	Private,
	ClientCallable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
	Init,
	OnConnect,
	OnDisconnect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReducerDef {
	pub source_name: String,
	pub params: ProductType,
	pub visibility: FunctionVisibility,
	pub ok_return_type: AlgebraicType,
	pub err_return_type: AlgebraicType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProcedureDef {
	pub source_name: String,
	pub params: ProductType,
	pub return_type: AlgebraicType,
	pub visibility: FunctionVisibility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawViewDef {
	pub source_name: String,
	/// Position of the view's handler among the handlers of the same kind.
	pub index: u32,
	pub is_public: bool,
	pub is_anonymous: bool,
	pub params: ProductType,
	pub return_type: AlgebraicType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScheduleDef {
	pub source_name: Option<String>,
	pub table_name: String,
	pub schedule_at_col: u16,
	pub function_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLifeCycleReducerDef {
	pub lifecycle_spec: Lifecycle,
	pub function_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRowLevelSecurityDef {
	pub sql: String,
}

impl Encode for FunctionVisibility {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u8(match self {
			FunctionVisibility::Private => 0,
			FunctionVisibility::ClientCallable => 1,
		});
		Ok(())
	}
}

impl Decode for FunctionVisibility {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(FunctionVisibility::Private),
			1 => Ok(FunctionVisibility::ClientCallable),
			tag => Err(DecodeError::InvalidTag {
				context: "function visibility",
				tag,
			}),
		}
	}
}

impl Encode for Lifecycle {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u8(match self {
			Lifecycle::Init => 0,
			Lifecycle::OnConnect => 1,
			Lifecycle::OnDisconnect => 2,
		});
		Ok(())
	}
}

impl Decode for Lifecycle {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		match r.read_u8()? {
			0 => Ok(Lifecycle::Init),
			1 => Ok(Lifecycle::OnConnect),
			2 => Ok(Lifecycle::OnDisconnect),
			tag => Err(DecodeError::InvalidTag {
				context: "lifecycle",
				tag,
			}),
		}
	}
}

impl_product_codec!(RawReducerDef {
	source_name,
	params,
	visibility,
	ok_return_type,
	err_return_type
});

impl_product_codec!(RawProcedureDef {
	source_name,
	params,
	return_type,
	visibility
});

impl_product_codec!(RawViewDef {
	source_name,
	index,
	is_public,
	is_anonymous,
	params,
	return_type
});

impl_product_codec!(RawScheduleDef {
	source_name,
	table_name,
	schedule_at_col,
	function_name
});

impl_product_codec!(RawLifeCycleReducerDef {
	lifecycle_spec,
	function_name
});

impl_product_codec!(RawRowLevelSecurityDef {
	sql
});
