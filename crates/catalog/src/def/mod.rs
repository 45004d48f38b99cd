// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! The raw module definition: the schema document a module hands to its host.
//!
//! The document is a list of sections. Every section kind appears at most once and empty sections
//! are left out, except the typespace which is always present.

mod function;
mod names;
mod table;
mod types;

pub use function::{
	FunctionVisibility, Lifecycle, RawLifeCycleReducerDef, RawProcedureDef, RawReducerDef, RawRowLevelSecurityDef,
	RawScheduleDef, RawViewDef,
};
use modkit_codec::{Decode, DecodeError, Encode, EncodeError, Reader, Writer, impl_product_codec};
use modkit_type::Typespace;
pub use names::{CaseConversionPolicy, ExplicitNameEntry, ExplicitNames, NameMapping};
pub use table::{
	ColList, RawColumnDefaultValue, RawConstraintData, RawConstraintDef, RawIndexAlgorithm, RawIndexDef,
	RawSequenceDef, RawTableDef, TableAccess, TableType,
};
pub use types::{RawScopedTypeName, RawTypeDef};

/// Version byte written ahead of the encoded [`RawModuleDef`].
pub const MODULE_DEF_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawModuleDefSection {
	Typespace(Typespace),
	Types(Vec<RawTypeDef>),
	Tables(Vec<RawTableDef>),
	Reducers(Vec<RawReducerDef>),
	Procedures(Vec<RawProcedureDef>),
	Views(Vec<RawViewDef>),
	Schedules(Vec<RawScheduleDef>),
	LifeCycleReducers(Vec<RawLifeCycleReducerDef>),
	RowLevelSecurity(Vec<RawRowLevelSecurityDef>),
	CaseConversionPolicy(CaseConversionPolicy),
	ExplicitNames(ExplicitNames),
}

impl RawModuleDefSection {
	pub fn tag(&self) -> u8 {
		match self {
			RawModuleDefSection::Typespace(_) => 0,
			RawModuleDefSection::Types(_) => 1,
			RawModuleDefSection::Tables(_) => 2,
			RawModuleDefSection::Reducers(_) => 3,
			RawModuleDefSection::Procedures(_) => 4,
			RawModuleDefSection::Views(_) => 5,
			RawModuleDefSection::Schedules(_) => 6,
			RawModuleDefSection::LifeCycleReducers(_) => 7,
			RawModuleDefSection::RowLevelSecurity(_) => 8,
			RawModuleDefSection::CaseConversionPolicy(_) => 9,
			RawModuleDefSection::ExplicitNames(_) => 10,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			RawModuleDefSection::Typespace(_) => "typespace",
			RawModuleDefSection::Types(_) => "types",
			RawModuleDefSection::Tables(_) => "tables",
			RawModuleDefSection::Reducers(_) => "reducers",
			RawModuleDefSection::Procedures(_) => "procedures",
			RawModuleDefSection::Views(_) => "views",
			RawModuleDefSection::Schedules(_) => "schedules",
			RawModuleDefSection::LifeCycleReducers(_) => "lifecycle_reducers",
			RawModuleDefSection::RowLevelSecurity(_) => "row_level_security",
			RawModuleDefSection::CaseConversionPolicy(_) => "case_conversion_policy",
			RawModuleDefSection::ExplicitNames(_) => "explicit_names",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawModuleDef {
	pub sections: Vec<RawModuleDefSection>,
}

macro_rules! section_accessor {
	($fn_name:ident, $variant:ident, $ty:ty) => {
		pub fn $fn_name(&self) -> &[$ty] {
			self.sections
				.iter()
				.find_map(|section| match section {
					RawModuleDefSection::$variant(items) => Some(items.as_slice()),
					_ => None,
				})
				.unwrap_or(&[])
		}
	};
}

impl RawModuleDef {
	pub fn typespace(&self) -> Option<&Typespace> {
		self.sections.iter().find_map(|section| match section {
			RawModuleDefSection::Typespace(typespace) => Some(typespace),
			_ => None,
		})
	}

	section_accessor!(types, Types, RawTypeDef);
	section_accessor!(tables, Tables, RawTableDef);
	section_accessor!(reducers, Reducers, RawReducerDef);
	section_accessor!(procedures, Procedures, RawProcedureDef);
	section_accessor!(views, Views, RawViewDef);
	section_accessor!(schedules, Schedules, RawScheduleDef);
	section_accessor!(lifecycle_reducers, LifeCycleReducers, RawLifeCycleReducerDef);
	section_accessor!(row_level_security, RowLevelSecurity, RawRowLevelSecurityDef);

	pub fn case_conversion_policy(&self) -> Option<CaseConversionPolicy> {
		self.sections.iter().find_map(|section| match section {
			RawModuleDefSection::CaseConversionPolicy(policy) => Some(*policy),
			_ => None,
		})
	}

	pub fn explicit_names(&self) -> Option<&ExplicitNames> {
		self.sections.iter().find_map(|section| match section {
			RawModuleDefSection::ExplicitNames(names) => Some(names),
			_ => None,
		})
	}

	pub fn table(&self, name: &str) -> Option<&RawTableDef> {
		self.tables().iter().find(|table| table.source_name == name)
	}

	pub fn section_names(&self) -> Vec<&'static str> {
		self.sections.iter().map(RawModuleDefSection::name).collect()
	}

	/// Encodes the document preceded by [`MODULE_DEF_VERSION`].
	pub fn to_versioned_bytes(&self) -> Result<Vec<u8>, EncodeError> {
		let mut w = Writer::new();
		w.write_u8(MODULE_DEF_VERSION);
		self.encode(&mut w)?;
		Ok(w.into_inner())
	}
}

impl Encode for RawModuleDefSection {
	fn encode(&self, w: &mut Writer) -> Result<(), EncodeError> {
		w.write_u8(self.tag());
		match self {
			RawModuleDefSection::Typespace(typespace) => typespace.encode(w),
			RawModuleDefSection::Types(types) => types.encode(w),
			RawModuleDefSection::Tables(tables) => tables.encode(w),
			RawModuleDefSection::Reducers(reducers) => reducers.encode(w),
			RawModuleDefSection::Procedures(procedures) => procedures.encode(w),
			RawModuleDefSection::Views(views) => views.encode(w),
			RawModuleDefSection::Schedules(schedules) => schedules.encode(w),
			RawModuleDefSection::LifeCycleReducers(lifecycle) => lifecycle.encode(w),
			RawModuleDefSection::RowLevelSecurity(policies) => policies.encode(w),
			RawModuleDefSection::CaseConversionPolicy(policy) => policy.encode(w),
			RawModuleDefSection::ExplicitNames(names) => names.encode(w),
		}
	}
}

impl Decode for RawModuleDefSection {
	fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
		Ok(match r.read_u8()? {
			0 => RawModuleDefSection::Typespace(Decode::decode(r)?),
			1 => RawModuleDefSection::Types(Decode::decode(r)?),
			2 => RawModuleDefSection::Tables(Decode::decode(r)?),
			3 => RawModuleDefSection::Reducers(Decode::decode(r)?),
			4 => RawModuleDefSection::Procedures(Decode::decode(r)?),
			5 => RawModuleDefSection::Views(Decode::decode(r)?),
			6 => RawModuleDefSection::Schedules(Decode::decode(r)?),
			7 => RawModuleDefSection::LifeCycleReducers(Decode::decode(r)?),
			8 => RawModuleDefSection::RowLevelSecurity(Decode::decode(r)?),
			9 => RawModuleDefSection::CaseConversionPolicy(Decode::decode(r)?),
			10 => RawModuleDefSection::ExplicitNames(Decode::decode(r)?),
			tag => {
				return Err(DecodeError::InvalidTag {
					context: "module def section",
					tag,
				});
			}
		})
	}
}

impl_product_codec!(RawModuleDef {
	sections
});

#[cfg(test)]
mod tests {
	use modkit_codec::{from_slice, to_vec};
	use modkit_type::{AlgebraicType, AlgebraicTypeRef};

	use super::*;

	#[test]
	fn test_versioned_bytes_prefix() {
		let def = RawModuleDef {
			sections: vec![RawModuleDefSection::Typespace(Typespace::default())],
		};
		assert_eq!(def.to_versioned_bytes().unwrap(), vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn test_round_trip_with_sections() {
		let mut typespace = Typespace::default();
		typespace.add(AlgebraicType::product([("id", AlgebraicType::U32)]));
		let def = RawModuleDef {
			sections: vec![
				RawModuleDefSection::Typespace(typespace),
				RawModuleDefSection::Types(vec![RawTypeDef {
					source_name: RawScopedTypeName::parse("app.Thing"),
					ty: AlgebraicTypeRef(0),
					custom_ordering: true,
				}]),
				RawModuleDefSection::RowLevelSecurity(vec![RawRowLevelSecurityDef {
					sql: "SELECT * FROM thing".to_string(),
				}]),
				RawModuleDefSection::CaseConversionPolicy(CaseConversionPolicy::PascalCase),
			],
		};
		let bytes = to_vec(&def).unwrap();
		let decoded = from_slice::<RawModuleDef>(&bytes).unwrap();
		assert_eq!(decoded, def);
		assert_eq!(decoded.types()[0].source_name.scope, vec!["app".to_string()]);
		assert_eq!(decoded.case_conversion_policy(), Some(CaseConversionPolicy::PascalCase));
		assert!(decoded.tables().is_empty());
	}

	#[test]
	fn test_unknown_section_tag() {
		assert_eq!(
			from_slice::<RawModuleDefSection>(&[11]),
			Err(DecodeError::InvalidTag {
				context: "module def section",
				tag: 11
			})
		);
	}
}
