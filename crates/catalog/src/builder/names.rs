// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::ModuleBuilder;
use crate::def::{CaseConversionPolicy, ExplicitNameEntry, NameMapping};

fn mapping(source_name: &str, canonical_name: &str) -> NameMapping {
	NameMapping {
		source_name: source_name.to_string(),
		canonical_name: canonical_name.to_string(),
	}
}

impl ModuleBuilder {
	pub fn set_case_conversion_policy(&mut self, policy: CaseConversionPolicy) {
		self.case_conversion_policy = Some(policy);
	}

	pub fn register_explicit_table_name(&mut self, source_name: &str, canonical_name: &str) {
		self.explicit_names.upsert(ExplicitNameEntry::Table(mapping(source_name, canonical_name)));
	}

	pub fn register_explicit_function_name(&mut self, source_name: &str, canonical_name: &str) {
		self.explicit_names.upsert(ExplicitNameEntry::Function(mapping(source_name, canonical_name)));
	}

	pub fn register_explicit_index_name(&mut self, source_name: &str, canonical_name: &str) {
		self.explicit_names.upsert(ExplicitNameEntry::Index(mapping(source_name, canonical_name)));
	}
}
