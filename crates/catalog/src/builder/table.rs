// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use modkit_type::{
	AlgebraicType, NativeType, ProductType, ProductTypeElement, TypeBuilder,
	error::diagnostic::schema::{
		default_on_autoinc, default_on_primary_key, default_on_unique, field_not_found, multi_index_empty,
		no_field_descriptors, table_no_field_descriptors, table_not_found, table_type_not_ref,
	},
	strip_type_name,
};
use tracing::{debug, instrument};

use super::{ModuleBuilder, upsert};
use crate::{
	FieldConstraint, SchemaError,
	constraint::ColumnKey,
	def::{
		ColList, RawColumnDefaultValue, RawConstraintData, RawConstraintDef, RawIndexAlgorithm, RawIndexDef,
		RawSequenceDef, RawTableDef, TableAccess, TableType,
	},
};

pub struct TableToCreate {
	pub name: String,
	pub native: NativeType,
	pub is_public: bool,
	pub is_event: bool,
}

pub struct FieldConstraintToCreate {
	pub table: String,
	pub native: NativeType,
	pub field: String,
	pub constraint: FieldConstraint,
}

pub struct IndexToCreate {
	pub table: String,
	pub native: NativeType,
	/// Accessor name of the index; the stored name is derived from the columns.
	pub index_name: String,
	pub fields: Vec<String>,
}

pub struct ColumnDefaultToCreate {
	pub table: String,
	pub native: NativeType,
	pub field: String,
	/// The default, already encoded.
	pub value: Vec<u8>,
}

fn btree_index(source_name: String, accessor_name: &str, columns: ColList) -> RawIndexDef {
	RawIndexDef {
		source_name: Some(source_name),
		accessor_name: Some(accessor_name.to_string()),
		algorithm: RawIndexAlgorithm::BTree {
			columns,
		},
	}
}

fn unique_constraint(table: &str, field: &str, column: u16) -> RawConstraintDef {
	RawConstraintDef {
		source_name: Some(format!("{}_{}_key", table, field)),
		data: RawConstraintData::Unique {
			columns: vec![column],
		},
	}
}

impl ModuleBuilder {
	#[instrument(name = "catalog::table::register", level = "trace", skip(self, to_create), fields(table = %to_create.name))]
	pub fn register_table(&mut self, to_create: TableToCreate) {
		if self.skipped("table", &to_create.name) {
			return;
		}

		let Some(descriptor) = self.fields.get(&to_create.native).cloned() else {
			self.errors.record(table_no_field_descriptors(&to_create.name));
			return;
		};

		let mut registrar = self.registrar();
		let mut elements = Vec::with_capacity(descriptor.fields.len());
		for field in &descriptor.fields {
			let mut ty = (field.make_type)(&mut registrar);
			if matches!(ty, AlgebraicType::Sum(_)) && !ty.is_inline_sum() {
				ty = registrar.register_type_by_name(strip_type_name(field.type_name), ty);
			}
			elements.push(ProductTypeElement::named(field.name, ty));
		}
		if self.skipped("table", &to_create.name) {
			return;
		}

		let row_type = AlgebraicType::Product(ProductType::new(elements));
		let registered = self.registrar().register_type(row_type, None, Some(to_create.native));
		let Some(product_type_ref) = registered.as_type_ref() else {
			self.errors.record(table_type_not_ref(&to_create.name));
			return;
		};

		let table = RawTableDef {
			source_name: to_create.name.clone(),
			product_type_ref,
			primary_key: vec![],
			indexes: vec![],
			constraints: vec![],
			sequences: vec![],
			table_type: TableType::User,
			table_access: if to_create.is_public {
				TableAccess::Public
			} else {
				TableAccess::Private
			},
			default_values: self.column_defaults.get(&to_create.name).cloned().unwrap_or_default(),
			is_event: to_create.is_event,
		};
		upsert(&mut self.tables, table, "table", &to_create.name, |existing| {
			existing.source_name == to_create.name
		});
		debug!(table = %to_create.name, row_type = product_type_ref.0, "registered table");
	}

	pub fn set_table_is_event(&mut self, table: &str, is_event: bool) {
		match self.tables.iter_mut().find(|t| t.source_name == table) {
			Some(def) => def.is_event = is_event,
			None => self.errors.record(table_not_found(table)),
		}
	}

	#[instrument(name = "catalog::table::constraint", level = "trace", skip(self, to_create), fields(table = %to_create.table, field = %to_create.field))]
	pub fn add_field_constraint(&mut self, to_create: FieldConstraintToCreate) {
		if self.skipped("field constraint", &to_create.field) {
			return;
		}

		let Some(descriptor) = self.fields.get(&to_create.native) else {
			self.errors.record(no_field_descriptors(&to_create.table, &to_create.field));
			return;
		};
		let Some(column) = descriptor.position(&to_create.field) else {
			self.errors.record(field_not_found(&to_create.table, &to_create.field));
			return;
		};
		let Some(table) = self.tables.iter_mut().find(|t| t.source_name == to_create.table) else {
			self.errors.record(table_not_found(&to_create.table));
			return;
		};

		let index_name = format!("{}_{}_idx_btree", to_create.table, to_create.field);
		match to_create.constraint.key() {
			ColumnKey::PrimaryKey => {
				if let Some(&existing) = table.primary_key.first() {
					let existing = descriptor
						.fields
						.get(existing as usize)
						.map(|f| f.name.to_string())
						.unwrap_or_else(|| existing.to_string());
					self.errors.record(SchemaError::MultiplePrimaryKeys {
						table: to_create.table,
						existing,
						field: to_create.field,
					});
					return;
				}
				table.primary_key.push(column);
				table.constraints.push(unique_constraint(&to_create.table, &to_create.field, column));
				table.indexes.push(btree_index(index_name, &to_create.field, vec![column]));
			}
			ColumnKey::Unique => {
				table.constraints.push(unique_constraint(&to_create.table, &to_create.field, column));
				table.indexes.push(btree_index(index_name, &to_create.field, vec![column]));
			}
			ColumnKey::Indexed => {
				table.indexes.push(btree_index(index_name, &to_create.field, vec![column]));
			}
			ColumnKey::None => {}
		}

		if to_create.constraint.is_auto_inc() {
			table.sequences.push(RawSequenceDef::increment_by_one(column));
		}
		debug!(table = %to_create.table, field = %to_create.field, bits = to_create.constraint.bits(), "added field constraint");
	}

	#[instrument(name = "catalog::table::index", level = "trace", skip(self, to_create), fields(table = %to_create.table, index = %to_create.index_name))]
	pub fn add_multi_column_index(&mut self, to_create: IndexToCreate) {
		if self.skipped("index", &to_create.index_name) {
			return;
		}

		if to_create.fields.is_empty() {
			self.errors.record(multi_index_empty(&to_create.table, &to_create.index_name));
			return;
		}
		let Some(descriptor) = self.fields.get(&to_create.native) else {
			self.errors.record(no_field_descriptors(&to_create.table, &to_create.index_name));
			return;
		};
		let Some(table) = self.tables.iter_mut().find(|t| t.source_name == to_create.table) else {
			self.errors.record(table_not_found(&to_create.table));
			return;
		};

		let mut columns = ColList::with_capacity(to_create.fields.len());
		for field in &to_create.fields {
			match descriptor.position(field) {
				Some(column) => columns.push(column),
				None => {
					self.errors.record(field_not_found(&to_create.table, field));
					return;
				}
			}
		}

		let source_name = format!("{}_{}_idx_btree", to_create.table, to_create.fields.join("_"));
		table.indexes.push(btree_index(source_name, &to_create.index_name, columns));
	}

	/// Records a default for a column. Key and auto-incremented columns cannot have one.
	#[instrument(name = "catalog::table::default", level = "trace", skip(self, to_create), fields(table = %to_create.table, field = %to_create.field))]
	pub fn add_column_default(&mut self, to_create: ColumnDefaultToCreate) {
		if self.skipped("column default", &to_create.field) {
			return;
		}

		let Some(table) = self.tables.iter_mut().find(|t| t.source_name == to_create.table) else {
			self.errors.record(table_not_found(&to_create.table));
			return;
		};
		let Some(descriptor) = self.fields.get(&to_create.native) else {
			self.errors.record(no_field_descriptors(&to_create.table, &to_create.field));
			return;
		};
		let Some(column) = descriptor.position(&to_create.field) else {
			self.errors.record(field_not_found(&to_create.table, &to_create.field));
			return;
		};

		if table.primary_key.contains(&column) {
			self.errors.record(default_on_primary_key(&to_create.table, &to_create.field));
			return;
		}
		if table.constraints.iter().any(|constraint| constraint.is_unique_on(column)) {
			self.errors.record(default_on_unique(&to_create.table, &to_create.field));
			return;
		}
		if table.sequences.iter().any(|sequence| sequence.column == column) {
			self.errors.record(default_on_autoinc(&to_create.table, &to_create.field));
			return;
		}

		let defaults = self.column_defaults.entry(to_create.table).or_default();
		defaults.push(RawColumnDefaultValue {
			col_id: column,
			value: to_create.value,
		});
		table.default_values = defaults.clone();
	}
}
