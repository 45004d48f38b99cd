// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Human readable tree rendering of a module definition.

use modkit_type::AlgebraicType;

use crate::def::{
	FunctionVisibility, RawConstraintData, RawIndexAlgorithm, RawModuleDef, RawModuleDefSection, RawTableDef,
	TableAccess, TableType,
};

struct Node {
	label: String,
	children: Vec<Node>,
}

impl Node {
	fn leaf(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			children: vec![],
		}
	}

	fn branch(label: impl Into<String>, children: Vec<Node>) -> Self {
		Self {
			label: label.into(),
			children,
		}
	}
}

pub fn explain_module(def: &RawModuleDef) -> String {
	let root = Node::branch("Module", def.sections.iter().map(explain_section).collect());
	let mut output = String::new();
	output.push_str(&root.label);
	output.push('\n');
	render_children(&root.children, "", &mut output);
	output
}

fn render_children(children: &[Node], prefix: &str, output: &mut String) {
	for (position, child) in children.iter().enumerate() {
		let is_last = position + 1 == children.len();
		let branch = if is_last {
			"└──"
		} else {
			"├──"
		};
		output.push_str(&format!("{}{} {}\n", prefix, branch, child.label));

		let child_prefix = format!(
			"{}{}",
			prefix,
			if is_last {
				"    "
			} else {
				"│   "
			}
		);
		render_children(&child.children, &child_prefix, output);
	}
}

fn visibility(visibility: FunctionVisibility) -> &'static str {
	match visibility {
		FunctionVisibility::Private => "private",
		FunctionVisibility::ClientCallable => "client",
	}
}

fn columns(columns: &[u16]) -> String {
	let columns: Vec<String> = columns.iter().map(u16::to_string).collect();
	format!("[{}]", columns.join(", "))
}

fn params(params: &modkit_type::ProductType) -> String {
	let params: Vec<String> = params
		.elements
		.iter()
		.map(|p| format!("{}: {}", p.name().unwrap_or("_"), p.algebraic_type))
		.collect();
	params.join(", ")
}

fn explain_table(table: &RawTableDef) -> Node {
	let mut children = vec![];
	if !table.primary_key.is_empty() {
		children.push(Node::leaf(format!("primary key {}", columns(&table.primary_key))));
	}
	for index in &table.indexes {
		let (kind, cols) = match &index.algorithm {
			RawIndexAlgorithm::BTree {
				columns: cols,
			} => ("btree", columns(cols)),
			RawIndexAlgorithm::Hash {
				columns: cols,
			} => ("hash", columns(cols)),
			RawIndexAlgorithm::Direct {
				column,
			} => ("direct", columns(&[*column])),
		};
		children.push(Node::leaf(format!(
			"index {} ({}) {} {}",
			index.source_name.as_deref().unwrap_or("_"),
			index.accessor_name.as_deref().unwrap_or("_"),
			kind,
			cols
		)));
	}
	for constraint in &table.constraints {
		let RawConstraintData::Unique {
			columns: cols,
		} = &constraint.data;
		children.push(Node::leaf(format!(
			"constraint {} unique {}",
			constraint.source_name.as_deref().unwrap_or("_"),
			columns(cols)
		)));
	}
	for sequence in &table.sequences {
		children.push(Node::leaf(format!("sequence column {} step {}", sequence.column, sequence.increment)));
	}
	for default in &table.default_values {
		let bytes: Vec<String> = default.value.iter().map(|b| format!("{:02x}", b)).collect();
		children.push(Node::leaf(format!("default column {} = [{}]", default.col_id, bytes.join(" "))));
	}

	let access = match table.table_access {
		TableAccess::Public => "public",
		TableAccess::Private => "private",
	};
	let kind = match table.table_type {
		TableType::System => "system",
		TableType::User => "user",
	};
	let event = if table.is_event {
		", event"
	} else {
		""
	};
	Node::branch(
		format!("{} (row {}, {}, {}{})", table.source_name, table.product_type_ref, access, kind, event),
		children,
	)
}

fn explain_section(section: &RawModuleDefSection) -> Node {
	let children = match section {
		RawModuleDefSection::Typespace(typespace) => typespace
			.types
			.iter()
			.enumerate()
			.map(|(index, ty)| Node::leaf(format!("&{}: {}", index, ty)))
			.collect(),
		RawModuleDefSection::Types(types) => types
			.iter()
			.map(|def| {
				let ordering = if def.custom_ordering {
					""
				} else {
					" (default ordering)"
				};
				Node::leaf(format!("{} -> {}{}", def.source_name, def.ty, ordering))
			})
			.collect(),
		RawModuleDefSection::Tables(tables) => tables.iter().map(explain_table).collect(),
		RawModuleDefSection::Reducers(reducers) => reducers
			.iter()
			.map(|reducer| {
				Node::leaf(format!(
					"{}({}) -> {} {}",
					reducer.source_name,
					params(&reducer.params),
					AlgebraicType::result(reducer.ok_return_type.clone(), reducer.err_return_type.clone()),
					visibility(reducer.visibility)
				))
			})
			.collect(),
		RawModuleDefSection::Procedures(procedures) => procedures
			.iter()
			.map(|procedure| {
				Node::leaf(format!(
					"{}({}) -> {} {}",
					procedure.source_name,
					params(&procedure.params),
					procedure.return_type,
					visibility(procedure.visibility)
				))
			})
			.collect(),
		RawModuleDefSection::Views(views) => views
			.iter()
			.map(|view| {
				let access = if view.is_public {
					"public"
				} else {
					"private"
				};
				let kind = if view.is_anonymous {
					"anonymous"
				} else {
					"sender"
				};
				Node::leaf(format!(
					"{} #{} -> {} {} {}",
					view.source_name, view.index, view.return_type, access, kind
				))
			})
			.collect(),
		RawModuleDefSection::Schedules(schedules) => schedules
			.iter()
			.map(|schedule| {
				Node::leaf(format!(
					"{} on {}[{}] calls {}",
					schedule.source_name.as_deref().unwrap_or("_"),
					schedule.table_name,
					schedule.schedule_at_col,
					schedule.function_name
				))
			})
			.collect(),
		RawModuleDefSection::LifeCycleReducers(lifecycle) => lifecycle
			.iter()
			.map(|entry| Node::leaf(format!("{:?} -> {}", entry.lifecycle_spec, entry.function_name)))
			.collect(),
		RawModuleDefSection::RowLevelSecurity(policies) => {
			policies.iter().map(|policy| Node::leaf(policy.sql.clone())).collect()
		}
		RawModuleDefSection::CaseConversionPolicy(policy) => vec![Node::leaf(format!("{:?}", policy))],
		RawModuleDefSection::ExplicitNames(names) => names
			.entries
			.iter()
			.map(|entry| {
				let kind = match entry {
					crate::def::ExplicitNameEntry::Table(_) => "table",
					crate::def::ExplicitNameEntry::Function(_) => "function",
					crate::def::ExplicitNameEntry::Index(_) => "index",
				};
				let mapping = entry.mapping();
				Node::leaf(format!("{} {} = {}", kind, mapping.source_name, mapping.canonical_name))
			})
			.collect(),
	};
	Node::branch(section.name(), children)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FieldConstraint, FieldConstraintToCreate, builder::tests::Person, builder::tests::person_builder};

	#[test]
	fn test_explain_person() {
		let mut builder = person_builder();
		builder.add_field_constraint(FieldConstraintToCreate {
			table: "person".to_string(),
			native: modkit_type::NativeType::of::<Person>(),
			field: "id".to_string(),
			constraint: FieldConstraint::PRIMARY_KEY,
		});

		let expected = "\
Module
├── typespace
│   └── &0: Product{id: U32, age: U8, name: String}
├── types
│   └── Person -> &0
└── tables
    └── person (row &0, public, user)
        ├── primary key [0]
        ├── index person_id_idx_btree (id) btree [0]
        └── constraint person_id_key unique [0]
";
		assert_eq!(explain_module(&builder.build_module_def()), expected);
	}

	#[test]
	fn test_explain_empty() {
		let def = RawModuleDef::default();
		assert_eq!(explain_module(&def), "Module\n");
	}
}
