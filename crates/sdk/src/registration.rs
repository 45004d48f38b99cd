// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Registration call sites collected at link time.
//!
//! Every `registration!` in the module submits a [`Registration`]. A build runs them by [`Phase`],
//! keeping submission order within a phase, so a reducer can refer to a table declared anywhere in
//! the crate.

use tracing::{instrument, trace};

use crate::ModuleBuildContext;

/// Build phase of a registration; earlier phases run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
	Types,
	Tables,
	Constraints,
	Reducers,
	Schedules,
	Security,
}

pub struct Registration {
	pub phase: Phase,
	pub name: &'static str,
	pub register: fn(&mut ModuleBuildContext),
}

impl Registration {
	pub const fn new(phase: Phase, name: &'static str, register: fn(&mut ModuleBuildContext)) -> Self {
		Self {
			phase,
			name,
			register,
		}
	}
}

inventory::collect!(Registration);

/// Registrations in the order a build runs them.
pub struct RegistrationPlan<'a> {
	registrations: Vec<&'a Registration>,
}

impl<'a> RegistrationPlan<'a> {
	pub fn new(registrations: impl IntoIterator<Item = &'a Registration>) -> Self {
		let mut registrations: Vec<&'a Registration> = registrations.into_iter().collect();
		registrations.sort_by_key(|registration| registration.phase);
		Self {
			registrations,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &'a Registration> + '_ {
		self.registrations.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.registrations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.registrations.is_empty()
	}

	#[instrument(name = "sdk::registration::run", level = "debug", skip_all, fields(registrations = self.registrations.len()))]
	pub fn run(&self, ctx: &mut ModuleBuildContext) {
		for registration in &self.registrations {
			trace!(phase = ?registration.phase, name = registration.name, "running registration");
			(registration.register)(ctx);
		}
	}
}

impl RegistrationPlan<'static> {
	/// Every registration submitted in the final binary.
	pub fn collected() -> Self {
		Self::new(inventory::iter::<Registration>)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn order(ctx: &mut ModuleBuildContext, name: &str) {
		ctx.register_row_level_security(name);
	}

	#[test]
	fn test_phases_run_in_order() {
		let registrations = [
			Registration::new(Phase::Security, "rls", |ctx| order(ctx, "security")),
			Registration::new(Phase::Reducers, "first_reducer", |ctx| order(ctx, "reducer 1")),
			Registration::new(Phase::Types, "types", |ctx| order(ctx, "types")),
			Registration::new(Phase::Reducers, "second_reducer", |ctx| order(ctx, "reducer 2")),
			Registration::new(Phase::Tables, "tables", |ctx| order(ctx, "tables")),
		];
		let plan = RegistrationPlan::new(&registrations);
		let names: Vec<_> = plan.iter().map(|registration| registration.name).collect();
		assert_eq!(names, vec!["types", "tables", "first_reducer", "second_reducer", "rls"]);

		let mut ctx = ModuleBuildContext::default();
		ctx.build(&plan);
		let sql: Vec<_> = ctx.module_def().unwrap().row_level_security().iter().map(|rls| rls.sql.as_str()).collect();
		assert_eq!(sql, vec!["types", "tables", "reducer 1", "reducer 2", "security"]);
	}

	#[test]
	fn test_phase_ordering() {
		assert!(Phase::Types < Phase::Tables);
		assert!(Phase::Tables < Phase::Constraints);
		assert!(Phase::Constraints < Phase::Reducers);
		assert!(Phase::Reducers < Phase::Schedules);
		assert!(Phase::Schedules < Phase::Security);
	}
}
