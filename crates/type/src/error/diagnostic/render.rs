// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		render_into(&mut output, d, 0);
		output
	}
}

fn render_into(output: &mut String, d: &Diagnostic, depth: usize) {
	let indent = "  ".repeat(depth);

	let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

	if let Some(label) = &d.label {
		let _ = writeln!(output, "{}  = {}", indent, label);
	}

	if let Some(help) = &d.help {
		let _ = writeln!(output, "\n{}help: {}", indent, help);
	}

	for note in &d.notes {
		let _ = writeln!(output, "\n{}note: {}", indent, note);
	}

	if let Some(cause) = &d.cause {
		let _ = writeln!(output, "\n{}caused by:", indent);
		render_into(output, cause, depth + 1);
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn diagnostic() -> Diagnostic {
		Diagnostic {
			code: "TEST_001".to_string(),
			message: "something broke".to_string(),
			label: Some("here".to_string()),
			help: Some("try again".to_string()),
			notes: vec!["first".to_string(), "second".to_string()],
			cause: None,
		}
	}

	#[test]
	fn test_render_sections() {
		let out = DefaultRenderer::render_string(&diagnostic());
		assert_eq!(
			out,
			"error[TEST_001]: something broke\n  = here\n\nhelp: try again\n\nnote: first\n\nnote: second\n"
		);
	}

	#[test]
	fn test_render_cause_is_indented() {
		let inner = Diagnostic {
			code: "INNER".to_string(),
			message: "root cause".to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		};
		let out = DefaultRenderer::render_string(&diagnostic().with_cause(inner));
		assert!(out.ends_with("caused by:\n  error[INNER]: root cause\n"));
	}
}
