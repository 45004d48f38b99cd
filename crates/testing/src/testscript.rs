// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Golden script runner.
//!
//! A script is a list of blocks separated by blank lines. Each block holds command lines, a `---`
//! line and the output the commands are expected to produce:
//!
//! ```text
//! # comment
//! table person public
//! explain
//! ---
//! Module
//! ...
//! ```
//!
//! Command lines are split on whitespace; `key=value` tokens are keyed arguments, the rest are
//! positional.

use std::{error::Error, fmt::Write, fs, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	pub line: usize,
}

impl Command {
	fn parse(text: &str, line: usize) -> Option<Self> {
		let mut tokens = text.split_whitespace();
		let name = tokens.next()?.to_string();
		let args = tokens
			.map(|token| match token.split_once('=') {
				Some((key, value)) => Argument {
					key: Some(key.to_string()),
					value: value.to_string(),
				},
				None => Argument {
					key: None,
					value: token.to_string(),
				},
			})
			.collect();
		Some(Self {
			name,
			args,
			line,
		})
	}

	pub fn positional(&self) -> impl Iterator<Item = &str> {
		self.args.iter().filter(|arg| arg.key.is_none()).map(|arg| arg.value.as_str())
	}

	pub fn pos(&self, index: usize) -> Result<&str, String> {
		self.positional()
			.nth(index)
			.ok_or_else(|| format!("line {}: {} expects argument {}", self.line, self.name, index + 1))
	}

	pub fn lookup(&self, key: &str) -> Option<&str> {
		self.args.iter().find(|arg| arg.key.as_deref() == Some(key)).map(|arg| arg.value.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	pub commands: Vec<Command>,
	pub expected: String,
	pub line: usize,
}

pub trait Runner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;

	/// Called before each block.
	fn start_block(&mut self) {}
}

pub fn parse(input: &str) -> Result<Vec<Block>, String> {
	let mut blocks = vec![];
	let mut lines = input.lines().enumerate().map(|(n, line)| (n + 1, line)).peekable();

	while let Some(&(start, _)) = lines.peek() {
		let mut commands = vec![];
		let mut separated = false;
		for (n, line) in lines.by_ref() {
			let line = line.trim();
			if line == "---" {
				separated = true;
				break;
			}
			if line.is_empty() || line.starts_with('#') {
				continue;
			}
			commands.extend(Command::parse(line, n));
		}
		if !separated {
			if commands.is_empty() {
				break;
			}
			return Err(format!("line {}: block has no --- separator", start));
		}

		let mut expected = String::new();
		for (_, line) in lines.by_ref() {
			if line.trim().is_empty() {
				break;
			}
			expected.push_str(line);
			expected.push('\n');
		}
		blocks.push(Block {
			commands,
			expected,
			line: start,
		});
	}
	Ok(blocks)
}

/// Runs every block of `input`, failing on the first block whose output differs.
pub fn run<R: Runner>(runner: &mut R, input: &str) -> Result<(), Box<dyn Error>> {
	for block in parse(input)? {
		runner.start_block();
		let mut output = String::new();
		for command in &block.commands {
			match runner.run(command) {
				Ok(out) => output.push_str(&out),
				Err(err) => writeln!(output, "Error: {}", err)?,
			}
		}
		if output != block.expected {
			return Err(format!(
				"block at line {} differs\n--- expected\n{}--- actual\n{}",
				block.line, block.expected, output
			)
			.into());
		}
	}
	Ok(())
}

pub fn run_path<R: Runner>(runner: &mut R, path: &Path) -> Result<(), Box<dyn Error>> {
	let input = fs::read_to_string(path)?;
	run(runner, &input).map_err(|err| format!("{}: {}", path.display(), err).into())
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Echo;

	impl Runner for Echo {
		fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
			match command.name.as_str() {
				"echo" => Ok(format!("{}\n", command.positional().collect::<Vec<_>>().join(" "))),
				_ => Err(format!("unknown command {}", command.name).into()),
			}
		}
	}

	#[test]
	fn test_parse_blocks() {
		let blocks = parse("# first\necho a b\n---\na b\n\necho c\necho d\n---\nc\nd\n").unwrap();
		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[0].commands[0].line, 2);
		assert_eq!(blocks[1].commands.len(), 2);
		assert_eq!(blocks[1].expected, "c\nd\n");
	}

	#[test]
	fn test_keyed_arguments() {
		let command = Command::parse("table person access=public", 1).unwrap();
		assert_eq!(command.pos(0).unwrap(), "person");
		assert_eq!(command.lookup("access"), Some("public"));
		assert!(command.pos(1).is_err());
	}

	#[test]
	fn test_run_reports_errors_as_output() {
		run(&mut Echo, "echo hi\nfrob\n---\nhi\nError: unknown command frob\n").unwrap();
		assert!(run(&mut Echo, "echo hi\n---\nbye\n").is_err());
	}

	#[test]
	fn test_missing_separator() {
		assert!(parse("echo hi\n").is_err());
		assert!(parse("\n\n").unwrap().is_empty());
	}
}
