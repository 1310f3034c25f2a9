use std::{fs::read_to_string, io::Write, path::Path, rc::Rc};

use anyhow::Context as _;

use crate::{
	error::TintError,
	interpreter::{Interpreter, context::Context, value::Number},
	parser::Parser,
	position::Source,
	scanner::Scanner,
};

/// The front end: owns the interpreter state that survives across inputs
/// and drives the scan → parse → evaluate pipeline for each one.
pub struct Tint {
	interpreter: Interpreter,
	context:     Rc<Context>,
	debug:       bool,
}

impl Tint {
	/// Create a fresh session. With `debug` set, each run prints the token
	/// list and the syntax tree it produced; results are unchanged.
	pub fn new(debug: bool) -> Self {
		Self { interpreter: Interpreter::new(), context: Context::global(), debug }
	}

	/// Run a file, one statement per non-empty line, printing each value.
	/// Stops at the first error.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), TintError> {
		let name = path.as_ref().display().to_string();
		let text = read_to_string(path.as_ref()).context("Failed open source file")?;
		for line in text.lines() {
			let line = line.trim();
			if line.is_empty() {
				continue;
			}
			let value = self.run(&name, line)?;
			println!("{value}");
		}
		Ok(())
	}

	/// Run the interactive prompt until end of input.
	pub fn run_prompt(&mut self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited tint repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() {
				continue;
			}
			match self.run("<stdin>", line) {
				Ok(value) => println!("{value}"),
				Err(error) => eprintln!("{}", error.report()),
			}
		}
	}

	/// Run one statement through the full pipeline and return its value, or
	/// the first error any stage produced. Variables live on between calls.
	pub fn run(&mut self, file_name: &str, source: &str) -> Result<Number, TintError> {
		let source = Source::new(file_name, source);

		let (tokens, error) = Scanner::new(source).scan_tokens();
		if self.debug {
			let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
			println!("tok   > [{}]", rendered.join(", "));
		}
		if let Some(error) = error {
			return Err(error.into());
		}

		let ast = Parser::new(tokens).parse()?;
		if self.debug {
			println!("ast   > {ast}");
		}

		Ok(self.interpreter.evaluate(&ast, &self.context)?)
	}
}

impl Default for Tint {
	fn default() -> Self { Self::new(false) }
}
