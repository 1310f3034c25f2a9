//! Errors for every stage of the pipeline.
//!
//! The taxonomy is closed: scanning can only fail on an illegal character,
//! parsing only on invalid syntax, and evaluation on one of five runtime
//! conditions. Every stage stops at its first error and hands it straight
//! back to the caller; there is no recovery, and no partial result travels
//! with an error. Each error carries a precise source span, and runtime
//! errors additionally carry the evaluation context chain for the traceback
//! block of the report.

pub mod interpreter;
pub mod parser;
pub mod scanner;

pub use interpreter::{RuntimeError, RuntimeErrorType, TraceFrame};
pub use parser::{ParseError, ParseErrorType};
pub use scanner::{ScanError, ScanErrorType};

/// The top-level error type covering the whole pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TintError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	Internal(#[from] anyhow::Error),
	/// A lexical error cut scanning short
	#[error(transparent)]
	Scan(#[from] ScanError),
	/// A syntax error produced by the parser
	#[error(transparent)]
	Parse(#[from] ParseError),
	/// A runtime error raised during evaluation
	#[error(transparent)]
	Runtime(#[from] RuntimeError),
}

impl TintError {
	/// Render the full diagnostic block for this error.
	///
	/// Lexical and syntax errors render as
	///
	/// ```text
	/// IllegalCharacterError: '@'
	/// File <stdin>, line 1
	///
	/// 1 @ 2
	///   ^
	/// ```
	///
	/// while runtime errors replace the `File` line with a traceback block.
	/// The format is stable; tooling may match on it.
	pub fn report(&self) -> String {
		match self {
			TintError::Internal(_) => self.to_string(),
			TintError::Scan(error) => error.report(),
			TintError::Parse(error) => error.report(),
			TintError::Runtime(error) => error.report(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Tint;

	fn fail(source: &str) -> TintError {
		Tint::new(false).run("<test>", source).unwrap_err()
	}

	#[test]
	fn scan_report_format() {
		assert_eq!(fail("1 @ 2").report(), "IllegalCharacterError: '@'\nFile <test>, line 1\n\n1 @ 2\n  ^");
	}

	#[test]
	fn parse_report_format() {
		assert_eq!(
			fail("1 +").report(),
			"InvalidSyntaxError: Expected int, float, or '('\nFile <test>, line 1\n\n1 +\n   ^"
		);
		assert_eq!(
			fail("1 2").report(),
			"InvalidSyntaxError: Expected '+', '-', '*', '/',  '**'\nFile <test>, line 1\n\n1 2\n  ^"
		);
	}

	#[test]
	fn runtime_report_has_a_traceback() {
		assert_eq!(
			fail("1 / 0").report(),
			"Stack trace (Most recent last):\n  File <test>, line 1, in <global>\nDivisionByZeroError: Division by zero\n\n1 / 0\n    ^"
		);
	}

	#[test]
	fn type_error_names_both_types() {
		let mut tint = Tint::new(false);
		tint.run("<test>", "int x = 5").unwrap();
		let error = tint.run("<test>", "x = 1.5").unwrap_err();
		assert_eq!(
			error.report(),
			"Stack trace (Most recent last):\n  File <test>, line 1, in <global>\nTypeError: Cannot place type `float` in `int`\n\nx = 1.5\n^~~~~~~"
		);
	}

	#[test]
	fn range_report_shows_the_complex_parts() {
		let report = fail("(-8) ** 0.5").report();
		assert!(report.contains("RangeError: pow(x, y) where x < 0 and y is not whole has undefined behavior."));
		assert!(report.contains("i)"));
	}
}
