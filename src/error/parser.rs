use crate::position::Span;

/// Syntax errors produced by the parser. The first failure wins: the parser
/// never recovers or collects more than one diagnostic.
#[derive(thiserror::Error, Debug)]
#[error("InvalidSyntaxError: {type}")]
pub struct ParseError {
	/// The token the parser was looking at when it gave up.
	pub span:   Span,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub(crate) fn new(span: Span, r#type: ParseErrorType) -> Self { Self { span, r#type } }

	/// Render the full diagnostic block: message, location, excerpt.
	pub fn report(&self) -> String {
		format!(
			"{self}\nFile {}, line {}\n\n{}",
			self.span.start.source.name,
			self.span.start.line + 1,
			self.span.excerpt()
		)
	}
}

/// Types of syntax errors.
#[derive(Debug, PartialEq)]
pub enum ParseErrorType {
	/// A value was expected: a literal, a variable, or a parenthesized group.
	ExpectedUnit,
	/// A `(` was never closed.
	ExpectedClosingParen,
	/// A type keyword must be followed by the name it declares.
	ExpectedIdentifier,
	/// A declaration must bind its name with `=`.
	ExpectedEquals,
	/// A full statement parsed but input remained.
	ExpectedOperator,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedUnit => write!(f, "Expected int, float, or '('"),
			ExpectedClosingParen => write!(f, "Expected ')'"),
			ExpectedIdentifier => write!(f, "Expected identifier"),
			ExpectedEquals => write!(f, "Expected '='"),
			// The doubled space is part of the stable diagnostic text.
			ExpectedOperator => write!(f, "Expected '+', '-', '*', '/',  '**'"),
		}
	}
}
