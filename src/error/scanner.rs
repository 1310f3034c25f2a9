use crate::position::Span;

/// Scanner related errors.
///
/// There is exactly one lexical failure mode: a character (or, for numeric
/// literals, a character sequence) that cannot begin or continue any token.
#[derive(thiserror::Error, Debug)]
#[error("IllegalCharacterError: {type}")]
pub struct ScanError {
	/// Where the offending text sits in the source.
	pub span:   Span,
	pub r#type: ScanErrorType,
}

impl ScanError {
	pub(crate) fn new(span: Span, r#type: ScanErrorType) -> Self { Self { span, r#type } }

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

/// Types of scanning errors.
#[derive(Debug, PartialEq)]
pub enum ScanErrorType {
	/// The offending character or literal text.
	IllegalCharacter(String),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ScanErrorType::IllegalCharacter(text) => write!(f, "'{text}'"),
		}
	}
}
