//! Tokens produced by the scanner.
//!
//! Keyword detection is name-based: an identifier whose text matches one of
//! the declared type keywords is reclassified as a keyword, so the parser can
//! ask "is this the `int` keyword?" without comparing strings. Literal tokens
//! already carry their converted value, since the scanner had to walk every
//! character of the literal anyway to find where it ends.

use crate::{interpreter::value::NumberType, position::Span};

/// A token with the span of the source text it was scanned from.
#[derive(Debug, Clone)]
pub(crate) struct Token {
	pub r#type: TokenType,
	pub span:   Span,
}

impl Token {
	pub fn new(r#type: TokenType, span: Span) -> Self { Self { r#type, span } }
}

/// The token kinds of the language.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenType {
	/// Integer literal, e.g. `42`.
	Int(i64),
	/// Float literal, e.g. `3.14` or `.5`.
	Float(f64),
	/// Identifier, e.g. `x` or `$rate`.
	Identifier(String),
	/// Declared type keyword, `int` or `float`.
	Keyword(NumberType),
	/// `+`
	Plus,
	/// `-`
	Minus,
	/// `*`
	Mul,
	/// `/`
	Div,
	/// `%`
	Mod,
	/// `**`
	Pow,
	/// `=`
	Eq,
	/// `(`
	LeftParen,
	/// `)`
	RightParen,
	/// End of input.
	Eof,
}

impl TokenType {
	pub fn keyword_or_identifier(text: &str) -> Self {
		match text {
			"int" => TokenType::Keyword(NumberType::Int),
			"float" => TokenType::Keyword(NumberType::Float),
			_ => TokenType::Identifier(text.to_string()),
		}
	}

	/// The operator's source glyph, used when rendering syntax trees.
	pub fn symbol(&self) -> &'static str {
		match self {
			TokenType::Plus => "+",
			TokenType::Minus => "-",
			TokenType::Mul => "*",
			TokenType::Div => "/",
			TokenType::Mod => "%",
			TokenType::Pow => "**",
			TokenType::Eq => "=",
			_ => "?",
		}
	}
}

impl std::fmt::Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.r#type) }
}

impl std::fmt::Display for TokenType {
	/// `TYPE:value` pairs, the rendering used by the `--debug` token dump.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TokenType::Int(value) => write!(f, "INT:{value}"),
			TokenType::Float(value) => write!(f, "FLOAT:{value:?}"),
			TokenType::Identifier(name) => write!(f, "IDENTIFIER:{name}"),
			TokenType::Keyword(keyword) => write!(f, "KEYWORD:{keyword}"),
			TokenType::Plus => write!(f, "PLUS"),
			TokenType::Minus => write!(f, "MINUS"),
			TokenType::Mul => write!(f, "MUL"),
			TokenType::Div => write!(f, "DIV"),
			TokenType::Mod => write!(f, "MOD"),
			TokenType::Pow => write!(f, "POW"),
			TokenType::Eq => write!(f, "EQ"),
			TokenType::LeftParen => write!(f, "LPAREN"),
			TokenType::RightParen => write!(f, "RPAREN"),
			TokenType::Eof => write!(f, "EOF"),
		}
	}
}
