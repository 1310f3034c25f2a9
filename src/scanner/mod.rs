//! Hand-written scanner for the expression language.
//!
//! The scanner walks the source text one character at a time, carrying a
//! [`Position`] cursor so every token knows exactly where it came from.
//! Spaces and tabs are skipped without producing a token; everything else
//! either starts a token or is an illegal character. There is no recovery:
//! the first lexical error ends the scan, and the caller receives whatever
//! tokens were already produced together with the error.
//!
//! Only `*` needs lookahead (`**` is the power operator). Numbers take
//! digits and at most one `.`; a second `.` ends the literal and is
//! re-scanned as the start of the next one, so `1.2.3` is the two floats
//! `1.2` and `.3`.

mod token;

use std::rc::Rc;

use TokenType::*;
pub(crate) use token::*;

use crate::{
	error::scanner::{ScanError, ScanErrorType},
	position::{Position, Source, Span},
};

/// Characters that may start an identifier.
fn is_name_start(c: char) -> bool { c.is_ascii_alphabetic() || c == '_' || c == '$' }

/// Characters that may continue an identifier.
fn is_name_continue(c: char) -> bool { is_name_start(c) || c.is_ascii_digit() }

/// A scanner over one piece of source text.
pub(crate) struct Scanner {
	source: Rc<Source>,
	/// Points at the character currently being considered.
	pos:    Position,
}

impl Scanner {
	pub fn new(source: Rc<Source>) -> Self {
		let pos = Position::start(source.clone());
		Self { source, pos }
	}

	/// The character under the cursor, if any.
	fn current(&self) -> Option<char> { self.source.text[self.pos.index..].chars().next() }

	/// Advance past the current character.
	fn advance(&mut self) {
		if let Some(c) = self.current() {
			self.pos.advance(c);
		}
	}

	/// Scan all tokens. The tokens scanned so far are returned even when a
	/// lexical error cuts the scan short, so they can still be inspected;
	/// the caller must not parse them in that case.
	pub fn scan_tokens(mut self) -> (Vec<Token>, Option<ScanError>) {
		let mut tokens = Vec::new();

		while let Some(c) = self.current() {
			match c {
				' ' | '\t' => self.advance(),
				c if c.is_ascii_digit() || c == '.' => match self.number() {
					Ok(token) => tokens.push(token),
					Err(error) => return (tokens, Some(error)),
				},
				c if is_name_start(c) => tokens.push(self.identifier()),
				'*' => tokens.push(self.pow_or_mul()),
				'+' => tokens.push(self.single(Plus)),
				'-' => tokens.push(self.single(Minus)),
				'/' => tokens.push(self.single(Div)),
				'%' => tokens.push(self.single(Mod)),
				'(' => tokens.push(self.single(LeftParen)),
				')' => tokens.push(self.single(RightParen)),
				'=' => tokens.push(self.single(Eq)),
				c => {
					let span = Span::new(self.pos.clone(), self.pos.advanced(c));
					let error = ScanError::new(span, ScanErrorType::IllegalCharacter(c.to_string()));
					return (tokens, Some(error));
				}
			}
		}

		tokens.push(Token::new(Eof, Span::empty(self.pos.clone())));
		(tokens, None)
	}

	/// Scan a single-character operator token.
	fn single(&mut self, r#type: TokenType) -> Token {
		let start = self.pos.clone();
		self.advance();
		Token::new(r#type, Span::new(start, self.pos.clone()))
	}

	/// Scan `*`, which needs one character of lookahead: `**` is the power
	/// operator, a lone `*` is multiplication.
	fn pow_or_mul(&mut self) -> Token {
		let start = self.pos.clone();
		self.advance();
		if self.current() == Some('*') {
			self.advance();
			return Token::new(Pow, Span::new(start, self.pos.clone()));
		}
		Token::new(Mul, Span::new(start, self.pos.clone()))
	}

	/// Scan a number literal: digits with at most one `.`. Exactly one `.`
	/// consumed makes it a float; a literal that is only `.` is an error.
	fn number(&mut self) -> Result<Token, ScanError> {
		let start = self.pos.clone();
		let mut literal = String::new();
		let mut dot = false;

		while let Some(c) = self.current() {
			if c == '.' {
				if dot {
					break;
				}
				dot = true;
				literal.push('.');
			} else if c.is_ascii_digit() {
				literal.push(c);
			} else {
				break;
			}
			self.advance();
		}

		let span = Span::new(start, self.pos.clone());
		if literal == "." {
			return Err(ScanError::new(span, ScanErrorType::IllegalCharacter(literal)));
		}

		if dot {
			match literal.parse() {
				Ok(value) => Ok(Token::new(Float(value), span)),
				Err(_) => Err(ScanError::new(span, ScanErrorType::IllegalCharacter(literal))),
			}
		} else {
			match literal.parse() {
				Ok(value) => Ok(Token::new(Int(value), span)),
				// Only digits were consumed, so this is an out-of-range
				// literal for the 64-bit payload.
				Err(_) => Err(ScanError::new(span, ScanErrorType::IllegalCharacter(literal))),
			}
		}
	}

	/// Scan an identifier or type keyword.
	fn identifier(&mut self) -> Token {
		let start = self.pos.clone();
		while let Some(c) = self.current() {
			if !is_name_continue(c) {
				break;
			}
			self.advance();
		}
		let text = &self.source.text[start.index..self.pos.index];
		Token::new(TokenType::keyword_or_identifier(text), Span::new(start, self.pos.clone()))
	}
}
