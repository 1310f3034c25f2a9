//! Tree-walking evaluator.
//!
//! The interpreter walks the syntax tree produced by the parser, dispatching
//! on the node variant with a closed match — there is no reflective lookup,
//! so "a node nobody handles" is not a reachable state, only a compile
//! error when a variant is added.
//!
//! Evaluation order is fixed: a binary node evaluates its left operand
//! fully (an error there short-circuits before the right operand runs),
//! then its right operand, then applies the operator. An assignment
//! evaluates its value expression first and only then checks the rules, in
//! order: a plain reassignment of an unknown name fails, re-declaring an
//! existing name fails, a kind mismatch against the declared (or existing)
//! kind fails, and otherwise the value is stored and returned.

pub mod context;
pub mod value;

use std::rc::Rc;

use context::Context;
use value::{Number, NumberType};

use crate::{
	environment::Environment,
	error::interpreter::{RuntimeError, RuntimeErrorType},
	parser::Expression,
	position::Span,
	scanner::TokenType,
};

/// Evaluates expressions against a typed variable store.
pub(crate) struct Interpreter {
	environment: Environment,
}

impl Interpreter {
	pub fn new() -> Self { Self { environment: Environment::new() } }

	/// Evaluate `expression` inside `context`, reading and writing variables
	/// in the interpreter's environment.
	pub fn evaluate(&mut self, expression: &Expression, context: &Rc<Context>) -> Result<Number, RuntimeError> {
		Ok(match expression {
			Expression::Integer { value, span } => {
				Number::int(*value, span.clone()).with_context(context.clone())
			}
			Expression::Float { value, span } => {
				Number::float(*value, span.clone()).with_context(context.clone())
			}
			Expression::Variable { name, span } => {
				self.environment.get(name).cloned().ok_or_else(|| {
					RuntimeError::new(
						RuntimeErrorType::NotDefined { name: name.clone() },
						span.clone(),
						Some(context.as_ref()),
					)
				})?
			}
			Expression::Assign { declared, name, value, span } => {
				let value = self.evaluate(value, context)?;
				self.assign(*declared, name, value, span, context)?
			}
			Expression::Binary { left, operator, right, span } => {
				let left = self.evaluate(left, context)?;
				let right = self.evaluate(right, context)?;
				let result = match operator.r#type {
					TokenType::Plus => left.add(&right),
					TokenType::Minus => left.sub(&right),
					TokenType::Mul => left.mul(&right),
					TokenType::Div => left.div(&right),
					TokenType::Mod => left.rem(&right),
					TokenType::Pow => left.pow(&right),
					// The parser only builds arithmetic operators into binary nodes.
					_ => unreachable!("non-arithmetic operator in a binary node"),
				}?;
				result.with_span(span.clone())
			}
			Expression::Unary { operator, operand, span } => {
				let value = self.evaluate(operand, context)?;
				let value = match operator.r#type {
					// Negation is multiplication by the integer literal -1,
					// which is also what drives the result's promotion.
					TokenType::Minus => value.mul(&Number::int(-1, operator.span.clone()))?,
					_ => value,
				};
				value.with_span(span.clone())
			}
		})
	}

	/// Apply the declaration/assignment rules and store the value.
	fn assign(
		&mut self,
		declared: Option<NumberType>,
		name: &str,
		value: Number,
		span: &Span,
		context: &Rc<Context>,
	) -> Result<Number, RuntimeError> {
		let existing = self.environment.r#type(name);
		let fail = |r#type| Err(RuntimeError::new(r#type, span.clone(), Some(context.as_ref())));

		match (declared, existing) {
			(None, None) => fail(RuntimeErrorType::NotDefined { name: name.to_string() }),
			(Some(_), Some(_)) => fail(RuntimeErrorType::AlreadyDefined { name: name.to_string() }),
			(Some(declared), None) if value.r#type() != declared => {
				fail(RuntimeErrorType::Type { found: value.r#type(), expected: declared })
			}
			(None, Some(existing)) if value.r#type() != existing => {
				fail(RuntimeErrorType::Type { found: value.r#type(), expected: existing })
			}
			(Some(declared), None) => {
				self.environment.set(declared, name, value.clone());
				Ok(value)
			}
			(None, Some(existing)) => {
				self.environment.set(existing, name, value.clone());
				Ok(value)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::value::NumberValue;
	use crate::{error::interpreter::TraceFrame, parser::Parser, position::Source, scanner::Scanner};

	/// Run a sequence of statements through one interpreter, returning the
	/// last value.
	fn session(statements: &[&str]) -> Result<Number, RuntimeError> {
		let mut interpreter = Interpreter::new();
		let context = Context::global();
		let mut last = None;
		for statement in statements {
			let (tokens, error) = Scanner::new(Source::new("<test>", *statement)).scan_tokens();
			assert!(error.is_none(), "scan failed on {statement:?}");
			let ast = Parser::new(tokens).parse().unwrap();
			last = Some(interpreter.evaluate(&ast, &context)?);
		}
		Ok(last.unwrap())
	}

	fn eval(statement: &str) -> Result<Number, RuntimeError> { session(&[statement]) }

	#[test]
	fn literals_keep_their_kind() {
		assert_eq!(eval("5").unwrap().value, NumberValue::Int(5));
		assert_eq!(eval("5.0").unwrap().value, NumberValue::Float(5.0));
	}

	#[test]
	fn arithmetic_promotes_per_operand_kinds() {
		assert_eq!(eval("1 + 2").unwrap().value, NumberValue::Int(3));
		assert_eq!(eval("1 + 2.0").unwrap().value, NumberValue::Float(3.0));
		assert_eq!(eval("4 / 2").unwrap().value, NumberValue::Int(2));
		assert_eq!(eval("1 / 2").unwrap().value, NumberValue::Float(0.5));
		assert_eq!(eval("7 % 3").unwrap().value, NumberValue::Int(1));
		assert_eq!(eval("2 ** 10").unwrap().value, NumberValue::Int(1024));
	}

	#[test]
	fn unary_minus_preserves_kind() {
		assert_eq!(eval("-2").unwrap().value, NumberValue::Int(-2));
		assert_eq!(eval("-2.5").unwrap().value, NumberValue::Float(-2.5));
		assert_eq!(eval("+3").unwrap().value, NumberValue::Int(3));
	}

	#[test]
	fn division_by_zero_points_at_the_divisor() {
		let error = eval("1 / 0").unwrap_err();
		assert!(matches!(error.r#type, RuntimeErrorType::DivisionByZero));
		assert_eq!(error.span.start.column, 4);

		let error = eval("10 % (2 - 2)").unwrap_err();
		assert!(matches!(error.r#type, RuntimeErrorType::DivisionByZero));
		assert_eq!(error.span.start.column, 6);
	}

	#[test]
	fn power_domain_and_narrowing() {
		assert!(matches!(eval("(-8) ** 0.5").unwrap_err().r#type, RuntimeErrorType::Range { .. }));
		assert_eq!(eval("2 ** 0.5").unwrap().r#type(), NumberType::Float);
		assert_eq!(eval("4.0 ** 0.5").unwrap().value, NumberValue::Int(2));
		assert_eq!(eval("(-8) ** 2").unwrap().value, NumberValue::Int(64));
	}

	#[test]
	fn declaration_then_reassignment() {
		assert_eq!(session(&["int x = 5", "x = 6"]).unwrap().value, NumberValue::Int(6));
		assert_eq!(session(&["int x = 5", "x = x + 1", "x * 2"]).unwrap().value, NumberValue::Int(12));
	}

	#[test]
	fn redeclaration_is_rejected() {
		let error = session(&["int x = 5", "float x = 6.0"]).unwrap_err();
		assert!(matches!(error.r#type, RuntimeErrorType::AlreadyDefined { .. }));
	}

	#[test]
	fn reassignment_must_keep_the_declared_kind() {
		let error = session(&["int x = 5", "x = 6.0"]).unwrap_err();
		assert!(matches!(
			error.r#type,
			RuntimeErrorType::Type { found: NumberType::Float, expected: NumberType::Int }
		));
	}

	#[test]
	fn declared_kind_must_match_the_value() {
		let error = eval("float f = 2").unwrap_err();
		assert!(matches!(
			error.r#type,
			RuntimeErrorType::Type { found: NumberType::Int, expected: NumberType::Float }
		));
	}

	#[test]
	fn unknown_variables_are_rejected() {
		assert!(matches!(eval("y").unwrap_err().r#type, RuntimeErrorType::NotDefined { .. }));
		assert!(matches!(eval("y = 1").unwrap_err().r#type, RuntimeErrorType::NotDefined { .. }));
	}

	#[test]
	fn parenthesized_declarations_are_expressions() {
		assert_eq!(session(&["(int z = 2) + 3", "z"]).unwrap().value, NumberValue::Int(2));
	}

	#[test]
	fn runtime_errors_carry_the_global_frame() {
		let error = eval("1 / 0").unwrap_err();
		assert_eq!(error.trace, vec![TraceFrame { line: 0, context: "<global>".to_string() }]);
	}
}
