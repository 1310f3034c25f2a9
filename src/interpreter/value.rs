//! Runtime numeric values.
//!
//! A value is a 64-bit integer or a double, tagged by which one it is; the
//! tag is what declarations and reassignments are checked against. Results
//! of `+`, `-`, `*` and `**` are floats whenever either operand is a float,
//! otherwise integers. Division and modulo are different: with two integer
//! operands the result stays an integer only when it is mathematically
//! exact, so `4 / 2` is the int `2` while `1 / 2` is the float `0.5`. A
//! power result that lands exactly on an integer narrows back to int even
//! when an input was a float.
//!
//! Every value remembers the span that produced it and the evaluation
//! context it was produced in; both are read only when an operation on the
//! value fails, to anchor and trace the error.

use std::rc::Rc;

use crate::{
	error::interpreter::{RuntimeError, RuntimeErrorType},
	interpreter::context::Context,
	position::Span,
};

/// The two numeric kinds of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
	Int,
	Float,
}

impl std::fmt::Display for NumberType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			NumberType::Int => write!(f, "int"),
			NumberType::Float => write!(f, "float"),
		}
	}
}

/// The numeric payload of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
	Int(i64),
	Float(f64),
}

/// A runtime number: payload, source span, and originating context.
#[derive(Debug, Clone)]
pub struct Number {
	pub value:          NumberValue,
	pub span:           Span,
	pub(crate) context: Option<Rc<Context>>,
}

impl Number {
	pub fn int(value: i64, span: Span) -> Self {
		Self { value: NumberValue::Int(value), span, context: None }
	}

	pub fn float(value: f64, span: Span) -> Self {
		Self { value: NumberValue::Float(value), span, context: None }
	}

	pub fn r#type(&self) -> NumberType {
		match self.value {
			NumberValue::Int(_) => NumberType::Int,
			NumberValue::Float(_) => NumberType::Float,
		}
	}

	pub(crate) fn with_span(mut self, span: Span) -> Self {
		self.span = span;
		self
	}

	pub(crate) fn with_context(mut self, context: Rc<Context>) -> Self {
		self.context = Some(context);
		self
	}

	fn as_f64(&self) -> f64 {
		match self.value {
			NumberValue::Int(value) => value as f64,
			NumberValue::Float(value) => value,
		}
	}

	fn is_zero(&self) -> bool {
		match self.value {
			NumberValue::Int(value) => value == 0,
			NumberValue::Float(value) => value == 0.0,
		}
	}

	/// Wrap a result payload, carrying this value's context forward.
	fn derived(&self, value: NumberValue) -> Self {
		Self { value, span: self.span.clone(), context: self.context.clone() }
	}

	/// An integer result that leaves the 64-bit payload is out of range.
	fn overflow(&self, other: &Self) -> RuntimeError {
		RuntimeError::new(
			RuntimeErrorType::Range { details: "Integer overflow while trying to compute result".to_string() },
			self.span.to(&other.span),
			self.context.as_deref(),
		)
	}

	fn check_divisor(&self, other: &Self) -> Result<(), RuntimeError> {
		if other.is_zero() {
			return Err(RuntimeError::new(
				RuntimeErrorType::DivisionByZero,
				other.span.clone(),
				self.context.as_deref(),
			));
		}
		Ok(())
	}

	pub(crate) fn add(&self, other: &Self) -> Result<Self, RuntimeError> {
		let value = match (self.value, other.value) {
			(NumberValue::Int(l), NumberValue::Int(r)) => {
				NumberValue::Int(l.checked_add(r).ok_or_else(|| self.overflow(other))?)
			}
			_ => NumberValue::Float(self.as_f64() + other.as_f64()),
		};
		Ok(self.derived(value))
	}

	pub(crate) fn sub(&self, other: &Self) -> Result<Self, RuntimeError> {
		let value = match (self.value, other.value) {
			(NumberValue::Int(l), NumberValue::Int(r)) => {
				NumberValue::Int(l.checked_sub(r).ok_or_else(|| self.overflow(other))?)
			}
			_ => NumberValue::Float(self.as_f64() - other.as_f64()),
		};
		Ok(self.derived(value))
	}

	pub(crate) fn mul(&self, other: &Self) -> Result<Self, RuntimeError> {
		let value = match (self.value, other.value) {
			(NumberValue::Int(l), NumberValue::Int(r)) => {
				NumberValue::Int(l.checked_mul(r).ok_or_else(|| self.overflow(other))?)
			}
			_ => NumberValue::Float(self.as_f64() * other.as_f64()),
		};
		Ok(self.derived(value))
	}

	/// Divide, failing on a zero divisor. Two integers with an exact
	/// quotient stay an integer; anything else is a float.
	pub(crate) fn div(&self, other: &Self) -> Result<Self, RuntimeError> {
		self.check_divisor(other)?;
		let value = match (self.value, other.value) {
			(NumberValue::Int(l), NumberValue::Int(r)) => match l.checked_rem(r) {
				Some(0) => NumberValue::Int(l / r),
				Some(_) => NumberValue::Float(l as f64 / r as f64),
				// i64::MIN / -1 is the one quotient that cannot be represented.
				None => return Err(self.overflow(other)),
			},
			_ => NumberValue::Float(self.as_f64() / other.as_f64()),
		};
		Ok(self.derived(value))
	}

	/// Floored modulo (the remainder takes the divisor's sign), failing on a
	/// zero divisor. Two integer operands always produce an exact integer.
	pub(crate) fn rem(&self, other: &Self) -> Result<Self, RuntimeError> {
		self.check_divisor(other)?;
		let value = match (self.value, other.value) {
			(NumberValue::Int(l), NumberValue::Int(r)) => match l.checked_rem(r) {
				Some(raw) => {
					let value = if raw != 0 && (raw < 0) != (r < 0) { raw + r } else { raw };
					NumberValue::Int(value)
				}
				// i64::MIN % -1 is exactly zero.
				None => NumberValue::Int(0),
			},
			_ => {
				let (l, r) = (self.as_f64(), other.as_f64());
				let raw = l % r;
				let value = if raw != 0.0 && (raw < 0.0) != (r < 0.0) { raw + r } else { raw };
				NumberValue::Float(value)
			}
		};
		Ok(self.derived(value))
	}

	/// Exponentiation. Integer base and non-negative integer exponent use
	/// checked integer arithmetic; everything else evaluates in floating
	/// point. A negative base with a non-whole exponent has no real result
	/// and fails, reporting the complex number that would have been created.
	pub(crate) fn pow(&self, other: &Self) -> Result<Self, RuntimeError> {
		if let (NumberValue::Int(base), NumberValue::Int(exponent)) = (self.value, other.value)
			&& exponent >= 0
		{
			let exponent = u32::try_from(exponent).map_err(|_| self.overflow(other))?;
			let value = base.checked_pow(exponent).ok_or_else(|| self.overflow(other))?;
			return Ok(self.derived(NumberValue::Int(value)));
		}

		let (base, exponent) = (self.as_f64(), other.as_f64());
		if base < 0.0 && exponent.fract() != 0.0 {
			// |b|^e * (cos(pi e) + i sin(pi e)), the principal complex result.
			let magnitude = (-base).powf(exponent);
			let real = magnitude * (std::f64::consts::PI * exponent).cos();
			let imag = magnitude * (std::f64::consts::PI * exponent).sin();
			let sign = if imag >= 0.0 { "+" } else { "-" };
			return Err(RuntimeError::new(
				RuntimeErrorType::Range {
					details: format!(
						"pow(x, y) where x < 0 and y is not whole has undefined behavior.\n(Complex number created: {real}{sign}{}i)",
						imag.abs()
					),
				},
				self.span.to(&other.span),
				self.context.as_deref(),
			));
		}

		let result = base.powf(exponent);
		// Exactly integral results narrow to int, even from float inputs.
		let value = if result.is_finite() && result.fract() == 0.0 && result.abs() <= i64::MAX as f64 {
			NumberValue::Int(result as i64)
		} else {
			NumberValue::Float(result)
		};
		Ok(self.derived(value))
	}
}

impl std::fmt::Display for Number {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.value {
			NumberValue::Int(value) => write!(f, "{value}"),
			NumberValue::Float(value) => {
				if value.is_finite() && value.fract() == 0.0 {
					write!(f, "{value:.1}")
				} else {
					write!(f, "{value}")
				}
			}
		}
	}
}
