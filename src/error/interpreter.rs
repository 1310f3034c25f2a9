use crate::{interpreter::context::Context, interpreter::value::NumberType, position::Span};

/// Errors raised during evaluation.
///
/// A runtime error captures the evaluation context chain that was active
/// when it was raised, materialized into trace frames, so the report can
/// show where the failure happened even after the contexts are gone. Today
/// the chain is always the single `<global>` frame, but the rendering walks
/// arbitrary depth.
#[derive(Debug)]
pub struct RuntimeError {
	pub span:   Span,
	/// Context frames, outermost first.
	pub trace:  Vec<TraceFrame>,
	pub r#type: RuntimeErrorType,
}

impl RuntimeError {
	pub(crate) fn new(r#type: RuntimeErrorType, span: Span, context: Option<&Context>) -> Self {
		let trace = context.map_or_else(Vec::new, |context| context.traceback(&span.start));
		Self { span, trace, r#type }
	}

	/// Render the full diagnostic block: traceback, message, excerpt.
	pub fn report(&self) -> String {
		let mut result = String::from("Stack trace (Most recent last):\n");
		for frame in &self.trace {
			result.push_str(&format!(
				"  File {}, line {}, in {}\n",
				self.span.start.source.name,
				frame.line + 1,
				frame.context
			));
		}
		result.push_str(&format!("{self}\n\n{}", self.span.excerpt()));
		result
	}
}

impl std::fmt::Display for RuntimeError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.r#type.name(), self.r#type)
	}
}

impl std::error::Error for RuntimeError {}

/// One rendered frame of the evaluation context chain.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceFrame {
	/// 0-based source line of the frame's position.
	pub line:    usize,
	/// Display name of the evaluation context.
	pub context: String,
}

/// Types of runtime errors.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RuntimeErrorType {
	/// Division or modulo with a zero divisor.
	#[error("Division by zero")]
	DivisionByZero,
	/// A result left the representable range of the numeric model.
	#[error("{details}")]
	Range { details: String },
	/// A variable was read or reassigned before being declared.
	#[error("Variable `{name}` does not exist")]
	NotDefined { name: String },
	/// A declaration reused an existing name.
	#[error("Cannot redefine variable `{name}`")]
	AlreadyDefined { name: String },
	/// A value's kind did not match the variable's declared kind.
	#[error("Cannot place type `{found}` in `{expected}`")]
	Type { found: NumberType, expected: NumberType },
}

impl RuntimeErrorType {
	/// The error class name shown in reports.
	pub fn name(&self) -> &'static str {
		match self {
			RuntimeErrorType::DivisionByZero => "DivisionByZeroError",
			RuntimeErrorType::Range { .. } => "RangeError",
			RuntimeErrorType::NotDefined { .. } => "NotDefinedError",
			RuntimeErrorType::AlreadyDefined { .. } => "AlreadyDefinedError",
			RuntimeErrorType::Type { .. } => "TypeError",
		}
	}
}
