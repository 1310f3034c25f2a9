//! # tint
//!
//! A tiny expression language with `int`/`float` typed variables, evaluated
//! by a tree walk. One line of input is one statement: either a plain
//! arithmetic expression, a typed declaration (`int x = 5`), or a
//! reassignment (`x = 6`) that must keep the variable's declared kind.

//! ## Pipeline
//!
//! Three stages, each of which stops at its first error:
//!
//! 1. The **scanner** turns characters into tokens, carrying a full source
//!    position (index, line, column) for every one of them.
//! 2. The **parser** turns tokens into one expression tree by recursive
//!    descent, with a single point of backtracking to tell a reassignment
//!    apart from an expression that merely starts with a variable.
//! 3. The **interpreter** walks the tree, promoting numeric kinds per
//!    operator and checking every write against the typed environment.
//!
//! Spans travel the whole way: tokens carry them, nodes derive theirs from
//! their children, and values keep the span of whatever produced them, so a
//! failure deep in evaluation can still underline the exact source text and
//! print a traceback of the evaluation contexts it happened in.

//! ## Use
//!
//! ```
//! use tint::{NumberValue, Tint};
//!
//! let mut tint = Tint::new(false);
//! tint.run("<example>", "int x = 6").unwrap();
//! let value = tint.run("<example>", "x * 7").unwrap();
//! assert!(matches!(value.value, NumberValue::Int(42)));
//! ```
//!
//! The interpreter state lives in the [`Tint`] value, so variables persist
//! from one `run` to the next — that is what makes the prompt useful. Each
//! concurrent session owns its own `Tint`; nothing here is shared or
//! synchronized.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod parser;
mod position;
mod scanner;
mod tint;

pub use environment::Environment;
pub use error::{
	ParseError, ParseErrorType, RuntimeError, RuntimeErrorType, ScanError, ScanErrorType, TintError,
	TraceFrame,
};
pub use interpreter::context::Context;
pub use interpreter::value::{Number, NumberType, NumberValue};
pub use position::{Position, Source, Span};
pub use tint::Tint;
