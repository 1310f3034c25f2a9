//! Evaluation contexts.
//!
//! A context is a named frame used only for traceback rendering, not for
//! scoping. Frames form a finite, acyclic chain: each context owns a handle
//! to its parent together with the position in the parent where it was
//! entered. The language has no callable units, so the chain never grows
//! past the single `<global>` frame today, but the shape supports arbitrary
//! depth so an embedding shell can wrap evaluations in named contexts.

use std::rc::Rc;

use crate::{error::interpreter::TraceFrame, position::Position};

/// A named evaluation frame.
#[derive(Debug)]
pub struct Context {
	pub display_name:     String,
	pub parent:           Option<Rc<Context>>,
	/// Where in the parent this context was entered.
	pub parent_entry_pos: Option<Position>,
}

impl Context {
	/// The root frame every evaluation starts in.
	pub fn global() -> Rc<Self> {
		Rc::new(Self { display_name: "<global>".to_string(), parent: None, parent_entry_pos: None })
	}

	/// A child frame entered from `parent` at `entry`.
	pub fn nested(display_name: impl Into<String>, parent: Rc<Context>, entry: Position) -> Rc<Self> {
		Rc::new(Self {
			display_name:     display_name.into(),
			parent:           Some(parent),
			parent_entry_pos: Some(entry),
		})
	}

	/// Materialize the chain into trace frames for an error raised at `pos`,
	/// outermost frame first (most recent last, as the report renders them).
	pub fn traceback(&self, pos: &Position) -> Vec<TraceFrame> {
		let mut frames = Vec::new();
		let mut line = pos.line;
		let mut context = Some(self);

		while let Some(current) = context {
			frames.push(TraceFrame { line, context: current.display_name.clone() });
			line = current.parent_entry_pos.as_ref().map_or(0, |entry| entry.line);
			context = current.parent.as_deref();
		}

		frames.reverse();
		frames
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::position::Source;

	#[test]
	fn traceback_of_the_global_frame() {
		let pos = Position::start(Source::new("<test>", "1 / 0"));
		let frames = Context::global().traceback(&pos);
		assert_eq!(frames, vec![TraceFrame { line: 0, context: "<global>".to_string() }]);
	}

	#[test]
	fn traceback_walks_the_chain_outermost_first() {
		let source = Source::new("<test>", "1 + 2\n3 + 4");
		let mut entry = Position::start(source);
		for c in "1 + 2\n".chars() {
			entry.advance(c);
		}

		let inner = Context::nested("<inner>", Context::global(), entry.clone());
		let frames = inner.traceback(&entry);

		assert_eq!(frames.len(), 2);
		assert_eq!((frames[0].line, frames[0].context.as_str()), (1, "<global>"));
		assert_eq!((frames[1].line, frames[1].context.as_str()), (1, "<inner>"));
	}
}
