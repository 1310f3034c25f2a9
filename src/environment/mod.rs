//! Typed storage for variables.
//!
//! The declared kind and the current value of each variable live in parallel
//! maps keyed by name: the kind, once set, never changes, while the value is
//! replaced on every reassignment. The store itself is pure — every rule
//! about what may be written lives in the interpreter. Lookup searches the
//! current table and then its parent; the global table has no parent today,
//! but the chain keeps the storage reusable for nested evaluation sessions.

use std::collections::HashMap;

use crate::interpreter::value::{Number, NumberType};

/// A typed symbol table.
#[derive(Default, Debug)]
pub struct Environment {
	values: HashMap<String, Number>,
	types:  HashMap<String, NumberType>,
	parent: Option<Box<Environment>>,
}

impl Environment {
	pub fn new() -> Self { Self::default() }

	/// The current value of `name`, if it exists here or in a parent.
	pub fn get(&self, name: &str) -> Option<&Number> {
		self.values.get(name).or_else(|| self.parent.as_ref().and_then(|parent| parent.get(name)))
	}

	/// The declared kind of `name`, if it exists here or in a parent.
	pub fn r#type(&self, name: &str) -> Option<NumberType> {
		self.types.get(name).copied().or_else(|| self.parent.as_ref().and_then(|parent| parent.r#type(name)))
	}

	/// Store `value` under `name` with the declared kind `type`.
	pub fn set(&mut self, r#type: NumberType, name: &str, value: Number) {
		self.values.insert(name.to_string(), value);
		self.types.insert(name.to_string(), r#type);
	}

	/// Drop `name` from this table (parents are untouched).
	pub fn remove(&mut self, name: &str) {
		self.values.remove(name);
		self.types.remove(name);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		interpreter::value::NumberValue,
		position::{Position, Source, Span},
	};

	fn value(n: i64) -> Number { Number::int(n, Span::empty(Position::start(Source::new("<test>", "")))) }

	#[test]
	fn set_get_remove() {
		let mut environment = Environment::new();
		assert!(environment.get("x").is_none());

		environment.set(NumberType::Int, "x", value(5));
		assert_eq!(environment.r#type("x"), Some(NumberType::Int));
		assert_eq!(environment.get("x").unwrap().value, NumberValue::Int(5));

		environment.remove("x");
		assert!(environment.get("x").is_none());
		assert!(environment.r#type("x").is_none());
	}

	#[test]
	fn values_are_replaced_in_place() {
		let mut environment = Environment::new();
		environment.set(NumberType::Int, "x", value(5));
		environment.set(NumberType::Int, "x", value(6));
		assert_eq!(environment.get("x").unwrap().value, NumberValue::Int(6));
	}

	#[test]
	fn lookup_falls_back_to_the_parent() {
		let mut parent = Environment::new();
		parent.set(NumberType::Int, "x", value(1));
		let child = Environment { parent: Some(Box::new(parent)), ..Environment::default() };
		assert_eq!(child.get("x").unwrap().value, NumberValue::Int(1));
		assert_eq!(child.r#type("x"), Some(NumberType::Int));
	}
}
