use serde_json::{Map, Number, Value};

use crate::archive::{NodeKind, TreeBuilder, TreeRead};

impl TreeRead for Value {
	type Elements<'a> = std::slice::Iter<'a, Value>;

	fn kind(&self) -> NodeKind {
		match self {
			Value::Null => NodeKind::Null,
			Value::Bool(false) => NodeKind::False,
			Value::Bool(true) => NodeKind::True,
			Value::Number(_) => NodeKind::Number,
			Value::String(_) => NodeKind::String,
			Value::Array(_) => NodeKind::Array,
			Value::Object(_) => NodeKind::Object,
		}
	}

	fn member(&self, key: &str) -> Option<&Self> {
		self.as_object()?.get(key)
	}

	fn elements(&self) -> Option<Self::Elements<'_>> {
		self.as_array().map(|items| items.iter())
	}

	fn get_bool(&self) -> Option<bool> {
		self.as_bool()
	}

	fn get_i64(&self) -> Option<i64> {
		self.as_i64()
	}

	fn get_u64(&self) -> Option<u64> {
		self.as_u64()
	}

	fn get_f64(&self) -> Option<f64> {
		self.as_f64()
	}

	fn get_str(&self) -> Option<&str> {
		self.as_str()
	}
}

/// Tree-building context for `serde_json::Value` documents.
///
/// `serde_json` nodes own their children, so the context only keeps a count of
/// allocated nodes for diagnostics.
#[derive(Debug, Default)]
pub struct JsonBuilder {
	allocated: usize,
}

impl JsonBuilder {
	/// Create a context with a zeroed allocation count.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of nodes allocated through this context.
	pub fn allocated(&self) -> usize {
		self.allocated
	}
}

impl TreeBuilder for JsonBuilder {
	type Node = Value;

	fn node(&mut self) -> Value {
		self.allocated += 1;
		Value::Null
	}

	fn set_bool(&mut self, node: &mut Value, value: bool) {
		*node = Value::Bool(value);
	}

	fn set_i64(&mut self, node: &mut Value, value: i64) {
		*node = Value::Number(Number::from(value));
	}

	fn set_u64(&mut self, node: &mut Value, value: u64) {
		*node = Value::Number(Number::from(value));
	}

	fn set_f64(&mut self, node: &mut Value, value: f64) {
		*node = match Number::from_f64(value) {
			Some(number) => Value::Number(number),
			None => {
				log::warn!("non-finite float {value} has no json form, writing null");
				Value::Null
			}
		};
	}

	fn set_str(&mut self, node: &mut Value, value: &str) {
		*node = Value::String(value.to_owned());
	}

	fn set_array(&mut self, node: &mut Value) {
		if !node.is_array() {
			*node = Value::Array(Vec::new());
		}
	}

	fn set_object(&mut self, node: &mut Value) {
		if !node.is_object() {
			*node = Value::Object(Map::new());
		}
	}

	fn push(&mut self, array: &mut Value, child: Value) {
		self.set_array(array);
		if let Value::Array(items) = array {
			items.push(child);
		}
	}

	fn add_member(&mut self, object: &mut Value, key: &str, child: Value) {
		self.set_object(object);
		if let Value::Object(map) = object {
			map.insert(key.to_owned(), child);
		}
	}

	fn remove_member(&mut self, object: &mut Value, key: &str) {
		if let Value::Object(map) = object {
			map.shift_remove(key);
		}
	}
}
