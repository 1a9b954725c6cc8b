use serde_json::{Value, json};

use crate::archive::test_support::{Animal, Bird, HumanDef};
use crate::archive::{JsonBuilder, Member, TreeBuilder, save_with, to_tree, to_tree_in};

/// Delegates to [`JsonBuilder`] and records every attached member key.
#[derive(Default)]
struct Recording {
	inner: JsonBuilder,
	keys: Vec<String>,
}

impl TreeBuilder for Recording {
	type Node = Value;

	fn node(&mut self) -> Value {
		self.inner.node()
	}

	fn set_bool(&mut self, node: &mut Value, value: bool) {
		self.inner.set_bool(node, value);
	}

	fn set_i64(&mut self, node: &mut Value, value: i64) {
		self.inner.set_i64(node, value);
	}

	fn set_u64(&mut self, node: &mut Value, value: u64) {
		self.inner.set_u64(node, value);
	}

	fn set_f64(&mut self, node: &mut Value, value: f64) {
		self.inner.set_f64(node, value);
	}

	fn set_str(&mut self, node: &mut Value, value: &str) {
		self.inner.set_str(node, value);
	}

	fn set_array(&mut self, node: &mut Value) {
		self.inner.set_array(node);
	}

	fn set_object(&mut self, node: &mut Value) {
		self.inner.set_object(node);
	}

	fn push(&mut self, array: &mut Value, child: Value) {
		self.inner.push(array, child);
	}

	fn add_member(&mut self, object: &mut Value, key: &str, child: Value) {
		self.keys.push(key.to_owned());
		self.inner.add_member(object, key, child);
	}

	fn remove_member(&mut self, object: &mut Value, key: &str) {
		self.inner.remove_member(object, key);
	}
}

#[test]
fn horse_encodes_every_registered_field() {
	let mut document = Value::Null;
	to_tree(&Animal::horse(), &mut document);
	assert_eq!(document, json!({"legs": 4, "is_mammal": true, "height": 9.83, "name": "Horse"}));
}

#[test]
fn base_record_nests_beside_derived_fields() {
	let mut document = Value::Null;
	to_tree(&Bird::sample(), &mut document);

	assert_eq!(document["animal"], json!({"legs": 4, "is_mammal": true, "height": 9.83, "name": "Horse"}));
	assert_eq!(document["can_fly"], json!(true));
	assert_eq!(document["man"], json!({"hand": "paw"}));
	assert_eq!(document["money"], json!([100, 200, 20, 21]));

	let legs: Vec<i64> = document["fat"]
		.as_array()
		.expect("fat is an array")
		.iter()
		.filter_map(|animal| animal["legs"].as_i64())
		.collect();
	assert_eq!(legs, [10, 11, 12]);
}

#[test]
fn absent_optional_emits_no_member() {
	let mut document = Value::Null;
	to_tree(&Bird::sample(), &mut document);
	assert!(document.get("wingspan").is_none());

	let bird = Bird {
		wingspan: Some(0.5),
		..Bird::sample()
	};
	to_tree(&bird, &mut document);
	assert_eq!(document["wingspan"], json!(0.5));
}

#[test]
fn members_attach_in_registration_order() {
	let mut builder = Recording::default();
	let mut document = Value::Null;
	to_tree_in(&Bird::sample(), &mut document, &mut builder);

	let top: Vec<&str> = builder.keys.iter().map(String::as_str).filter(|key| ["animal", "can_fly", "fat", "money", "man", "wingspan"].contains(key)).collect();
	assert_eq!(top, ["animal", "can_fly", "fat", "money", "man"]);

	let keys: Vec<&str> = document.as_object().expect("record encodes an object").keys().map(String::as_str).collect();
	assert_eq!(keys, ["animal", "can_fly", "fat", "money", "man"]);
}

#[test]
fn existing_members_are_kept() {
	let mut document = json!({"note": "kept", "legs": 0});
	to_tree(&Animal::horse(), &mut document);
	assert_eq!(document["note"], json!("kept"));
	assert_eq!(document["legs"], json!(4));
}

#[test]
fn external_definition_encodes_foreign_record() {
	let mut builder = JsonBuilder::new();
	let mut document = Value::Null;
	save_with::<HumanDef, _, _>(&Bird::sample().man, &mut document, &mut builder);
	assert_eq!(document, json!({"hand": "paw"}));

	let mut document = Value::Null;
	save_with::<Member, _, _>(&Animal::horse(), &mut document, &mut builder);
	assert_eq!(document["name"], json!("Horse"));
}

#[test]
fn reused_node_drops_member_of_now_absent_optional() {
	let mut document = Value::Null;
	let winged = Bird {
		wingspan: Some(2.0),
		..Bird::sample()
	};
	to_tree(&winged, &mut document);
	assert_eq!(document["wingspan"], json!(2.0));

	document["note"] = json!("kept");
	to_tree(&Bird::sample(), &mut document);
	assert!(document.get("wingspan").is_none());
	assert_eq!(document["note"], json!("kept"));
}
