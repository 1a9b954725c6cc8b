use serde_json::json;

use crate::archive::{Field, IssueKind, JsonBuilder, LoadCtx, LoadOptions, NodeKind, ScalarKind, Shape};

fn cx() -> LoadCtx {
	LoadCtx::new(&LoadOptions::default())
}

#[test]
fn integers_decode_within_range() {
	let mut cx = cx();
	let mut value = 0_i32;
	assert!(value.load(&json!(-12), &mut cx));
	assert_eq!(value, -12);

	let mut wide = 0_u64;
	assert!(wide.load(&json!(u64::MAX), &mut cx));
	assert_eq!(wide, u64::MAX);

	let report = cx.finish().expect("no rejected issues");
	assert!(report.is_clean());
}

#[test]
fn out_of_range_integer_leaves_prior_value() {
	let mut cx = cx();
	let mut value = 9_u32;
	assert!(!value.load(&json!(-1), &mut cx));
	assert_eq!(value, 9);

	let report = cx.finish().expect("skipped issues are tolerated");
	assert_eq!(report.skipped.len(), 1);
	assert_eq!(
		report.skipped[0].kind,
		IssueKind::OutOfRange {
			expected: Shape::Scalar(ScalarKind::U32)
		}
	);
}

#[test]
fn mismatched_kinds_are_not_coerced() {
	let mut cx = cx();
	let mut flag = false;
	assert!(!flag.load(&json!(1), &mut cx));
	assert!(!flag);

	let mut count = 3_i64;
	assert!(!count.load(&json!(true), &mut cx));
	assert!(!count.load(&json!("4"), &mut cx));
	assert_eq!(count, 3);

	let mut text = String::from("kept");
	assert!(!text.load(&json!(4), &mut cx));
	assert_eq!(text, "kept");

	let report = cx.finish().expect("skipped issues are tolerated");
	assert_eq!(report.skipped.len(), 4);
	assert!(matches!(
		report.skipped[0].kind,
		IssueKind::ShapeMismatch {
			found: NodeKind::Number,
			..
		}
	));
}

#[test]
fn floats_accept_integer_nodes() {
	let mut cx = cx();
	let mut height = 0.0_f64;
	assert!(height.load(&json!(9), &mut cx));
	assert_eq!(height, 9.0);
	assert!(height.load(&json!(9.83), &mut cx));
	assert_eq!(height, 9.83);
}

#[test]
fn text_replaces_previous_contents() {
	let mut cx = cx();
	let mut text = String::from("old value");
	assert!(text.load(&json!("Horse"), &mut cx));
	assert_eq!(text, "Horse");
}

#[test]
fn scalars_encode_to_single_nodes() {
	let mut builder = JsonBuilder::new();
	assert_eq!(4_i32.save(&mut builder), Some(json!(4)));
	assert_eq!(true.save(&mut builder), Some(json!(true)));
	assert_eq!(9.83_f64.save(&mut builder), Some(json!(9.83)));
	assert_eq!(String::from("Horse").save(&mut builder), Some(json!("Horse")));
	assert_eq!(builder.allocated(), 4);
}
