#![allow(missing_docs)]

use serde_json::Value;
use staticjson::archive::{ArchiveError, LoadOptions, from_text, from_text_opts, from_tree, to_text, to_tree};
use staticjson::samples::{Animal, Bird};
use staticjson_testkit::{fixture_json, fixture_text};

#[test]
fn horse_fixture_matches_encoded_text() {
	assert_eq!(to_text(&Animal::horse()).expect("horse encodes"), fixture_text("horse.json").trim_end());

	let mut decoded = Animal::default();
	let report = from_text(&mut decoded, &fixture_text("horse.json")).expect("fixture decodes");
	assert_eq!(decoded, Animal::horse());
	assert!(report.is_clean());
}

#[test]
fn bird_fixture_decodes_and_reencodes() {
	let document = fixture_json("bird.json");
	let mut bird = Bird::default();
	let report = from_tree(&mut bird, &document).expect("fixture decodes");
	assert!(report.is_clean(), "unexpected issues: {:?}", report.skipped);

	assert_eq!(bird.animal, Animal::horse());
	assert!(bird.can_fly);
	assert_eq!(bird.fat.iter().map(|animal| animal.legs).collect::<Vec<_>>(), [10, 11, 12]);
	assert_eq!(bird.money, [100, 200, 20, 21]);
	assert_eq!(bird.man.hand, "paw");
	assert_eq!(bird.wingspan, Some(1.5));
	assert_eq!(
		bird,
		Bird {
			wingspan: Some(1.5),
			..Bird::sample()
		}
	);

	let mut encoded = Value::Null;
	to_tree(&bird, &mut encoded);
	assert_eq!(encoded, document);
}

#[test]
fn partial_fixture_applies_what_fits() {
	let mut bird = Bird::default();
	let report = from_text(&mut bird, &fixture_text("bird_partial.json")).expect("skip policy tolerates partial input");

	assert_eq!(bird.animal.name, "Sparrow");
	assert_eq!(bird.animal.legs, 0);
	assert_eq!(bird.fat, [Animal::default(), Animal { legs: 2, ..Animal::default() }]);
	assert_eq!(bird.money, [5, 7]);
	assert_eq!(bird.wingspan, None);

	let paths: Vec<&str> = report.skipped.iter().map(|issue| issue.path.as_str()).collect();
	assert_eq!(paths.len(), 10);
	assert_eq!(paths[0], "animal.legs");
	assert!(paths.contains(&"money[1]"));
	assert!(paths.contains(&"fat[1].name"));
	assert!(!paths.iter().any(|path| path.starts_with("fat[0]")));
	assert!(!paths.iter().any(|path| path.starts_with("unknown")));
}

#[test]
fn strict_options_fixture_rejects_partial_input() {
	let options = LoadOptions::from_json(&fixture_text("strict_options.json")).expect("options fixture parses");
	assert_eq!(options.max_depth, 16);

	let mut bird = Bird::default();
	let err = from_text_opts(&mut bird, &fixture_text("bird_partial.json"), &options).expect_err("strict options reject");
	let ArchiveError::Rejected { issues } = err else {
		panic!("expected rejected error");
	};
	assert_eq!(issues.len(), 10);
	assert_eq!(issues[0].path, "animal.legs");
}

#[test]
fn malformed_fixture_is_reported() {
	let mut animal = Animal::horse();
	let err = from_text(&mut animal, &fixture_text("malformed.json")).expect_err("malformed fixture fails");
	assert!(matches!(err, ArchiveError::MalformedDocument(_)));
	assert_eq!(animal, Animal::horse());
}
