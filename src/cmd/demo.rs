use staticjson::archive::{from_text, to_text};
use staticjson::samples::{Animal, Bird};

use crate::cmd::CmdError;

/// Encode the sample animal and a winged sample bird, decode them back, and compare.
pub fn run() -> crate::cmd::Result<()> {
	let horse = Animal::horse();
	let text = to_text(&horse)?;
	println!("animal: {text}");
	let mut decoded = Animal::default();
	from_text(&mut decoded, &text)?;
	check("animal", decoded == horse)?;

	let bird = Bird {
		wingspan: Some(1.5),
		..Bird::sample()
	};
	let text = to_text(&bird)?;
	println!("bird: {text}");
	let mut decoded = Bird::default();
	let report = from_text(&mut decoded, &text)?;
	check("bird", decoded == bird && report.is_clean())?;

	println!("round trip: ok");
	Ok(())
}

fn check(record: &'static str, equal: bool) -> crate::cmd::Result<()> {
	if equal { Ok(()) } else { Err(CmdError::RoundTrip { record }) }
}

#[cfg(test)]
mod tests {
	use super::check;
	use crate::cmd::CmdError;

	#[test]
	fn mismatch_is_a_round_trip_error() {
		assert!(check("animal", true).is_ok());
		let err = check("bird", false).expect_err("unequal records fail");
		assert!(matches!(err, CmdError::RoundTrip { record: "bird" }));
		assert_eq!(err.to_string(), "bird differs after round trip");
	}
}
