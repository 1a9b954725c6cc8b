use crate::archive::{Fields, Inherits, Record, RecordDef};

/// Flat record of the four common scalar kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animal {
	/// Leg count.
	pub legs: i32,
	/// Mammal flag.
	pub is_mammal: bool,
	/// Height in arbitrary units.
	pub height: f64,
	/// Display name.
	pub name: String,
}

impl Animal {
	/// `{"legs":4,"is_mammal":true,"height":9.83,"name":"Horse"}`.
	pub fn horse() -> Self {
		Self {
			legs: 4,
			is_mammal: true,
			height: 9.83,
			name: "Horse".to_owned(),
		}
	}
}

impl Record for Animal {
	fn register<F: Fields<Self>>(fields: &mut F) {
		crate::bind!(fields; legs, is_mammal, height, name);
	}
}

/// Record converted only through [`HumanDef`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Human {
	/// Hand description.
	pub hand: String,
}

/// External definition for [`Human`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanDef;

impl RecordDef<Human> for HumanDef {
	fn register<F: Fields<Human>>(fields: &mut F) {
		fields.bind("hand", |h| &h.hand, |h| &mut h.hand);
	}
}

/// Derived record: an [`Animal`] base nested under `"animal"`, sequences, an
/// externally defined member, and an optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bird {
	/// Base slice.
	pub animal: Animal,
	/// Flight flag.
	pub can_fly: bool,
	/// Sequence of nested records.
	pub fat: Vec<Animal>,
	/// Sequence of scalars.
	pub money: Vec<i32>,
	/// Member converted through [`HumanDef`].
	pub man: Human,
	/// Optional scalar, omitted from output when `None`.
	pub wingspan: Option<f32>,
}

impl Bird {
	/// Horse base, three `fat` animals with 10, 11 and 12 legs, and no wingspan.
	pub fn sample() -> Self {
		let animal = Animal::horse();
		let fat = [10, 11, 12]
			.into_iter()
			.map(|legs| Animal {
				legs,
				..animal.clone()
			})
			.collect();
		Self {
			animal,
			can_fly: true,
			fat,
			money: vec![100, 200, 20, 21],
			man: Human { hand: "paw".to_owned() },
			wingspan: None,
		}
	}
}

impl Inherits<Animal> for Bird {
	fn base(&self) -> &Animal {
		&self.animal
	}

	fn base_mut(&mut self) -> &mut Animal {
		&mut self.animal
	}
}

impl Record for Bird {
	fn register<F: Fields<Self>>(fields: &mut F) {
		fields
			.bind_base::<Animal>("animal")
			.bind("can_fly", |b| &b.can_fly, |b| &mut b.can_fly)
			.bind("fat", |b| &b.fat, |b| &mut b.fat)
			.bind("money", |b| &b.money, |b| &mut b.money)
			.bind_with::<HumanDef, _>("man", |b| &b.man, |b| &mut b.man)
			.bind("wingspan", |b| &b.wingspan, |b| &mut b.wingspan);
	}
}
