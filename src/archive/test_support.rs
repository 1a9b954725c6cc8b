use crate::archive::{Fields, Inherits, Record};
pub(crate) use crate::samples::{Animal, Bird, Human, HumanDef};

/// Self-referential record for recursion tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Branch {
	pub label: String,
	pub children: Vec<Branch>,
}

impl Record for Branch {
	fn register<F: Fields<Self>>(fields: &mut F) {
		crate::bind!(fields; label, children);
	}
}

pub(crate) fn chain(depth: usize) -> Branch {
	let mut node = Branch {
		label: format!("n{depth}"),
		children: Vec::new(),
	};
	for level in (0..depth).rev() {
		node = Branch {
			label: format!("n{level}"),
			children: vec![node],
		};
	}
	node
}

/// Wrappers around [`Human`], which only converts through [`HumanDef`].
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Crowd {
	pub resident: Human,
	pub people: Vec<Human>,
	pub leader: Option<Human>,
	pub pets: Option<Animal>,
}

impl Inherits<Human> for Crowd {
	fn base(&self) -> &Human {
		&self.resident
	}

	fn base_mut(&mut self) -> &mut Human {
		&mut self.resident
	}
}

impl Record for Crowd {
	fn register<F: Fields<Self>>(fields: &mut F) {
		fields
			.bind_base_with::<HumanDef, Human>("resident")
			.bind_with::<Vec<HumanDef>, _>("people", |c| &c.people, |c| &mut c.people)
			.bind_with::<Option<HumanDef>, _>("leader", |c| &c.leader, |c| &mut c.leader)
			.bind("pets", |c| &c.pets, |c| &mut c.pets);
	}
}

pub(crate) fn hand(name: &str) -> Human {
	Human { hand: name.to_owned() }
}
